use light_lang_core::ast::{Expression, InfixOperationKind, Statement};
use light_lang_core::lexer::tokenize;
use light_lang_core::parser::{parse, parse_source, ParseError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("1 + 2 + 3", "((1 + 2) + 3);\n")]
#[case("1 - 2 - 3", "((1 - 2) - 3);\n")]
#[case("8 / 4 / 2", "((8 / 4) / 2);\n")]
#[case("1 + 2 * 3", "(1 + (2 * 3));\n")]
#[case("1 * 2 + 3", "((1 * 2) + 3);\n")]
#[case("1 < 2 == 2 > 1", "((1 < 2) == (2 > 1));\n")]
#[case("1 == 2 == false", "((1 == 2) == false);\n")]
#[case("a + b >= c * d", "((a + b) >= (c * d));\n")]
#[case("-a - -b", "((-a) - (-b));\n")]
fn precedence_and_associativity(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse_source(input).unwrap().to_string(), expected);
}

#[rstest]
#[case("let")]
#[case("let x")]
#[case("return")]
#[case("if")]
#[case("if true")]
#[case("if true {} else")]
#[case("func")]
#[case("func(")]
#[case("func()")]
#[case("f(")]
fn truncated_input_is_a_premature_end(#[case] input: &str) {
    let error = parse_source(input).unwrap_err();

    assert!(
        matches!(error, ParseError::PrematureEndOfInput { .. }),
        "{}: {:?}",
        input,
        error
    );
}

#[test]
fn top_level_shape() {
    let program = parse(tokenize("let x = 1; x + 2; if x { x } { 3 }")).unwrap();

    assert_eq!(program.statements.len(), 4);
    assert!(matches!(program.statements[0], Statement::Let(_)));
    assert!(matches!(
        program.statements[1],
        Statement::Expression(Expression::InfixOperation(InfixOperationKind::Plus, _, _))
    ));
    assert!(matches!(program.statements[2], Statement::Conditional(_)));
    assert!(matches!(program.statements[3], Statement::Block(_)));
}

#[test]
fn parsing_is_deterministic() {
    let source = "func fib(n) { if n < 2 { return n; } return fib(n - 1) + fib(n - 2); } fib(10)";

    assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
}
