pub mod environment;
pub mod evaluator;
pub mod object;

use std::rc::Rc;

use light_lang_core::parser::{parse_source, ParseError};
use object::{EvaluationError, Object};
use thiserror::Error;

/// Anything that can stop a piece of source text from producing a value.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}

/// Parses and evaluates `source` in a fresh environment.
pub fn run_source(source: &str) -> Result<Rc<Object>, Error> {
    let program = parse_source(source)?;
    Ok(evaluator::evaluate_program(&program)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{run_source, Error};
    use crate::object::{EvaluationError, Object};
    use light_lang_core::parser::ParseError;

    #[test]
    fn test_run_source() {
        let tests = vec![
            ("let a = 2; a * 3", Ok(Object::integer(6))),
            (
                "let a = ",
                Err(Error::Parse(ParseError::premature_end_expected_expression())),
            ),
            (
                "1 / 0",
                Err(Error::Evaluation(EvaluationError::DivisionByZero)),
            ),
        ];

        for (input, expected) in tests {
            assert_eq!(run_source(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_error_messages() {
        let tests = vec![
            ("x", "Evaluation error: Unknown identifier: x"),
            ("let", "Parse error: expected an identifier, found end of input"),
            (
                "let f = func(a) { a }; f()",
                "Evaluation error: Wrong number of arguments for function f. Expected 1, got 0",
            ),
        ];

        for (input, expected) in tests {
            assert_eq!(run_source(input).unwrap_err().to_string(), expected);
        }
    }
}
