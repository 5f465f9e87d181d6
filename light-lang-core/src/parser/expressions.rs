use super::error::ParseError;
use super::statements::parse_block_statement;
use crate::ast::{Expression, FunctionLiteral, Identifier};
use crate::lexer::{Token, TokenKind};
use crate::parser::Parser;

/// Binding powers. Tokens that cannot continue an expression bind at
/// [`Precedence::Lowest`], which ends the expression.
#[derive(PartialOrd, PartialEq, Debug, Clone, Copy)]
pub enum Precedence {
    Lowest = 0,
    Equals = 20,
    LessGreater = 40,
    Sum = 50,
    Product = 60,
}

impl Precedence {
    pub fn binding_power(self) -> u8 {
        self as u8
    }
}

pub fn precedence_of(token: &TokenKind) -> Precedence {
    match token {
        TokenKind::Equal | TokenKind::NotEqual => Precedence::Equals,
        TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::LessEqual
        | TokenKind::GreaterEqual => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        _ => Precedence::Lowest,
    }
}

pub fn parse_expression(
    parser: &mut Parser,
    precedence: Precedence,
) -> Result<Expression, ParseError> {
    let token = parser.next_token();
    let mut left_expression = prefix_parsing(token, parser)?;

    // the right operand is parsed at the operator's own precedence, so
    // operators of equal precedence associate to the left
    while precedence < parser.peek_precedence() {
        let next_token = parser.next_token();
        let Some(infix_parse_function) = infix_parsing_function(next_token.kind.clone()) else {
            return Err(ParseError::NoInfixFunction(next_token));
        };
        left_expression = infix_parse_function(left_expression, parser)?;
    }

    Ok(left_expression)
}

fn prefix_operation(
    kind: crate::ast::PrefixOperationKind,
) -> impl FnOnce(&mut Parser) -> Result<Expression, ParseError> {
    move |parser| {
        let operand = parser.next_token();
        Ok(Expression::PrefixOperation(
            kind,
            Box::new(prefix_parsing(operand, parser)?),
        ))
    }
}

fn parse_sequence<T>(
    parser: &mut Parser,
    parse_element: impl Fn(&mut Parser) -> Result<T, ParseError>,
    separator: TokenKind,
    terminator: TokenKind,
) -> Result<Vec<T>, ParseError> {
    let mut elements = Vec::new();

    if parser
        .iter
        .next_if(|token| token.kind == terminator)
        .is_some()
    {
        return Ok(elements);
    }

    loop {
        elements.push(parse_element(parser)?);

        let next = parser.next_token();
        if next.kind == separator {
            continue;
        }
        if next.kind == terminator {
            return Ok(elements);
        }
        return Err(ParseError::unexpected_token(terminator, next));
    }
}

fn parse_call_expression(function: Identifier, parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.expect_token(TokenKind::LParen)?;
    let arguments = parse_sequence(
        parser,
        |parser| parse_expression(parser, Precedence::Lowest),
        TokenKind::Comma,
        TokenKind::RParen,
    )?;

    Ok(Expression::CallExpression {
        function,
        arguments,
    })
}

/// Parses what follows the `func` keyword: an optional name, the parameter
/// list and the body.
pub fn parse_function_literal(parser: &mut Parser) -> Result<FunctionLiteral, ParseError> {
    let name = match parser
        .iter
        .next_if(|token| matches!(token.kind, TokenKind::Ident(_)))
    {
        Some(Token {
            kind: TokenKind::Ident(name),
            ..
        }) => Some(Identifier { name }),
        _ => None,
    };

    parser.expect_token(TokenKind::LParen)?;
    let parameters = parse_sequence(
        parser,
        |parser| parse_expression(parser, Precedence::Lowest),
        TokenKind::Comma,
        TokenKind::RParen,
    )?;
    let body = parse_block_statement(parser)?;

    Ok(FunctionLiteral {
        name,
        parameters,
        body,
    })
}

pub fn prefix_parsing(token: Token, parser: &mut Parser) -> Result<Expression, ParseError> {
    match token.kind {
        TokenKind::Ident(name) => {
            let identifier = Identifier { name };
            if parser.peek_is(&TokenKind::LParen) {
                parse_call_expression(identifier, parser)
            } else {
                Ok(Expression::Identifier(identifier))
            }
        }
        TokenKind::Int(digits) => Ok(Expression::IntegerLiteral(digits)),
        TokenKind::String(value) => Ok(Expression::StringLiteral(value)),
        TokenKind::True | TokenKind::False => {
            Ok(Expression::BooleanLiteral(token.kind.literal().into()))
        }
        TokenKind::Function => Ok(Expression::FunctionLiteral(parse_function_literal(
            parser,
        )?)),
        TokenKind::Minus => prefix_operation(crate::ast::PrefixOperationKind::Minus)(parser),
        TokenKind::Eof => Err(ParseError::premature_end_expected_expression()),
        _ => Err(ParseError::NoPrefixFunction(token)),
    }
}

type InfixFunction = Box<dyn FnOnce(Expression, &mut Parser) -> Result<Expression, ParseError>>;

fn infix_operation(token: TokenKind, kind: crate::ast::InfixOperationKind) -> InfixFunction {
    Box::new(
        move |left: Expression, parser: &mut Parser| -> Result<Expression, ParseError> {
            let new_precedence = precedence_of(&token);

            Ok(Expression::InfixOperation(
                kind,
                Box::new(left),
                Box::new(parse_expression(parser, new_precedence)?),
            ))
        },
    )
}

pub fn infix_parsing_function(token: TokenKind) -> Option<InfixFunction> {
    use crate::ast::InfixOperationKind as InfixKind;

    let kind = match token {
        TokenKind::Plus => InfixKind::Plus,
        TokenKind::Minus => InfixKind::Minus,
        TokenKind::Asterisk => InfixKind::Multiply,
        TokenKind::Slash => InfixKind::Divide,
        TokenKind::Equal => InfixKind::Equal,
        TokenKind::NotEqual => InfixKind::NotEqual,
        TokenKind::LessThan => InfixKind::LessThan,
        TokenKind::GreaterThan => InfixKind::GreaterThan,
        TokenKind::LessEqual => InfixKind::LessEqual,
        TokenKind::GreaterEqual => InfixKind::GreaterEqual,
        _ => return None,
    };
    Some(infix_operation(token, kind))
}
