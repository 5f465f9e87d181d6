use std::fmt::Display;

use thiserror::Error;

use crate::lexer::{Token, TokenKind};

#[derive(Debug, PartialEq, Clone, Error)]
pub enum ParseError {
    #[error("expected {expected}, found end of input")]
    PrematureEndOfInput { expected: Expected },
    #[error("expected {expected}, found {got}")]
    UnexpectedToken { expected: Expected, got: Token },
    #[error("no prefix parse function for {0}")]
    NoPrefixFunction(Token),
    #[error("no infix parse function for {0}")]
    NoInfixFunction(Token),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expected {
    Token(TokenKind),
    Identifier,
    Expression,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Identifier => write!(f, "an identifier"),
            Expected::Expression => write!(f, "an expression"),
        }
    }
}

impl ParseError {
    pub fn premature_end_expected_expression() -> Self {
        ParseError::PrematureEndOfInput {
            expected: Expected::Expression,
        }
    }

    pub fn unexpected_token(expected: TokenKind, got: Token) -> ParseError {
        ParseError::unexpected_other(Expected::Token(expected), got)
    }

    pub fn unexpected_other(expected: Expected, got: Token) -> ParseError {
        match got.kind {
            TokenKind::Eof => ParseError::PrematureEndOfInput { expected },
            _ => ParseError::UnexpectedToken { expected, got },
        }
    }
}
