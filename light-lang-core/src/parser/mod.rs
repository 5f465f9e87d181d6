pub mod error;
pub mod expressions;
pub mod statements;

use std::rc::Rc;

use crate::ast::Program;
use crate::lexer::{Token, TokenKind, Tokenizer};
pub use error::{Expected, ParseError};
use expressions::{precedence_of, Precedence};
use statements::parse_statement;

/// Parses a token sequence into a [`Program`], stopping at the first error.
pub fn parse<'a, I>(tokens: I) -> Result<Program, ParseError>
where
    I: IntoIterator<Item = Token>,
    I::IntoIter: 'a,
{
    Parser::new(tokens).parse_program()
}

pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    Parser::new(Tokenizer::new(source)).parse_program()
}

pub struct Parser<'a> {
    pub iter: std::iter::Peekable<Box<dyn Iterator<Item = Token> + 'a>>,
    end: usize,
}

impl<'a> Parser<'a> {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
        I::IntoIter: 'a,
    {
        let iter: Box<dyn Iterator<Item = Token> + 'a> = Box::new(tokens.into_iter());
        Self {
            iter: iter.peekable(),
            end: 0,
        }
    }

    /// Returns the next token. A drained stream keeps yielding end of input,
    /// so token sequences without a trailing [`TokenKind::Eof`] parse the same.
    pub(crate) fn next_token(&mut self) -> Token {
        match self.iter.next() {
            Some(token) => {
                self.end = token.end;
                token
            }
            None => Token {
                kind: TokenKind::Eof,
                start: self.end,
                end: self.end,
            },
        }
    }

    pub(crate) fn peek_is(&mut self, kind: &TokenKind) -> bool {
        match self.iter.peek() {
            Some(token) => token.kind == *kind,
            None => *kind == TokenKind::Eof,
        }
    }

    pub(crate) fn peek_precedence(&mut self) -> Precedence {
        self.iter
            .peek()
            .map(|token| precedence_of(&token.kind))
            .unwrap_or(Precedence::Lowest)
    }

    pub(crate) fn skip_semicolons(&mut self) {
        while self
            .iter
            .next_if(|token| token.kind == TokenKind::SemiColon)
            .is_some()
        {}
    }

    pub(crate) fn parse_ident(&mut self) -> Result<Rc<str>, ParseError> {
        let token = self.next_token();
        match token.kind {
            TokenKind::Ident(name) => Ok(name),
            _ => Err(ParseError::unexpected_other(Expected::Identifier, token)),
        }
    }

    pub(crate) fn expect_token(&mut self, token_kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.next_token();
        if token.kind == token_kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected_token(token_kind, token))
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        loop {
            self.skip_semicolons();
            if self.peek_is(&TokenKind::Eof) {
                break;
            }
            statements.push(parse_statement(self)?);
        }

        log::debug!("parsed program with {} statements", statements.len());
        Ok(Program { statements })
    }
}
