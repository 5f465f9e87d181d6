use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    Illegal(Rc<str>),
    Eof,
    Ident(Rc<str>),
    Int(Rc<str>),
    String(Rc<str>),

    // Operators
    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,

    Equal,
    NotEqual,

    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,

    Comma,
    SemiColon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

fn keywords(ident: &str) -> Option<TokenKind> {
    match ident {
        "func" => Some(TokenKind::Function),
        "let" => Some(TokenKind::Let),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

impl TokenKind {
    /// The text this token stands for. End of input is the `'\0'` sentinel.
    pub fn literal(&self) -> &str {
        use TokenKind::*;
        match self {
            Illegal(text) | Ident(text) | Int(text) | String(text) => text,
            Eof => "\0",
            Assign => "=",
            Plus => "+",
            Minus => "-",
            Asterisk => "*",
            Slash => "/",
            Equal => "==",
            NotEqual => "!=",
            GreaterThan => ">",
            LessThan => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
            Comma => ",",
            SemiColon => ";",
            LParen => "(",
            RParen => ")",
            LBrace => "{",
            RBrace => "}",
            Function => "func",
            Let => "let",
            True => "true",
            False => "false",
            If => "if",
            Else => "else",
            Return => "return",
        }
    }
}

impl Token {
    pub fn literal(&self) -> &str {
        self.kind.literal()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Illegal(text) => write!(f, "illegal input `{}`", text),
            TokenKind::Ident(name) => write!(f, "identifier `{}`", name),
            TokenKind::Int(digits) => write!(f, "integer `{}`", digits),
            TokenKind::String(value) => write!(f, "string \"{}\"", value),
            other => write!(f, "`{}`", other.literal()),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.start)
    }
}

/// Scans the whole source, ending with exactly one [`TokenKind::Eof`].
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).collect()
}

#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self {
            input,
            iter,
            finished: false,
        }
    }

    fn is_letter(ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn token(&mut self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            start,
            end: self.next_idx(),
        }
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| Self::is_letter(*ch)).is_some() {}

        let end = self.next_idx();
        let ident = &self.input[start..end];
        Token {
            kind: keywords(ident).unwrap_or_else(|| TokenKind::Ident(ident.into())),
            start,
            end,
        }
    }

    fn read_number(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| ch.is_ascii_digit()).is_some() {}

        let end = self.next_idx();
        Token {
            kind: TokenKind::Int(self.input[start..end].into()),
            start,
            end,
        }
    }

    fn read_string(&mut self, start: usize) -> Token {
        loop {
            match self.iter.next() {
                Some((_, '"')) => break,
                None => {
                    let text = &self.input[start..];
                    return self.token(TokenKind::Illegal(text.into()), start);
                }
                _ => {}
            }
        }

        let end = self.next_idx();
        // contents without the surrounding quotes
        let contents = &self.input[start + 1..end - 1];
        Token {
            kind: TokenKind::String(contents.into()),
            start,
            end,
        }
    }

    /// Consumes a trailing `=` to form a two-character operator.
    fn with_equals(&mut self, start: usize, single: TokenKind, double: TokenKind) -> Token {
        if self.iter.next_if(|(_, ch)| *ch == '=').is_some() {
            self.token(double, start)
        } else {
            self.token(single, start)
        }
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let mut iter = self.iter.by_ref().skip_while(|(_, ch)| ch.is_whitespace());

        let Some((idx, ch)) = iter.next() else {
            self.finished = true;
            let end = self.input.len();
            return Some(Token {
                kind: TokenKind::Eof,
                start: end,
                end,
            });
        };

        let tok = match ch {
            '=' => self.with_equals(idx, TokenKind::Assign, TokenKind::Equal),
            '!' => self.with_equals(idx, TokenKind::Illegal("!".into()), TokenKind::NotEqual),
            '>' => self.with_equals(idx, TokenKind::GreaterThan, TokenKind::GreaterEqual),
            '<' => self.with_equals(idx, TokenKind::LessThan, TokenKind::LessEqual),
            '+' => self.token(TokenKind::Plus, idx),
            '-' => self.token(TokenKind::Minus, idx),
            '*' => self.token(TokenKind::Asterisk, idx),
            '/' => self.token(TokenKind::Slash, idx),
            ',' => self.token(TokenKind::Comma, idx),
            ';' => self.token(TokenKind::SemiColon, idx),
            '(' => self.token(TokenKind::LParen, idx),
            ')' => self.token(TokenKind::RParen, idx),
            '{' => self.token(TokenKind::LBrace, idx),
            '}' => self.token(TokenKind::RBrace, idx),
            '"' => self.read_string(idx),
            c if Tokenizer::is_letter(c) => self.read_identifier(idx),
            c if c.is_ascii_digit() => self.read_number(idx),
            c => self.token(TokenKind::Illegal(c.to_string().into()), idx),
        };
        Some(tok)
    }
}
