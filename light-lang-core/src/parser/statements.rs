use crate::ast::{BlockStatement, Conditional, Expression, Identifier, Statement};
use crate::lexer::TokenKind;
use crate::parser::error::Expected;
use crate::parser::expressions::{parse_expression, parse_function_literal, Precedence};
use crate::parser::{ParseError, Parser};

pub fn parse_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let token = parser.iter.peek();
    match token.map(|t| &t.kind) {
        Some(TokenKind::Let) => Ok(Statement::Let(parse_let_statement(parser)?)),
        Some(TokenKind::Return) => Ok(Statement::Return(parse_return_statement(parser)?)),
        Some(TokenKind::If) => Ok(Statement::Conditional(parse_conditional(parser)?)),
        Some(TokenKind::LBrace) => Ok(Statement::Block(parse_block_statement(parser)?)),
        Some(TokenKind::Function) => {
            parser.expect_token(TokenKind::Function)?;
            Ok(Statement::Expression(Expression::FunctionLiteral(
                parse_function_literal(parser)?,
            )))
        }
        _ => Ok(Statement::Expression(parse_expression(
            parser,
            Precedence::Lowest,
        )?)),
    }
}

fn parse_let_statement(parser: &mut Parser) -> Result<crate::ast::LetStatement, ParseError> {
    parser.expect_token(TokenKind::Let)?;
    let name = parser.parse_ident()?;
    parser.expect_token(TokenKind::Assign)?;
    let value = parse_expression(parser, Precedence::Lowest)?;

    Ok(crate::ast::LetStatement {
        identifier: Identifier { name },
        value,
    })
}

fn parse_return_statement(parser: &mut Parser) -> Result<crate::ast::ReturnStatement, ParseError> {
    parser.expect_token(TokenKind::Return)?;
    let value = parse_expression(parser, Precedence::Lowest)?;

    Ok(crate::ast::ReturnStatement { value })
}

fn parse_conditional(parser: &mut Parser) -> Result<Conditional, ParseError> {
    parser.expect_token(TokenKind::If)?;
    let condition = parse_expression(parser, Precedence::Lowest)?;
    let consequence = parse_block_statement(parser)?;

    let alternative = if parser
        .iter
        .next_if(|token| token.kind == TokenKind::Else)
        .is_some()
    {
        Some(parse_block_statement(parser)?)
    } else {
        None
    };

    Ok(Conditional {
        condition,
        consequence,
        alternative,
    })
}

/// Parses `{ statement* }`. Semicolons between statements are optional.
pub fn parse_block_statement(parser: &mut Parser) -> Result<BlockStatement, ParseError> {
    parser.expect_token(TokenKind::LBrace)?;

    let mut statements = Vec::new();
    loop {
        parser.skip_semicolons();
        match parser.iter.peek().map(|token| &token.kind) {
            Some(TokenKind::RBrace) => {
                parser.next_token();
                return Ok(BlockStatement { statements });
            }
            None | Some(TokenKind::Eof) => {
                return Err(ParseError::PrematureEndOfInput {
                    expected: Expected::Token(TokenKind::RBrace),
                })
            }
            _ => statements.push(parse_statement(parser)?),
        }
    }
}
