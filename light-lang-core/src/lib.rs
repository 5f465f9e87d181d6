//! Front end of the Light scripting language: tokens, lexer, AST and parser.

pub mod ast;
pub mod lexer;
pub mod parser;
