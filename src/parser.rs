//! The predictive parser
//!
//! A standard LL(1) parse loop: a symbol stack seeded with the start symbol, one token of
//! lookahead, and the [parse table](crate::grammar::ptable) selecting the production for
//! each (nonterminal, terminal) pair. Every terminal the loop consumes is forwarded to a
//! [ValueBuilder], so the DOM is materialized during the parse rather than from a
//! separate walk.
use std::fs;
use std::path::Path;

use crate::builder::ValueBuilder;
use crate::dom::JsonValue;
use crate::errors::{Details, ParserResult};
use crate::grammar::{ptable, NonTerminal, Symbol};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::parser_error;

/// Main JSON parser struct
#[derive(Default)]
pub struct Parser;

impl Parser {
    /// Read and parse an entire file
    pub fn parse_file<PathLike: AsRef<Path>>(&self, path: PathLike) -> ParserResult<JsonValue> {
        match fs::read(&path) {
            Ok(bytes) => self.parse_bytes(&bytes),
            Err(_) => parser_error!(Details::InvalidFile),
        }
    }

    /// Parse a string slice
    pub fn parse_str(&self, str: &str) -> ParserResult<JsonValue> {
        self.parse_bytes(str.as_bytes())
    }

    /// Parse a UTF-8 byte buffer
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParserResult<JsonValue> {
        let mut lexer = Lexer::new(bytes);
        let mut builder = ValueBuilder::new();
        let mut stack = vec![Symbol::NonTerminal(NonTerminal::Start)];
        let mut lookahead = lexer.consume()?;

        while let Some(&top) = stack.last() {
            match top {
                Symbol::Terminal(kind) if kind == lookahead.kind() => {
                    stack.pop();
                    let consumed = std::mem::replace(&mut lookahead, lexer.consume()?);
                    builder.accept(consumed)?;
                }
                Symbol::Terminal(_) => return parser_error!(mismatch_details(&lookahead)),
                Symbol::NonTerminal(nonterminal) => {
                    match ptable().lookup(nonterminal, lookahead.kind()) {
                        None => return parser_error!(mismatch_details(&lookahead)),
                        Some(production) => {
                            stack.pop();
                            for &symbol in production.rhs.iter().rev() {
                                if symbol != Symbol::Epsilon {
                                    stack.push(symbol);
                                }
                            }
                        }
                    }
                }
                Symbol::Epsilon => unreachable!("epsilon pushed onto the parse stack"),
            }
        }

        match lookahead {
            Token::EndOfInput => Ok(builder.finish()),
            _ => parser_error!(Details::TrailingInput),
        }
    }
}

/// A terminal mismatch against exhausted input is reported as such rather than as a
/// stray token
fn mismatch_details(lookahead: &Token) -> Details {
    if lookahead.kind() == TokenKind::EndOfInput {
        Details::UnexpectedEndOfInput
    } else {
        Details::UnexpectedToken
    }
}
