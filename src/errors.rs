//! General error types for the parser
use std::fmt::{Display, Formatter};

/// Global result type used throughout the parser stages
pub type ParserResult<T> = Result<T, ParserError>;

/// Enumeration of the various different parser stages that can produce an error
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// The byte decoding stage of the parser
    Decoder,
    /// The lexer stage of the parser
    Lexer,
    /// The parsing/DOM construction stage of the parser
    Parser,
}

/// A global enumeration of error codes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Details {
    /// A malformed UTF-8 byte sequence in the input
    InvalidUtf8,
    /// A character which can't begin any token in the current lexer state
    UnexpectedCharacter(char),
    /// A character which may not appear unescaped inside a string
    InvalidCharacter(char),
    /// The number state machine rejected the input
    InvalidNumber,
    /// An unknown escape sequence
    InvalidEscape(char),
    /// A malformed \uXXXX escape sequence
    InvalidUnicodeEscape,
    /// The input ended inside a string
    UnterminatedString,
    /// A token the grammar has no production for at this point
    UnexpectedToken,
    /// The input ended before the grammar was satisfied
    UnexpectedEndOfInput,
    /// Input found after a complete value
    TrailingInput,
    /// The input file couldn't be read
    InvalidFile,
}

impl Display for Details {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Details::InvalidUtf8 => write!(f, "invalid utf-8 sequence"),
            Details::UnexpectedCharacter(c) => {
                write!(f, "unexpected character '{}'", c.escape_default())
            }
            Details::InvalidCharacter(c) => {
                write!(f, "invalid character '{}' in string", c.escape_default())
            }
            Details::InvalidNumber => write!(f, "invalid number"),
            Details::InvalidEscape(c) => {
                write!(f, "invalid escape sequence '\\{}'", c.escape_default())
            }
            Details::InvalidUnicodeEscape => write!(f, "invalid unicode escape sequence"),
            Details::UnterminatedString => write!(f, "unterminated string"),
            Details::UnexpectedToken => write!(f, "unexpected token"),
            Details::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            Details::TrailingInput => write!(f, "trailing input after value"),
            Details::InvalidFile => write!(f, "unable to read input file"),
        }
    }
}

/// The general error structure
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParserError {
    /// The originating stage for the error
    pub stage: Stage,
    /// The global error code for the error
    pub details: Details,
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} error: {}", self.stage, self.details)
    }
}

impl std::error::Error for ParserError {}

#[macro_export]
macro_rules! decoder_error {
    ($details: expr) => {
        Err($crate::errors::ParserError {
            stage: $crate::errors::Stage::Decoder,
            details: $details,
        })
    };
}

#[macro_export]
macro_rules! lexer_error {
    ($details: expr) => {
        Err($crate::errors::ParserError {
            stage: $crate::errors::Stage::Lexer,
            details: $details,
        })
    };
}

#[macro_export]
macro_rules! parser_error {
    ($details: expr) => {
        Err($crate::errors::ParserError {
            stage: $crate::errors::Stage::Parser,
            details: $details,
        })
    };
}
