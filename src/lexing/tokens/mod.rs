//!
//! Lexical tokens.
//!

pub mod comment;
pub mod identifier;
pub mod line_terminator;
pub mod number;
pub mod operator;
pub mod punctuator;
pub mod regex;
pub mod string;
pub mod whitespace;

use std::{
    fmt::{Display, Formatter},
    sync::Arc,
};

use toker_macros::Spanned;

use crate::common::{SourceLocation, Span, Spanned};

///
/// The kind of a [Token].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Comment,
    DecimalLiteral,
    Identifier,
    Keyword,
    BooleanLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    Operator,

    ///
    /// Any single character no other rule claimed:
    /// punctuators, and anything unrecognised.
    ///
    Char(char),

    Eof,
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Comment => f.write_str("comment"),
            Tag::DecimalLiteral => f.write_str("decimalLiteral"),
            Tag::Identifier => f.write_str("identifier"),
            Tag::Keyword => f.write_str("keyword"),
            Tag::BooleanLiteral => f.write_str("booleanLiteral"),
            Tag::StringLiteral => f.write_str("stringLiteral"),
            Tag::RegularExpressionLiteral => f.write_str("regularExpressionLiteral"),
            Tag::Operator => f.write_str("operator"),
            Tag::Char(ch) => write!(f, "{ch}"),
            Tag::Eof => f.write_str("eof"),
        }
    }
}

///
/// The decoded value of a [Token].
///
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    Text(String),
    Number(f64),
}

impl Lexeme {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Lexeme::Text(text) => Some(text),
            Lexeme::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Lexeme::Number(n) => Some(*n),
            Lexeme::Text(_) => None,
        }
    }
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Lexeme::Text(text) => f.write_str(text),
            Lexeme::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Lexeme {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Lexeme {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Lexeme {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

///
/// A classified, located unit of lexical output.
///
#[derive(Debug, Clone, PartialEq, Spanned)]
pub struct Token {
    pub tag: Tag,
    pub lexeme: Lexeme,
    pub loc: SourceLocation,

    ///
    /// The caller-supplied label of the buffer this came from.
    ///
    pub source: Option<Arc<str>>,

    ///
    /// Bytes consumed for this token.
    ///
    pub span: Span,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.tag == Tag::Eof
    }
}

///
/// A lexed token kind, ready to become a [Token].
///
pub trait TokenValue: Spanned {
    fn into_value(self) -> (Tag, Lexeme);
}
