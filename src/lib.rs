//!
//! ## toker
//!
//! A lexical analyzer for ECMAScript-like source text.
//!
//! ```
//! use toker::{Scanner, ScannerConfig, Tag};
//!
//! let config = ScannerConfig::default().with_source("example.js");
//! let tokens = Scanner::new("print('hi');", config).all_tokens().unwrap();
//!
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[2].tag, Tag::StringLiteral);
//! ```
//!

pub mod common;
pub mod lexing;

pub use common::{Position, SourceFile, SourceLocation, Span, Spanned};
pub use lexing::{
    CharClass, ConfigError, Goal, Lexeme, LiteralKind, ScanError, ScanResult, Scanner,
    ScannerConfig, Tag, Token,
};
