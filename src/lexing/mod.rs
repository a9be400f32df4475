//!
//! The process of lexing involves converting [char]s
//! from source code into lexical tokens according to
//! some [lexical grammar](https://en.wikipedia.org/wiki/Lexical_grammar).
//!

pub mod config;
pub mod scanner;
pub mod tokens;
pub mod utils;

pub use self::{
    config::{CharClass, ConfigError, ScannerConfig},
    scanner::{Goal, Scanner},
    tokens::{Lexeme, Tag, Token},
    utils::{LiteralKind, ScanError, ScanResult},
};
