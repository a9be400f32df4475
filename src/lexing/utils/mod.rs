//!
//! Utilities for lexing.
//!

pub mod result;
pub mod stream;

pub use self::{
    result::{LiteralKind, ScanError, ScanResult},
    stream::{Lookahead, SourceStream},
};

use super::ScannerConfig;

///
/// Scanning one kind of lexical token.
///
pub trait LexT: Sized {
    ///
    /// Checks to see if this token is possibly upcoming,
    /// without advancing the stream.
    ///
    fn peek(input: &SourceStream, config: &ScannerConfig) -> bool;

    ///
    /// Given that the token is present (see [LexT::peek]),
    /// start lexing.
    ///
    /// This function has guaranteed side-effects on the input [SourceStream] (advancing it).
    ///
    fn lex(input: &mut SourceStream, config: &ScannerConfig) -> ScanResult<Self>;
}
