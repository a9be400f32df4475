use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::common::Position;

use super::SourceStream;

///
/// Lexical constructs that must be closed
/// before the end of input.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    RegularExpression,
    BlockComment,
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LiteralKind::String => "string literal",
            LiteralKind::RegularExpression => "regular expression literal",
            LiteralKind::BlockComment => "block comment",
        })
    }
}

///
/// Errors that can occur during scanning.
///
/// Unrecognised characters are never an error:
/// they come out as single-character tokens.
///
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash)]
pub enum ScanError {
    ///
    /// The end of input was reached inside a literal or comment.
    ///
    #[error("Unterminated {kind}\n\tat {start}")]
    UnterminatedLiteral { kind: LiteralKind, start: Position },
}

///
/// Convenience type for scanner results.
///
pub type ScanResult<T> = Result<T, ScanError>;

impl<'a> SourceStream<'a> {
    ///
    /// Make an unterminated-literal error for a construct
    /// which began at `start`.
    ///
    pub fn unterminated(&self, kind: LiteralKind, start: Position) -> ScanError {
        ScanError::UnterminatedLiteral { kind, start }
    }
}
