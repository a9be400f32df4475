//!
//! Things that help trace errors and tokens: [Span], [Loc] and [Position].
//!

use std::{
    fmt::{Display, Formatter},
    ops::Range,
};

///
/// Represents the (byte) index of a character in source code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Loc(pub(crate) usize);

///
/// Represents the location of a token in source code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    ///
    /// Start index: inclusive lower bound.
    ///
    pub(crate) start: Loc,

    ///
    /// End index: exclusive upper bound.
    ///
    pub(crate) end: Loc,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: Loc(start),
            end: Loc(end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    ///
    /// Return the start and end bounds as a Rust [Range]
    ///
    pub fn as_range(&self) -> Range<usize> {
        self.start.0..self.end.0
    }
}

///
/// Returns the span attached to this
/// object.
///
pub trait Spanned {
    ///
    /// Returns the span attached to this
    /// object.
    ///
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

///
/// Line and column information for a cursor position.
///
/// Lines are 1-based, columns are 0-based. The derived ordering compares
/// `line` first, then `column`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

///
/// Where a token starts and ends, in line-column terms.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
