use crate::{
    common::{Loc, Position, Span},
    lexing::tokens::line_terminator::is_line_terminator,
};

///
/// Things that [SourceStream] can
/// check are coming up.
///
pub trait Lookahead {
    fn upcoming(self, input: &SourceStream) -> bool;
}

impl<'a> Lookahead for &'a str {
    fn upcoming(self, input: &SourceStream) -> bool {
        input.rest().starts_with(self)
    }
}

impl Lookahead for char {
    fn upcoming(self, input: &SourceStream) -> bool {
        input.peek() == Some(self)
    }
}

impl<F: Fn(&char) -> bool> Lookahead for F {
    fn upcoming(self, input: &SourceStream) -> bool {
        input.peek().as_ref().map(self).unwrap_or(false)
    }
}

///
/// The scanner's cursor: an immutable text plus
/// a forward-only byte index and line-column bookkeeping.
///
#[derive(Debug, Clone)]
pub struct SourceStream<'a> {
    text: &'a str,
    index: usize,
    line: usize,
    column: usize,
}

impl<'a> SourceStream<'a> {
    ///
    /// Create a new stream at the start of `text`.
    ///
    pub fn new(text: &'a str) -> Self {
        let Position { line, column } = Position::default();
        Self {
            text,
            index: 0,
            line,
            column,
        }
    }

    ///
    /// Returns the whole text being streamed.
    ///
    pub fn text(&self) -> &'a str {
        self.text
    }

    ///
    /// Returns the text not yet consumed.
    ///
    pub fn rest(&self) -> &'a str {
        &self.text[self.index..]
    }

    pub fn loc(&self) -> Loc {
        Loc(self.index)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.text.len()
    }

    ///
    /// Peeks at the next upcoming character.
    ///
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    ///
    /// Peeks `n` characters past the next one (`peek_nth(0) == peek()`).
    ///
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    ///
    /// Checks if a lookahead pattern is next in the stream.
    ///
    pub fn upcoming<L: Lookahead>(&self, lookahead: L) -> bool {
        lookahead.upcoming(self)
    }

    ///
    /// Take the next character in this [SourceStream].
    ///
    /// Crossing a line terminator bumps the line and resets the column;
    /// a `<CR><LF>` pair counts once, on the `<LF>`.
    ///
    pub fn take(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += ch.len_utf8();

        if is_line_terminator(&ch) && !(ch == '\r' && self.peek() == Some('\n')) {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    ///
    /// Take characters in this [SourceStream] whilst they
    /// satisfy some predicate.
    ///
    pub fn take_while(&mut self, pred: impl Fn(&char) -> bool) -> &'a str {
        let start = self.index;
        while self.upcoming(&pred) {
            self.take();
        }

        &self.text[start..self.index]
    }

    ///
    /// Take exactly `n` characters, stopping early at the end of input.
    ///
    pub fn take_n(&mut self, n: usize) -> &'a str {
        let start = self.index;
        for _ in 0..n {
            if self.take().is_none() {
                break;
            }
        }

        &self.text[start..self.index]
    }

    ///
    /// The span between `start` and the current location.
    ///
    pub fn span_from(&self, start: Loc) -> Span {
        Span {
            start,
            end: self.loc(),
        }
    }
}
