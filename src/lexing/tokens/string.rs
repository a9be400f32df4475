//!
//! ## String literals
//!
//! Single or double quoted. Escapes `\n \r \t \b \f` are decoded,
//! any other escaped character stands for itself.
//!

use toker_macros::{ECMARef, Spanned};

use crate::{
    common::Span,
    lexing::{
        utils::{LexT, LiteralKind, ScanResult, SourceStream},
        ScannerConfig,
    },
};

use super::{Lexeme, Tag, TokenValue};

///
/// The character an escape sequence `\ch` stands for.
///
#[ECMARef(
    "CharacterEscapeSequence",
    "https://262.ecma-international.org/5.1/#sec-7.8.4"
)]
pub fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        other => other,
    }
}

#[ECMARef("StringLiteral", "https://262.ecma-international.org/5.1/#sec-7.8.4")]
#[derive(Debug, Spanned)]
pub struct StringLiteral {
    span: Span,
    quote: char,
    value: String,
}

impl StringLiteral {
    pub fn quote(&self) -> char {
        self.quote
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl LexT for StringLiteral {
    fn peek(input: &SourceStream, _: &ScannerConfig) -> bool {
        input.upcoming('\'') || input.upcoming('"')
    }

    fn lex(input: &mut SourceStream, _: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();
        let position = input.position();

        let Some(quote) = input.take() else {
            return Err(input.unterminated(LiteralKind::String, position));
        };

        let mut value = String::new();
        loop {
            match input.take() {
                Some(ch) if ch == quote => break,
                Some('\\') => match input.take() {
                    Some(escaped) => value.push(unescape(escaped)),
                    None => return Err(input.unterminated(LiteralKind::String, position)),
                },
                Some(ch) => value.push(ch),
                None => return Err(input.unterminated(LiteralKind::String, position)),
            }
        }

        Ok(Self {
            span: input.span_from(start),
            quote,
            value,
        })
    }
}

impl TokenValue for StringLiteral {
    fn into_value(self) -> (Tag, Lexeme) {
        (Tag::StringLiteral, Lexeme::Text(self.value))
    }
}
