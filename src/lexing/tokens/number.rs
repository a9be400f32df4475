//!
//! ## Decimal literals
//!
//! A run of ASCII digits, nothing more: no fraction, exponent,
//! hex/octal prefix or separators. `12.5` scans as `12`, `.`, `5`.
//!

use toker_macros::Spanned;

use crate::{
    common::Span,
    lexing::{
        utils::{LexT, ScanResult, SourceStream},
        ScannerConfig,
    },
};

use super::{Lexeme, Tag, TokenValue};

#[inline]
pub fn is_decimal_digit(ch: &char) -> bool {
    ch.is_ascii_digit()
}

#[derive(Debug, Spanned)]
pub struct DecimalLiteral {
    span: Span,
    value: f64,
}

impl DecimalLiteral {
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl LexT for DecimalLiteral {
    fn peek(input: &SourceStream, _: &ScannerConfig) -> bool {
        input.upcoming(is_decimal_digit)
    }

    fn lex(input: &mut SourceStream, _: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();

        let value = input
            .take_while(is_decimal_digit)
            .bytes()
            .fold(0.0, |value, digit| 10.0 * value + f64::from(digit - b'0'));

        Ok(Self {
            span: input.span_from(start),
            value,
        })
    }
}

impl TokenValue for DecimalLiteral {
    fn into_value(self) -> (Tag, Lexeme) {
        (Tag::DecimalLiteral, Lexeme::Number(self.value))
    }
}
