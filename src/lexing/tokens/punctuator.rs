//!
//! ## Single characters
//!
//! Whatever no other rule claims is one token of one character:
//! the punctuators `{ } ( ) [ ] ; , . : ? ~`, and anything unrecognised.
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

#[derive(Debug, Spanned)]
pub struct Single {
    span: Span,
    raw: char,
}

impl Single {
    pub fn raw(&self) -> char {
        self.raw
    }
}

impl LexT for Single {
    fn peek(input: &SourceStream, _: &ScannerConfig) -> bool {
        !input.is_finished()
    }

    fn lex(input: &mut SourceStream, _: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();
        // Dispatch only reaches here with input left.
        let raw = input.take().unwrap_or_default();

        Ok(Self {
            span: input.span_from(start),
            raw,
        })
    }
}

impl TokenValue for Single {
    fn into_value(self) -> (Tag, Lexeme) {
        (Tag::Char(self.raw), Lexeme::Text(self.raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::Spanned,
        lexing::{
            tokens::{Lexeme, Tag, TokenValue},
            utils::{LexT, SourceStream},
            ScannerConfig,
        },
    };

    use super::Single;

    #[test]
    fn one_character() {
        let config = &ScannerConfig::default();
        let input = &mut SourceStream::new("€;");

        let single = Single::lex(input, config).unwrap();
        assert_eq!(single.raw(), '€');
        assert_eq!(single.span().len(), 3);

        let single = Single::lex(input, config).unwrap();
        assert_eq!(single.into_value(), (Tag::Char(';'), Lexeme::from(";")));
        assert!(!Single::peek(input, config));
    }
}
