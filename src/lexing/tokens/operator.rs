//!
//! ## Operators
//!
//! Maximal munch over characters that are operators on their own
//! and not punctuators. The resulting run is not checked against
//! the operator table as a whole.
//!

use toker_macros::{ECMARef, Spanned};

use crate::{
    common::Span,
    lexing::{
        utils::{LexT, ScanResult, SourceStream},
        ScannerConfig,
    },
};

use super::{Lexeme, Tag, TokenValue};

///
/// May `ch` take part in a multi-character operator?
///
pub fn is_operator_char(ch: char, config: &ScannerConfig) -> bool {
    config.is_operator(ch) && !config.is_punctuator(ch)
}

#[ECMARef("Punctuator", "https://262.ecma-international.org/5.1/#sec-7.7")]
#[derive(Debug, Spanned)]
pub struct Operator {
    span: Span,
    raw: String,
}

impl Operator {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl LexT for Operator {
    fn peek(input: &SourceStream, config: &ScannerConfig) -> bool {
        input.upcoming(|ch: &char| is_operator_char(*ch, config))
    }

    fn lex(input: &mut SourceStream, config: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();
        let raw = input
            .take_while(|ch| is_operator_char(*ch, config))
            .to_string();

        Ok(Self {
            span: input.span_from(start),
            raw,
        })
    }
}

impl TokenValue for Operator {
    fn into_value(self) -> (Tag, Lexeme) {
        (Tag::Operator, Lexeme::Text(self.raw))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::{
        utils::{LexT, SourceStream},
        ScannerConfig,
    };

    use super::Operator;

    fn lex(src: &str, config: &ScannerConfig) -> (String, String) {
        let input = &mut SourceStream::new(src);
        assert!(Operator::peek(input, config));
        let op = Operator::lex(input, config).unwrap();
        (op.raw().to_string(), input.rest().to_string())
    }

    #[test]
    fn maximal_munch() {
        let config = &ScannerConfig::default();

        assert_eq!(lex(">>>= 1", config), (">>>=".into(), " 1".into()));
        assert_eq!(lex("!==x", config), ("!==".into(), "x".into()));
        assert_eq!(lex("+(", config), ("+".into(), "(".into()));
    }

    #[test]
    fn accepts_any_run() {
        // `=!` is not an operator, but both characters are.
        assert_eq!(
            lex("=!b", &ScannerConfig::default()),
            ("=!".into(), "b".into())
        );
    }

    #[test]
    fn punctuators_are_excluded() {
        let config = &ScannerConfig::default();

        for src in [".", ";", "?", "~", ":"] {
            assert!(!Operator::peek(&SourceStream::new(src), config), "{src}");
        }

        // `-` followed by a punctuator stops the run.
        assert_eq!(lex("-~x", config), ("-".into(), "~x".into()));
    }
}
