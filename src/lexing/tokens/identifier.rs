//!
//! ## Identifiers, keywords and boolean literals
//!
//! All three share the identifier shape; the assembled word decides which.
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

#[ECMARef("IdentifierName", "https://262.ecma-international.org/5.1/#sec-7.6")]
#[derive(Debug, Spanned)]
pub struct IdentifierName {
    span: Span,
    raw: String,
    tag: Tag,
}

impl IdentifierName {
    ///
    /// `true`/`false` first, then the configured keywords,
    /// otherwise a plain identifier.
    ///
    pub fn classify(word: &str, config: &ScannerConfig) -> Tag {
        match word {
            "true" | "false" => Tag::BooleanLiteral,
            w if config.is_keyword(w) => Tag::Keyword,
            _ => Tag::Identifier,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl LexT for IdentifierName {
    fn peek(input: &SourceStream, config: &ScannerConfig) -> bool {
        input.upcoming(|ch: &char| config.is_identifier_start(*ch))
    }

    fn lex(input: &mut SourceStream, config: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();

        let mut raw = String::new();
        raw.extend(input.take());
        raw.push_str(input.take_while(|ch| config.is_identifier_part(*ch)));

        let tag = Self::classify(&raw, config);

        Ok(Self {
            span: input.span_from(start),
            raw,
            tag,
        })
    }
}

impl TokenValue for IdentifierName {
    fn into_value(self) -> (Tag, Lexeme) {
        (self.tag, Lexeme::Text(self.raw))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::Spanned,
        lexing::{
            tokens::Tag,
            utils::{LexT, SourceStream},
            CharClass, ScannerConfig,
        },
    };

    use super::IdentifierName;

    fn lex(src: &str, config: &ScannerConfig) -> IdentifierName {
        let input = &mut SourceStream::new(src);
        assert!(IdentifierName::peek(input, config));
        IdentifierName::lex(input, config).unwrap()
    }

    #[test]
    fn classification() {
        let config = &ScannerConfig::default();

        for (word, tag) in [
            ("true", Tag::BooleanLiteral),
            ("false", Tag::BooleanLiteral),
            ("var", Tag::Keyword),
            ("instanceof", Tag::Keyword),
            ("variable", Tag::Identifier),
            ("$_x9", Tag::Identifier),
            ("null", Tag::Identifier),
        ] {
            let ident = lex(word, config);
            assert_eq!(ident.tag(), tag, "{word}");
            assert_eq!(ident.raw(), word);
        }
    }

    #[test]
    fn stops_at_non_part() {
        let ident = lex("abc-def", &ScannerConfig::default());
        assert_eq!(ident.raw(), "abc");
        assert_eq!(ident.span().as_range(), 0..3);
    }

    #[test]
    fn booleans_beat_keywords() {
        let config = &ScannerConfig::default().with_keywords(["true"]);
        assert_eq!(lex("true", config).tag(), Tag::BooleanLiteral);
    }

    #[test]
    fn custom_classes() {
        let config = &ScannerConfig::default()
            .with_identifier_start(CharClass::pattern(r"\p{L}").unwrap())
            .with_identifier_part(CharClass::pattern(r"[\p{L}\p{Nd}-]").unwrap())
            .with_keywords(["función"]);

        assert_eq!(lex("función", config).tag(), Tag::Keyword);

        let ident = lex("größe-2 ", config);
        assert_eq!(ident.raw(), "größe-2");
        assert_eq!(ident.tag(), Tag::Identifier);
        assert_eq!(ident.span().len(), "größe-2".len());
    }

    #[test]
    fn not_at_digit() {
        let input = &SourceStream::new("9lives");
        assert!(!IdentifierName::peek(input, &ScannerConfig::default()));
    }
}
