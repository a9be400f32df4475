//!
//! ## Regular expression literals
//!
//! A purely lexical approximation: everything from a `/` through the
//! next `/`. No escapes, no character classes, no flags. Whether a `/`
//! starts one is decided by the caller's [crate::lexing::Goal].
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

#[ECMARef(
    "RegularExpressionLiteral",
    "https://262.ecma-international.org/5.1/#sec-7.8.5"
)]
#[derive(Debug, Spanned)]
pub struct RegularExpressionLiteral {
    span: Span,
    raw: String,
}

impl RegularExpressionLiteral {
    ///
    /// The literal including both slashes.
    ///
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl LexT for RegularExpressionLiteral {
    fn peek(input: &SourceStream, _: &ScannerConfig) -> bool {
        input.upcoming('/') && input.peek_nth(1) != Some('/')
    }

    fn lex(input: &mut SourceStream, _: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();
        let position = input.position();
        input.take();

        loop {
            match input.take() {
                Some('/') => break,
                Some(_) => continue,
                None => return Err(input.unterminated(LiteralKind::RegularExpression, position)),
            }
        }

        let span = input.span_from(start);
        Ok(Self {
            span,
            raw: input.text()[span.as_range()].to_string(),
        })
    }
}

impl TokenValue for RegularExpressionLiteral {
    fn into_value(self) -> (Tag, Lexeme) {
        (Tag::RegularExpressionLiteral, Lexeme::Text(self.raw))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::Position,
        lexing::{
            utils::{LexT, LiteralKind, ScanError, SourceStream},
            ScannerConfig,
        },
    };

    use super::RegularExpressionLiteral;

    #[test]
    fn up_to_next_slash() {
        let config = &ScannerConfig::default();
        let input = &mut SourceStream::new("/ab+c/gi");

        assert!(RegularExpressionLiteral::peek(input, config));
        let re = RegularExpressionLiteral::lex(input, config).unwrap();

        assert_eq!(re.raw(), "/ab+c/");
        assert_eq!(input.rest(), "gi");
    }

    #[test]
    fn no_escape_awareness() {
        let input = &mut SourceStream::new(r"/a\/b/");
        let re = RegularExpressionLiteral::lex(input, &ScannerConfig::default()).unwrap();

        assert_eq!(re.raw(), r"/a\/");
        assert_eq!(input.rest(), "b/");
    }

    #[test]
    fn not_before_line_comment() {
        let input = &SourceStream::new("// nope");
        assert!(!RegularExpressionLiteral::peek(
            input,
            &ScannerConfig::default()
        ));
    }

    #[test]
    fn unterminated() {
        let input = &mut SourceStream::new("a /b");
        input.take_n(2);

        assert_eq!(
            RegularExpressionLiteral::lex(input, &ScannerConfig::default()).unwrap_err(),
            ScanError::UnterminatedLiteral {
                kind: LiteralKind::RegularExpression,
                start: Position::new(1, 2),
            }
        );
        assert!(input.is_finished());
    }
}
