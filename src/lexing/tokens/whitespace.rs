use finl_unicode::categories::{CharacterCategories, MinorCategory};
use toker_macros::{ECMARef, Spanned};

use crate::{
    common::Span,
    lexing::{
        utils::{LexT, ScanResult, SourceStream},
        ScannerConfig,
    },
};

use super::{comment::Comment, line_terminator::LineTerminatorSequence};

///
/// Whitespace characters (e.g. spaces, tabs, etc.).
///
#[ECMARef("WhiteSpace", "https://262.ecma-international.org/5.1/#sec-7.2")]
#[derive(Debug, Spanned)]
pub struct WhiteSpace {
    span: Span,
}

impl WhiteSpace {
    ///
    /// Implementation matching Table 2 in [Section 7.2](https://262.ecma-international.org/5.1/#sec-7.2).
    ///
    pub fn is_whitespace(ch: &char) -> bool {
        use MinorCategory::*;

        match ch {
            '\u{0009}' | '\u{000B}' | '\u{000C}' | '\u{0020}' | '\u{00A0}' | '\u{FEFF}' => true,
            c if c.get_minor_category() == Zs => true,
            _ => false,
        }
    }
}

impl LexT for WhiteSpace {
    fn peek(input: &SourceStream, _: &ScannerConfig) -> bool {
        input.upcoming(Self::is_whitespace)
    }

    fn lex(input: &mut SourceStream, _: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();
        input.take_while(Self::is_whitespace);

        Ok(Self {
            span: input.span_from(start),
        })
    }
}

///
/// Skip everything between tokens: line terminators, whitespace and,
/// unless they are emitted as tokens, comments.
///
pub fn skip(input: &mut SourceStream, config: &ScannerConfig) -> ScanResult<()> {
    loop {
        if LineTerminatorSequence::peek(input, config) {
            LineTerminatorSequence::lex(input, config)?;
        } else if WhiteSpace::peek(input, config) {
            WhiteSpace::lex(input, config)?;
        } else if !config.emit_comments && Comment::peek(input, config) {
            Comment::lex(input, config)?;
        } else {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{Position, SourceFile},
        lexing::{
            utils::{LiteralKind, ScanError, SourceStream},
            ScannerConfig,
        },
    };

    use super::{skip, WhiteSpace};

    #[test]
    fn unicode_spaces() {
        for ch in ['\t', '\u{000B}', '\u{000C}', ' ', '\u{00A0}', '\u{FEFF}', '\u{2003}', '\u{3000}'] {
            assert!(WhiteSpace::is_whitespace(&ch), "{ch:?}");
        }

        for ch in ['\n', '\r', '\u{2028}', 'a', '_'] {
            assert!(!WhiteSpace::is_whitespace(&ch), "{ch:?}");
        }
    }

    #[test]
    fn skips_comments() {
        let src = SourceFile::dummy_file("  // one\n\t/* two\n three */  x");
        let input = &mut SourceStream::new(src.contents());
        skip(input, &ScannerConfig::default()).unwrap();

        assert_eq!(input.peek(), Some('x'));
        assert_eq!(input.position(), Position::new(3, 11));
    }

    #[test]
    fn keeps_comments_when_emitting() {
        let input = &mut SourceStream::new("  \n // one");
        skip(input, &ScannerConfig::default().emit_comments(true)).unwrap();

        assert!(input.upcoming("//"));
        assert_eq!(input.position(), Position::new(2, 1));
    }

    #[test]
    fn unterminated_comment() {
        let input = &mut SourceStream::new("\n  /* never closed");
        let err = skip(input, &ScannerConfig::default()).unwrap_err();

        assert_eq!(
            err,
            ScanError::UnterminatedLiteral {
                kind: LiteralKind::BlockComment,
                start: Position::new(2, 2),
            }
        );
        assert!(input.is_finished());
    }
}
