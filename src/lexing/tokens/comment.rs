//!
//! ## Comments
//!
//! Either skipped with the whitespace, or
//! surfaced as tokens ([ScannerConfig::emit_comments]).
//!

use toker_macros::{ECMARef, Spanned};

use crate::{
    common::Span,
    lexing::{
        utils::{LexT, LiteralKind, ScanResult, SourceStream},
        ScannerConfig,
    },
};

use super::{line_terminator::is_line_terminator, Lexeme, Tag, TokenValue};

#[ECMARef("Comment", "https://262.ecma-international.org/5.1/#sec-7.4")]
#[derive(Debug, Spanned)]
pub enum Comment {
    MultiLine(MultiLineComment),
    SingleLine(SingleLineComment),
}

impl LexT for Comment {
    fn peek(input: &SourceStream, config: &ScannerConfig) -> bool {
        MultiLineComment::peek(input, config) || SingleLineComment::peek(input, config)
    }

    fn lex(input: &mut SourceStream, config: &ScannerConfig) -> ScanResult<Self> {
        if MultiLineComment::peek(input, config) {
            return MultiLineComment::lex(input, config).map(Self::MultiLine);
        }

        SingleLineComment::lex(input, config).map(Self::SingleLine)
    }
}

impl TokenValue for Comment {
    fn into_value(self) -> (Tag, Lexeme) {
        let text = match self {
            Comment::MultiLine(c) => c.text,
            Comment::SingleLine(c) => c.text,
        };

        (Tag::Comment, Lexeme::Text(text))
    }
}

///
/// `// ...` up to (not including) the next line terminator,
/// or the end of input.
///
#[ECMARef(
    "SingleLineComment",
    "https://262.ecma-international.org/5.1/#sec-7.4"
)]
#[derive(Debug, Spanned)]
pub struct SingleLineComment {
    span: Span,
    text: String,
}

impl LexT for SingleLineComment {
    fn peek(input: &SourceStream, _: &ScannerConfig) -> bool {
        input.upcoming("//")
    }

    fn lex(input: &mut SourceStream, _: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();
        input.take_n(2);

        let text = input.take_while(|ch| !is_line_terminator(ch)).to_string();

        Ok(Self {
            span: input.span_from(start),
            text,
        })
    }
}

///
/// `/* ... */`, possibly spanning lines.
///
#[ECMARef(
    "MultiLineComment",
    "https://262.ecma-international.org/5.1/#sec-7.4"
)]
#[derive(Debug, Spanned)]
pub struct MultiLineComment {
    span: Span,
    text: String,
}

impl LexT for MultiLineComment {
    fn peek(input: &SourceStream, _: &ScannerConfig) -> bool {
        input.upcoming("/*")
    }

    fn lex(input: &mut SourceStream, _: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();
        let position = input.position();
        input.take_n(2);

        let mut text = String::new();
        while !input.upcoming("*/") {
            let Some(ch) = input.take() else {
                return Err(input.unterminated(LiteralKind::BlockComment, position));
            };
            text.push(ch);
        }
        input.take_n(2);

        Ok(Self {
            span: input.span_from(start),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{Position, SourceFile, Spanned},
        lexing::{
            tokens::{Lexeme, Tag, TokenValue},
            utils::{LexT, LiteralKind, ScanError, SourceStream},
            ScannerConfig,
        },
    };

    use super::Comment;

    fn lex(src: &'static str) -> (Result<Comment, ScanError>, Position) {
        let src = SourceFile::dummy_file(src);
        let input = &mut SourceStream::new(src.contents());
        let comment = Comment::lex(input, &ScannerConfig::default());
        (comment, input.position())
    }

    #[test]
    fn single_line() {
        let (comment, position) = lex("// Single line comment\nnext");
        let comment = comment.unwrap();

        assert!(matches!(comment, Comment::SingleLine(_)));
        assert_eq!(comment.span().as_range(), 0..22);
        assert_eq!(position, Position::new(1, 22));
        assert_eq!(
            comment.into_value(),
            (Tag::Comment, Lexeme::from(" Single line comment"))
        );
    }

    #[test]
    fn single_line_at_end_of_input() {
        let (comment, _) = lex("//");
        assert_eq!(comment.unwrap().into_value().1, Lexeme::from(""));
    }

    #[test]
    fn multi_line() {
        let (comment, position) = lex("/* Multi line Comment\r\nWa-hey!*/ x");
        let comment = comment.unwrap();

        assert!(matches!(comment, Comment::MultiLine(_)));
        assert_eq!(position, Position::new(2, 9));
        assert_eq!(
            comment.into_value().1,
            Lexeme::from(" Multi line Comment\r\nWa-hey!")
        );
    }

    #[test]
    fn star_inside_block() {
        let (comment, _) = lex("/** a * b **/");
        assert_eq!(comment.unwrap().into_value().1, Lexeme::from("* a * b *"));
    }

    #[test]
    fn unterminated() {
        let (comment, position) = lex("/* a *");

        assert_eq!(
            comment.unwrap_err(),
            ScanError::UnterminatedLiteral {
                kind: LiteralKind::BlockComment,
                start: Position::new(1, 0),
            }
        );
        assert_eq!(position, Position::new(1, 6));
    }
}
