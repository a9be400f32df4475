use toker_macros::{ECMARef, Spanned};

use crate::{
    common::Span,
    lexing::{
        utils::{LexT, ScanResult, SourceStream},
        ScannerConfig,
    },
};

///
/// `<LF>`, `<CR>`, `<LS>` or `<PS>`.
///
pub fn is_line_terminator(ch: &char) -> bool {
    matches!(ch, '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}')
}

///
/// All accepted line endings, including `\r\n`.
///
#[ECMARef(
    "LineTerminatorSequence",
    "https://262.ecma-international.org/5.1/#sec-7.3"
)]
#[derive(Debug, Spanned)]
pub struct LineTerminatorSequence {
    span: Span,
}

impl LexT for LineTerminatorSequence {
    fn peek(input: &SourceStream, _: &ScannerConfig) -> bool {
        input.upcoming(is_line_terminator)
    }

    fn lex(input: &mut SourceStream, _: &ScannerConfig) -> ScanResult<Self> {
        let start = input.loc();

        if input.upcoming("\r\n") {
            input.take_n(2);
        } else {
            input.take();
        }

        Ok(Self {
            span: input.span_from(start),
        })
    }
}
