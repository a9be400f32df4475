//!
//! The scanner: turns source text into [Token]s, one at a time.
//!

use tracing::{debug, trace};

use crate::common::{Position, SourceLocation, Span};

use super::{
    tokens::{
        comment::Comment, identifier::IdentifierName, number::DecimalLiteral, operator::Operator,
        punctuator::Single, regex::RegularExpressionLiteral, string::StringLiteral, whitespace,
        Lexeme, Tag, Token, TokenValue,
    },
    utils::{LexT, ScanResult, SourceStream},
    ScannerConfig,
};

///
/// Which lexical goal is in force at a `/`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    ///
    /// A `/` (not followed by another `/`) starts a regular expression literal.
    ///
    #[default]
    RegExp,

    ///
    /// A `/` is a division operator.
    ///
    Div,
}

///
/// The token rule chosen for the upcoming input.
///
/// Earlier variants win: a digit is never the start of an identifier,
/// a quote is never the start of a regular expression, and operators are
/// only tried once every literal has been ruled out.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    Comment,
    Decimal,
    Word,
    String,
    RegExp,
    Operator,
    Single,
}

impl Dispatch {
    fn select(input: &SourceStream, config: &ScannerConfig, goal: Goal) -> Self {
        if config.emit_comments && Comment::peek(input, config) {
            Self::Comment
        } else if DecimalLiteral::peek(input, config) {
            Self::Decimal
        } else if IdentifierName::peek(input, config) {
            Self::Word
        } else if StringLiteral::peek(input, config) {
            Self::String
        } else if goal == Goal::RegExp && RegularExpressionLiteral::peek(input, config) {
            Self::RegExp
        } else if Operator::peek(input, config) {
            Self::Operator
        } else {
            Self::Single
        }
    }
}

///
/// A single-pass, pull-based tokenizer over one source buffer.
///
/// ```
/// use toker::lexing::{Scanner, Tag};
///
/// let mut scanner = Scanner::with_defaults("var x = 1;");
/// let tags = scanner
///     .all_tokens()
///     .unwrap()
///     .into_iter()
///     .map(|t| t.tag)
///     .collect::<Vec<_>>();
///
/// assert_eq!(
///     tags,
///     [Tag::Keyword, Tag::Identifier, Tag::Operator, Tag::DecimalLiteral, Tag::Char(';')]
/// );
/// ```
///
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: SourceStream<'a>,
    config: ScannerConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, config: ScannerConfig) -> Self {
        debug!(
            len = text.len(),
            source = config.source.as_deref(),
            emit_comments = config.emit_comments,
            "new scanner"
        );

        Self {
            input: SourceStream::new(text),
            config,
        }
    }

    pub fn with_defaults(text: &'a str) -> Self {
        Self::new(text, ScannerConfig::default())
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    ///
    /// The cursor's current line and column.
    ///
    pub fn position(&self) -> Position {
        self.input.position()
    }

    ///
    /// Scan the next token, treating `/` as the start of a
    /// regular expression.
    ///
    /// Once the input is exhausted this keeps returning an `eof` token.
    ///
    pub fn next_token(&mut self) -> ScanResult<Token> {
        self.next_token_with(Goal::RegExp)
    }

    ///
    /// Scan the next token under an explicit [Goal].
    ///
    pub fn next_token_with(&mut self, goal: Goal) -> ScanResult<Token> {
        let token = self.scan(goal);

        match &token {
            Ok(token) => trace!(
                tag = %token.tag,
                lexeme = %token.lexeme,
                loc = %token.loc,
                "token"
            ),
            Err(err) => debug!(%err, "scan failed"),
        }

        token
    }

    ///
    /// Every remaining token, in order, without the final `eof`.
    ///
    pub fn all_tokens(&mut self) -> ScanResult<Vec<Token>> {
        self.by_ref().collect()
    }

    fn scan(&mut self, goal: Goal) -> ScanResult<Token> {
        whitespace::skip(&mut self.input, &self.config)?;

        let start = self.input.position();

        if self.input.is_finished() {
            let here = self.input.loc();
            let span = Span {
                start: here,
                end: here,
            };
            return Ok(self.token(Tag::Eof, Lexeme::from("eof"), start, span));
        }

        let (span, (tag, lexeme)) = match Dispatch::select(&self.input, &self.config, goal) {
            Dispatch::Comment => self.lex::<Comment>()?,
            Dispatch::Decimal => self.lex::<DecimalLiteral>()?,
            Dispatch::Word => self.lex::<IdentifierName>()?,
            Dispatch::String => self.lex::<StringLiteral>()?,
            Dispatch::RegExp => self.lex::<RegularExpressionLiteral>()?,
            Dispatch::Operator => self.lex::<Operator>()?,
            Dispatch::Single => self.lex::<Single>()?,
        };

        Ok(self.token(tag, lexeme, start, span))
    }

    fn lex<T: LexT + TokenValue>(&mut self) -> ScanResult<(Span, (Tag, Lexeme))> {
        let lexed = T::lex(&mut self.input, &self.config)?;
        Ok((lexed.span(), lexed.into_value()))
    }

    fn token(&self, tag: Tag, lexeme: Lexeme, start: Position, span: Span) -> Token {
        Token {
            tag,
            lexeme,
            loc: SourceLocation {
                start,
                end: self.input.position(),
            },
            source: self.config.source.clone(),
            span,
        }
    }
}

///
/// Tokens up to (not including) `eof`.
///
impl<'a> Iterator for Scanner<'a> {
    type Item = ScanResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}
