//!
//! Scanner configuration.
//!
//! Everything here is fixed once a [crate::lexing::Scanner] is built.
//!

use std::{collections::HashSet, sync::Arc};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    ///
    /// ECMAScript 5 keywords, plus the future reserved words
    /// that are reserved in all code.
    ///
    static ref DEFAULT_KEYWORDS: HashSet<String> = [
        "break", "case", "catch", "continue", "debugger", "default", "delete", "do", "else",
        "finally", "for", "function", "if", "in", "instanceof", "new", "return", "switch",
        "this", "throw", "try", "typeof", "var", "void", "while", "with", "class", "const",
        "enum", "export", "extends", "import", "super",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    ///
    /// ECMAScript 5 punctuators and operators.
    ///
    static ref DEFAULT_OPERATORS: HashSet<String> = [
        "{", "}", "(", ")", "[", "]", ".", ";", ",", "?", "===", "==", "=", "!==", "!=", "!",
        "<<=", "<<", "<=", "<", ">>>=", ">>>", ">>=", ">>", ">=", ">", "+=", "++", "+", "-=",
        "--", "-", "*=", "*", "/=", "/", "%=", "%", "&&", "&=", "&", "||", "|=", "|", "^=",
        "^", "~",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    static ref DEFAULT_PUNCTUATORS: HashSet<char> =
        ['.', '(', ')', ';', ',', '{', '}', '[', ']', ':', '?', '~'].into_iter().collect();
}

///
/// Errors from building a [ScannerConfig].
///
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid character class pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

///
/// A set of characters, used to decide where identifiers
/// start and what they may continue with.
///
#[derive(Debug, Clone)]
pub enum CharClass {
    ///
    /// A regular expression, tested (unanchored)
    /// against the single character.
    ///
    Pattern(Regex),

    ///
    /// A plain predicate.
    ///
    Predicate(fn(char) -> bool),
}

impl CharClass {
    ///
    /// Compile a regular expression into a [CharClass].
    ///
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    pub fn matches(&self, ch: char) -> bool {
        match self {
            CharClass::Pattern(re) => re.is_match(ch.encode_utf8(&mut [0; 4])),
            CharClass::Predicate(pred) => pred(ch),
        }
    }
}

impl From<fn(char) -> bool> for CharClass {
    fn from(value: fn(char) -> bool) -> Self {
        Self::Predicate(value)
    }
}

impl From<Regex> for CharClass {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}

///
/// `[$_a-zA-Z]`
///
pub fn default_identifier_start(ch: char) -> bool {
    matches!(ch, '$' | '_' | 'a'..='z' | 'A'..='Z')
}

///
/// `[$_a-zA-Z0-9]`
///
pub fn default_identifier_part(ch: char) -> bool {
    default_identifier_start(ch) || ch.is_ascii_digit()
}

///
/// Options for a [crate::lexing::Scanner].
///
/// ```
/// use toker::lexing::{CharClass, ScannerConfig};
///
/// let config = ScannerConfig::default()
///     .with_keywords(["let", "fn"])
///     .with_identifier_part(CharClass::pattern("[$_a-zA-Z0-9-]").unwrap())
///     .with_source("inline")
///     .emit_comments(true);
///
/// assert!(config.is_keyword("fn"));
/// assert!(!config.is_keyword("var"));
/// ```
///
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    ///
    /// Single characters that are always tokens on their own,
    /// never merged into a longer operator.
    ///
    pub punctuators: HashSet<char>,

    ///
    /// Operator strings. A character may take part in a
    /// multi-character operator if it is an operator by itself.
    ///
    pub operators: HashSet<String>,

    pub keywords: HashSet<String>,

    pub identifier_start: CharClass,

    pub identifier_part: CharClass,

    ///
    /// Label copied into every token.
    ///
    pub source: Option<Arc<str>>,

    ///
    /// Surface comments as tokens rather than skipping them.
    ///
    pub emit_comments: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            punctuators: DEFAULT_PUNCTUATORS.clone(),
            operators: DEFAULT_OPERATORS.clone(),
            keywords: DEFAULT_KEYWORDS.clone(),
            identifier_start: CharClass::Predicate(default_identifier_start),
            identifier_part: CharClass::Predicate(default_identifier_part),
            source: None,
            emit_comments: false,
        }
    }
}

impl ScannerConfig {
    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_operators<S: Into<String>>(
        mut self,
        operators: impl IntoIterator<Item = S>,
    ) -> Self {
        self.operators = operators.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_punctuators(mut self, punctuators: impl IntoIterator<Item = char>) -> Self {
        self.punctuators = punctuators.into_iter().collect();
        self
    }

    pub fn with_identifier_start(mut self, class: impl Into<CharClass>) -> Self {
        self.identifier_start = class.into();
        self
    }

    pub fn with_identifier_part(mut self, class: impl Into<CharClass>) -> Self {
        self.identifier_part = class.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn emit_comments(mut self, emit: bool) -> Self {
        self.emit_comments = emit;
        self
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_operator(&self, ch: char) -> bool {
        self.operators.contains(ch.encode_utf8(&mut [0; 4]) as &str)
    }

    pub fn is_punctuator(&self, ch: char) -> bool {
        self.punctuators.contains(&ch)
    }

    pub fn is_identifier_start(&self, ch: char) -> bool {
        self.identifier_start.matches(ch)
    }

    pub fn is_identifier_part(&self, ch: char) -> bool {
        self.identifier_part.matches(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::{CharClass, ConfigError, ScannerConfig};

    #[test]
    fn defaults() {
        let config = ScannerConfig::default();

        assert!(config.is_keyword("instanceof"));
        assert!(config.is_keyword("super"));
        assert!(!config.is_keyword("true"));
        assert!(!config.is_keyword("let"));

        assert!(config.is_operator('='));
        assert!(config.is_operator('.'));
        assert!(!config.is_operator(':'));
        assert!(!config.is_operator('#'));

        assert!(config.is_punctuator(':'));
        assert!(config.is_punctuator('.'));
        assert!(!config.is_punctuator('='));

        assert!(config.is_identifier_start('$'));
        assert!(!config.is_identifier_start('1'));
        assert!(config.is_identifier_part('1'));
        assert!(!config.is_identifier_part('é'));

        assert!(config.source.is_none());
        assert!(!config.emit_comments);
    }

    #[test]
    fn pattern_class() {
        let class = CharClass::pattern(r"\p{L}").unwrap();
        assert!(class.matches('é'));
        assert!(class.matches('Ж'));
        assert!(!class.matches('1'));
    }

    #[test]
    fn invalid_pattern() {
        assert!(matches!(
            CharClass::pattern("[a-"),
            Err(ConfigError::InvalidPattern(_))
        ));
    }

    #[test]
    fn overrides() {
        let config = ScannerConfig::default()
            .with_operators(["@"])
            .with_punctuators(['#'])
            .with_identifier_start(CharClass::Predicate(|ch| ch == '#'));

        assert!(config.is_operator('@'));
        assert!(!config.is_operator('+'));
        assert!(config.is_punctuator('#'));
        assert!(!config.is_punctuator(';'));
        assert!(config.is_identifier_start('#'));
        assert!(!config.is_identifier_start('a'));
    }
}
