//!
//! A source file.
//!

use std::{path::Path, sync::Arc};

use crate::lexing::{Scanner, ScannerConfig};

use super::Spanned;

///
/// A fully materialized source buffer,
/// labelled with where it came from.
///
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: Arc<str>,
    contents: String,
}

impl SourceFile {
    ///
    /// Wrap already-loaded source text.
    ///
    pub fn new(path: impl AsRef<str>, contents: impl Into<String>) -> Self {
        Self {
            path: Arc::from(path.as_ref()),
            contents: contents.into(),
        }
    }

    ///
    /// TESTING ONLY
    /// ***
    /// Create a dumy file with a fake path.
    ///
    #[cfg(test)]
    pub fn dummy_file(contents: &'static str) -> Self {
        Self::new("DUMMY.FILE", contents)
    }

    ///
    /// Attempts to read source code from a given file path.
    ///
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        Ok(Self::new(path.to_string_lossy(), contents))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    ///
    /// Returns the source code at a given [Span], if within bounds.
    ///
    pub fn source_at(&self, span: impl Spanned) -> Option<&str> {
        self.contents.get(span.span().as_range())
    }

    ///
    /// Start scanning this file.
    ///
    /// Unless `config` already carries a source label,
    /// tokens are labelled with this file's path.
    ///
    pub fn scanner(&self, config: ScannerConfig) -> Scanner<'_> {
        let config = match config.source {
            Some(_) => config,
            None => config.with_source(self.path.clone()),
        };

        Scanner::new(&self.contents, config)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{Span, Spanned},
        lexing::ScannerConfig,
    };

    use super::SourceFile;

    #[test]
    fn source_at() {
        let f = SourceFile::dummy_file("PEN\nPINEAPPLE\nAPPLE\nPEN");
        assert_eq!(f.source_at(Span::new(4, 13)), Some("PINEAPPLE"));
        assert_eq!(f.source_at(Span::new(20, 99)), None);
    }

    #[test]
    fn labels_tokens_with_path() {
        let f = SourceFile::dummy_file("apple pen");
        let tokens = f.scanner(ScannerConfig::default()).all_tokens().unwrap();

        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.source.as_deref() == Some("DUMMY.FILE")));
        assert_eq!(f.source_at(tokens[1].span()), Some("pen"));
    }

    #[test]
    fn explicit_label_wins() {
        let f = SourceFile::dummy_file("x");
        let token = f
            .scanner(ScannerConfig::default().with_source("inline"))
            .next_token()
            .unwrap();

        assert_eq!(token.source.as_deref(), Some("inline"));
    }
}
