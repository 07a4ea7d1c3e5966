//! Token sources.
//!
//! # Responsibilities
//! - Supply the ordered list of account tokens once at startup
//! - Treat each non-empty trimmed line of the token file as one token
//!
//! # Design Decisions
//! - Loading is synchronous; it happens once before the loop starts
//! - An unreadable file is an error, never an empty list

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::accounts::token::Token;

/// Errors raised while loading tokens.
#[derive(Debug, Error)]
pub enum TokenSourceError {
    #[error("failed to read token file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pluggable supplier of bearer tokens.
pub trait TokenSource: Send + Sync {
    fn load(&self) -> Result<Vec<Token>, TokenSourceError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// Newline-delimited token file.
#[derive(Debug, Clone)]
pub struct FileTokenSource {
    path: PathBuf,
}

impl FileTokenSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TokenSource for FileTokenSource {
    fn load(&self) -> Result<Vec<Token>, TokenSourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| TokenSourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_tokens(&content))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory token list.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenSource {
    tokens: Vec<Token>,
}

impl StaticTokenSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Token::new).collect(),
        }
    }
}

impl TokenSource for StaticTokenSource {
    fn load(&self) -> Result<Vec<Token>, TokenSourceError> {
        Ok(self.tokens.clone())
    }

    fn describe(&self) -> String {
        format!("{} static token(s)", self.tokens.len())
    }
}

/// One token per non-empty trimmed line, in file order.
pub fn parse_tokens(content: &str) -> Vec<Token> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Token::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_blank_lines_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\n  tokenA  \n\n\r\ntokenB\n   \ntokenC").unwrap();

        let tokens = FileTokenSource::new(file.path()).load().unwrap();
        let raw: Vec<&str> = tokens.iter().map(Token::as_str).collect();
        assert_eq!(raw, vec!["tokenA", "tokenB", "tokenC"]);
    }

    #[test]
    fn test_missing_file_fails() {
        let source = FileTokenSource::new("/nonexistent/tokens.txt");
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tokens.txt"));
    }

    #[test]
    fn test_static_source_preserves_order() {
        let source = StaticTokenSource::new(["b", "a", "c"]);
        let tokens = source.load().unwrap();
        assert_eq!(tokens, vec![Token::new("b"), Token::new("a"), Token::new("c")]);
        assert_eq!(source.describe(), "3 static token(s)");
    }
}
