//! File-backed source loading
//!
//! A [`SourceLoader`] owns one input's text and runs the pipeline over it.
//! An unreadable path is its own error kind so a batch driver can report
//! it and move on to the next input.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::es::ast::Program;
use crate::es::lexing::tokenize;
use crate::es::pipeline::{parse_source, PipelineError};
use crate::es::token::Token;

#[derive(Debug)]
pub enum LoaderError {
    SourceUnavailable { path: PathBuf, reason: String },
    Pipeline(PipelineError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::SourceUnavailable { path, reason } => {
                write!(f, "cannot read {}: {reason}", path.display())
            }
            LoaderError::Pipeline(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<PipelineError> for LoaderError {
    fn from(err: PipelineError) -> Self {
        LoaderError::Pipeline(err)
    }
}

/// One input's source text, ready to tokenize or parse.
#[derive(Debug)]
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    pub fn from_path(path: &Path) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path).map_err(|err| LoaderError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        Ok(Self { source })
    }

    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokenize(&self) -> Vec<(Token, logos::Span)> {
        tokenize(&self.source)
    }

    pub fn parse(&self) -> Result<Program, LoaderError> {
        Ok(parse_source(&self.source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = SourceLoader::from_path(Path::new("no/such/file.es")).unwrap_err();
        assert!(matches!(err, LoaderError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_parse_from_string() {
        let loader = SourceLoader::from_string("a + b;");
        assert_eq!(loader.tokenize().len(), 4);
        assert!(loader.parse().is_ok());
    }
}
