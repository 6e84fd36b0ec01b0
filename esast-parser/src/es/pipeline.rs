//! The parse-and-build pipeline
//!
//! One call takes source text to a finished AST. Failure is atomic per
//! input: either a full [`Program`] comes back or an error does, never a
//! partial tree.

use std::fmt;

use crate::es::ast::Program;
use crate::es::building::{build, BuildError};
use crate::es::parsing::{parse, SyntaxError};

/// Any failure between source text and a finished AST.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Syntax(SyntaxError),
    Build(BuildError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Syntax(err) => write!(f, "{err}"),
            PipelineError::Build(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Syntax(err) => Some(err),
            PipelineError::Build(err) => Some(err),
        }
    }
}

impl From<SyntaxError> for PipelineError {
    fn from(err: SyntaxError) -> Self {
        PipelineError::Syntax(err)
    }
}

impl From<BuildError> for PipelineError {
    fn from(err: BuildError) -> Self {
        PipelineError::Build(err)
    }
}

/// Parse source text and fold the parse tree into an AST.
pub fn parse_source(source: &str) -> Result<Program, PipelineError> {
    let tree = parse(source)?;
    Ok(build(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_source_builds() {
        let program = parse_source("var a = 1;").unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_syntax_error_propagates() {
        let err = parse_source("var = 1;").unwrap_err();
        assert!(matches!(err, PipelineError::Syntax(_)));
        assert!(err.to_string().starts_with("syntax error at "));
    }
}
