//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading sign-list source from files or
//! strings and running the parser on it. It's used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust
//! use ogsl_parser::ogsl::loader::DocumentLoader;
//!
//! // From file
//! let list = DocumentLoader::from_path("ogsl.asl").unwrap().parse().unwrap();
//!
//! // From string
//! let list = DocumentLoader::from_string("@sign AN\n@v an\n@end sign\n")
//!     .parse()
//!     .unwrap();
//! ```

use crate::ogsl::ast::ParseError;
use crate::ogsl::lexing::source_lines;
use crate::ogsl::pipeline::{parse_lines, BlockErrorPolicy, SignList};
use crate::ogsl::token::SourceLine;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Document loader with parse shortcuts
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Trimmed, tab-normalized, numbered lines (blank lines included).
    pub fn lines(&self) -> Vec<SourceLine> {
        source_lines(&self.source)
    }

    /// Parse the source, aborting on the first error.
    pub fn parse(&self) -> Result<SignList, LoaderError> {
        self.parse_with(BlockErrorPolicy::Abort)
    }

    /// Parse the source with the given block error policy.
    pub fn parse_with(&self, policy: BlockErrorPolicy) -> Result<SignList, LoaderError> {
        Ok(parse_lines(self.lines(), policy)?)
    }

    /// Get a reference to the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}
