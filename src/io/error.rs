//! Canonical error type for reading and writing domain definitions.
//!
//! Filesystem failures, malformed input lines, definitions without any domain, and
//! transform failures raised while rendering are all reported through one `Error` enum so
//! the command-line driver can turn them into uniform diagnostics.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing domain definitions.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper around operating-system level I/O failures.
    #[error(
        "I/O error for {path_desc}: {source}",
        path_desc = PathDisplay(path)
    )]
    Io {
        /// Path to the file involved in the failed operation, if any.
        path: Option<PathBuf>,
        /// Underlying error emitted by the standard library.
        #[source]
        source: std::io::Error,
    },

    /// An input line does not match the domain-definition format.
    #[error(
        "malformed domain definition in {path_desc}: {details} (line {line_number})",
        path_desc = PathDisplay(path)
    )]
    Format {
        /// Path to the offending file, if known.
        path: Option<PathBuf>,
        /// One-based line number where parsing failed.
        line_number: usize,
        /// Human-readable description of what went wrong.
        details: String,
    },

    /// The input defined compounds or nothing at all, but no domain.
    #[error("no domains defined in {path_desc}", path_desc = PathDisplay(path))]
    EmptyModel { path: Option<PathBuf> },

    /// A transform failed while rendering an output.
    #[error(transparent)]
    Transform(#[from] crate::ops::Error),
}

impl Error {
    /// Constructs an [`Error::Io`] variant from a standard I/O error.
    pub fn from_io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    /// Builds an [`Error::Format`] variant.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path pointing to the input file.
    /// * `line_number` - Line where the failure occurred (1-indexed).
    /// * `details` - Additional context about the problem.
    pub fn format(path: Option<PathBuf>, line_number: usize, details: impl Into<String>) -> Self {
        Self::Format {
            path,
            line_number,
            details: details.into(),
        }
    }

    pub fn empty_model(path: Option<PathBuf>) -> Self {
        Self::EmptyModel { path }
    }
}

/// Prints `file '<path>'` when a path is known and `stream source` otherwise.
struct PathDisplay<'a>(&'a Option<PathBuf>);

impl<'a> fmt::Display for PathDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "file '{}'", p.display()),
            None => write!(f, "stream source"),
        }
    }
}
