//! Error types for linegraph-core
//!
//! Provides unified error handling across the crate. All failures are fatal
//! for the run: the tool is a single-pass batch transformation, so every
//! error carries enough context (path or line number) to diagnose and re-run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for line-graph construction
#[derive(Debug, Error)]
pub enum LineGraphError {
    /// Input edge-list file could not be opened or read
    #[error("input file not readable: {path}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the edge list did not split into exactly two labels
    #[error("malformed edge at line {line}: expected two labels, got {found}: {content:?}")]
    MalformedEdge {
        line: usize,
        found: usize,
        content: String,
    },

    /// Write to the line-graph or mapping output failed
    #[error("write to {path} failed: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error (e.g. zero chunk capacity)
    #[error("configuration error: {0}")]
    Config(String),
}

impl LineGraphError {
    /// Create an input error for the given path
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LineGraphError::InputNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create an output-write error for the given path
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LineGraphError::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        LineGraphError::Config(msg.into())
    }
}

/// Result type alias for line-graph operations
pub type Result<T> = std::result::Result<T, LineGraphError>;
