//! Pipeline configuration

use std::path::{Path, PathBuf};

use crate::features::edge_reader::EdgeListFormat;

/// Default number of buffered line-graph edges between flushes
pub const DEFAULT_CHUNK_CAPACITY: usize = 1_000_000;

/// Default file name for the mapping output, placed next to the line-graph
/// output
pub const DEFAULT_MAPPING_FILE_NAME: &str = "edge_mapping";

/// Configuration of one transformation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Edge-list input file
    pub input_path: PathBuf,
    /// Line-graph output file (appended to in chunks)
    pub output_path: PathBuf,
    /// Input layout: csv or delimited raw text
    pub format: EdgeListFormat,
    /// Buffered edges between flushes; must be positive
    pub chunk_capacity: usize,
    /// Mapping output file; `None` derives `<output dir>/edge_mapping`
    pub mapping_path: Option<PathBuf>,
    /// Report upper-bound and progress statistics
    pub verbose: bool,
}

impl Config {
    /// Configuration with defaults for everything but the two paths
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            format: EdgeListFormat::default(),
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            mapping_path: None,
            verbose: false,
        }
    }

    /// Effective mapping path: the configured one, or the default name in
    /// the output file's directory
    pub fn mapping_path(&self) -> PathBuf {
        match &self.mapping_path {
            Some(path) => path.clone(),
            None => self
                .output_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_MAPPING_FILE_NAME),
        }
    }
}
