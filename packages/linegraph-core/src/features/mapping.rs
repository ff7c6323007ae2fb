//! Mapping Emitter
//!
//! Streams the edge-id → original-edge correspondence to the mapping file
//! while ids are being assigned. One record per original edge, in ascending
//! id order, format `<edge_id>: (<source>,<target>)`. This file is the only
//! durable way to recover which original edge a line-graph node represents.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{LineGraphError, Result};
use crate::features::edge_index::EdgeId;

/// One mapping line, borrowed from the edge being indexed
#[derive(Debug, Clone, Copy)]
pub struct MappingRecord<'a> {
    pub edge_id: EdgeId,
    pub source: &'a str,
    pub target: &'a str,
}

/// Consumer of mapping records, fed inline by the indexing pass
pub trait MappingSink {
    fn emit(&mut self, record: MappingRecord<'_>) -> Result<()>;
}

/// Sink that discards records; for index-only use and tests
pub struct NullMappingSink;

impl MappingSink for NullMappingSink {
    fn emit(&mut self, _record: MappingRecord<'_>) -> Result<()> {
        Ok(())
    }
}

/// Writes mapping records to a file as they arrive
///
/// Holds no record state; only the byte-level write buffer stands between
/// an emitted record and the file.
pub struct MappingWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl MappingWriter {
    /// Create (or truncate) the mapping file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| LineGraphError::output(&path, e))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Flush buffered bytes and close the file
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LineGraphError::output(&self.path, e))
    }
}

impl MappingSink for MappingWriter {
    fn emit(&mut self, record: MappingRecord<'_>) -> Result<()> {
        writeln!(
            self.writer,
            "{}: ({},{})",
            record.edge_id, record.source, record.target
        )
        .map_err(|e| LineGraphError::output(&self.path, e))
    }
}
