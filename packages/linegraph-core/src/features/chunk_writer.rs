//! Chunked Writer
//!
//! The only component that touches the line-graph output file. Generated
//! edges accumulate in a fixed-capacity buffer and are appended to the file
//! one chunk at a time, so the line graph is never resident beyond one
//! buffer's worth no matter how large the output grows.
//!
//! `finish()` performs the mandatory final flush; skipping it would silently
//! drop up to `capacity - 1` trailing edges.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::{LineGraphError, Result};
use crate::features::edge_index::EdgeId;

/// One derived edge of the line graph: `from` flows into `to` through a
/// shared node of the original graph
///
/// Ephemeral: lives only between generation and the next flush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGraphEdge {
    pub from: EdgeId,
    pub to: EdgeId,
    pub weight: f64,
}

/// Capacity-bounded buffered appender for line-graph edges
pub struct ChunkedWriter {
    file: File,
    path: PathBuf,
    capacity: usize,
    buffer: Vec<LineGraphEdge>,
    written: u64,
    flushes: u64,
}

impl ChunkedWriter {
    /// Open the output file once, in append/create mode
    ///
    /// `capacity` must be positive; it bounds the number of edges held in
    /// memory between flushes.
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(LineGraphError::config("chunk capacity must be positive"));
        }
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LineGraphError::output(&path, e))?;
        Ok(Self {
            file,
            path,
            capacity,
            buffer: Vec::with_capacity(capacity),
            written: 0,
            flushes: 0,
        })
    }

    /// Append one edge; flushes when the buffer reaches capacity
    pub fn push(&mut self, edge: LineGraphEdge) -> Result<()> {
        self.buffer.push(edge);
        if self.buffer.len() >= self.capacity {
            self.flush()?;
        }
        Ok(())
    }

    /// Write every buffered edge as `<from> <to> <weight>` lines, in buffer
    /// order, then empty the buffer
    pub fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let mut chunk = String::with_capacity(self.buffer.len() * 16);
        for edge in &self.buffer {
            chunk.push_str(&format!("{} {} {}\n", edge.from, edge.to, edge.weight));
        }
        self.file
            .write_all(chunk.as_bytes())
            .map_err(|e| LineGraphError::output(&self.path, e))?;
        self.written += self.buffer.len() as u64;
        self.flushes += 1;
        debug!(
            edges = self.buffer.len(),
            total = self.written,
            "flushed chunk"
        );
        self.buffer.clear();
        Ok(())
    }

    /// Final flush; required on normal completion even below capacity
    ///
    /// Consumes the writer and closes the file. Returns the total number of
    /// edges written and the number of flushes performed.
    pub fn finish(mut self) -> Result<(u64, u64)> {
        self.flush()?;
        Ok((self.written, self.flushes))
    }

    /// Edges written to disk so far (excludes buffered ones)
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl Drop for ChunkedWriter {
    fn drop(&mut self) {
        // The file itself closes on every exit path; only edges still in
        // the buffer can be lost, which happens when finish() was skipped
        // after an earlier error already aborted the run.
        if !self.buffer.is_empty() {
            warn!(
                buffered = self.buffer.len(),
                path = %self.path.display(),
                "writer dropped with unflushed edges"
            );
        }
    }
}
