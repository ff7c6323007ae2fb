//! Edge Reader
//!
//! Lazy, single-pass reader for edge-list files. Each non-empty input line
//! yields one `(source, target)` label pair in file order. Labels are opaque
//! tokens; the reader never interprets them as numbers.
//!
//! The iterator is consumed exactly once (indexing needs a full pass and the
//! mapping output is produced from the ids assigned during that same pass).
//! Restarting requires reopening the source.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::errors::{LineGraphError, Result};

/// Input edge-list layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeListFormat {
    /// Two comma-separated labels per line, e.g. `1,2`
    Csv,
    /// Two labels per line separated by a delimiter; `None` means any
    /// whitespace run, e.g. `1 2` (or `1.2` with delimiter `.`)
    Delimited(Option<String>),
}

impl Default for EdgeListFormat {
    /// Whitespace-delimited raw text
    fn default() -> Self {
        EdgeListFormat::Delimited(None)
    }
}

impl EdgeListFormat {
    /// Split one line into its tokens under this format
    fn split<'a>(&'a self, line: &'a str) -> Vec<&'a str> {
        match self {
            EdgeListFormat::Csv => line.split(',').map(str::trim).collect(),
            EdgeListFormat::Delimited(Some(delim)) => line.split(delim.as_str()).collect(),
            EdgeListFormat::Delimited(None) => line.split_whitespace().collect(),
        }
    }
}

/// Streaming reader over an edge-list file
///
/// Yields `Ok((source_label, target_label))` per non-empty line, or a fatal
/// [`LineGraphError::MalformedEdge`] naming the 1-based line number when a
/// line does not split into exactly two tokens.
pub struct EdgeListReader {
    lines: Lines<BufReader<File>>,
    format: EdgeListFormat,
    path: PathBuf,
    line_no: usize,
}

impl EdgeListReader {
    /// Open `path` for a single streaming pass
    ///
    /// Fails with [`LineGraphError::InputNotFound`] if the file cannot be
    /// opened; no output is produced in that case.
    pub fn open(path: impl AsRef<Path>, format: EdgeListFormat) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| LineGraphError::input(&path, e))?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            format,
            path,
            line_no: 0,
        })
    }

    /// Path this reader was opened on
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_line(&self, line: &str) -> Result<(String, String)> {
        let tokens = self.format.split(line);
        match tokens.as_slice() {
            [source, target] if !source.is_empty() && !target.is_empty() => {
                Ok((source.to_string(), target.to_string()))
            }
            _ => Err(LineGraphError::MalformedEdge {
                line: self.line_no,
                found: tokens.iter().filter(|t| !t.is_empty()).count(),
                content: line.to_string(),
            }),
        }
    }
}

impl Iterator for EdgeListReader {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(LineGraphError::input(&self.path, e))),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line(&line));
        }
    }
}
