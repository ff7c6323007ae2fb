//! Pipeline orchestration
//!
//! Two sequential passes: (1) stream the edge list once, building the
//! adjacency index while the mapping file is written inline; (2) walk the
//! completed index and stream the generated line graph through the chunked
//! writer. Any failure aborts the run; output already flushed stays on disk
//! as a valid prefix, nothing is rolled back.

use tracing::info;

use crate::errors::{LineGraphError, Result};
use crate::features::chunk_writer::ChunkedWriter;
use crate::features::edge_index::EdgeIndex;
use crate::features::edge_reader::EdgeListReader;
use crate::features::line_graph::{evans_lambiotte_weight, LineGraphGenerator, WeightFn};
use crate::features::mapping::MappingWriter;
use crate::pipeline::config::Config;

/// Counters reported after a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Edges read from the input (= nodes of the line graph)
    pub original_edges: u64,
    /// Distinct node labels observed in the input
    pub distinct_nodes: usize,
    /// Line-graph edges written
    pub line_graph_edges: u64,
    /// Chunk flushes performed
    pub flushes: u64,
}

/// Run the full transformation with the Evans–Lambiotte weight
pub fn run(config: &Config) -> Result<RunSummary> {
    run_with_weight(config, evans_lambiotte_weight)
}

/// Run the full transformation with a caller-supplied weight function
pub fn run_with_weight(config: &Config, weight: WeightFn) -> Result<RunSummary> {
    if config.chunk_capacity == 0 {
        return Err(LineGraphError::config("chunk capacity must be positive"));
    }

    info!(input = %config.input_path.display(), "indexing edge list");
    let reader = EdgeListReader::open(&config.input_path, config.format.clone())?;
    let mut mapping = MappingWriter::create(config.mapping_path())?;
    let index = EdgeIndex::build(reader, &mut mapping)?;
    mapping.finish()?;
    info!(
        edges = index.edge_count(),
        nodes = index.node_count(),
        "edge list indexed"
    );
    if config.verbose {
        info!(
            line_graph_edges = index.possible_pairs(),
            "expected output size"
        );
    }

    let mut writer = ChunkedWriter::open(&config.output_path, config.chunk_capacity)?;
    let generated = LineGraphGenerator::with_weight(&index, weight).generate(&mut writer)?;
    let (written, flushes) = writer.finish()?;
    debug_assert_eq!(generated, written);
    info!(
        output = %config.output_path.display(),
        line_graph_edges = written,
        flushes,
        "line graph written"
    );

    Ok(RunSummary {
        original_edges: index.edge_count(),
        distinct_nodes: index.node_count(),
        line_graph_edges: written,
        flushes,
    })
}
