//! linegraph-core — streaming directed line-graph construction
//!
//! Converts a directed graph, given as an edge list, into its weighted line
//! graph L(G): every edge of G becomes a node of L(G), and two nodes of
//! L(G) are connected when the corresponding edges of G share a node (one
//! incoming, one outgoing). Weights follow Evans & Lambiotte's directed
//! construction, so any community detection algorithm run on L(G) yields
//! overlapping communities of G's nodes.
//!
//! The line graph can hold up to O(E²) edges, so it is never materialized:
//! generated edges stream through a fixed-capacity buffer that is appended
//! to the output file chunk by chunk. Only the input graph's adjacency
//! index is kept in memory.
//!
//! # Layout
//!
//! - `features/` : one module per pipeline component (reader, indexer,
//!   mapping emitter, generator, chunked writer)
//! - `pipeline/` : configuration and the run orchestrator
//!
//! # Usage
//!
//! ```rust,ignore
//! use linegraph_core::{run, Config};
//!
//! let mut config = Config::new("edges.txt", "line_graph.txt");
//! config.chunk_capacity = 500_000;
//! let summary = run(&config)?;
//! println!("wrote {} line-graph edges", summary.line_graph_edges);
//! ```

pub mod errors;
pub mod features;
pub mod pipeline;

pub use errors::{LineGraphError, Result};
pub use features::{
    evans_lambiotte_weight, ChunkedWriter, EdgeId, EdgeIndex, EdgeListFormat, EdgeListReader,
    LineGraphEdge, LineGraphGenerator, MappingRecord, MappingSink, MappingWriter, NodeAdjacency,
    NullMappingSink, OriginalEdge, WeightFn,
};
pub use pipeline::{run, run_with_weight, Config, RunSummary};
