//! Feature modules, one per pipeline component

pub mod chunk_writer;
pub mod edge_index;
pub mod edge_reader;
pub mod line_graph;
pub mod mapping;

pub use chunk_writer::{ChunkedWriter, LineGraphEdge};
pub use edge_index::{EdgeId, EdgeIndex, NodeAdjacency, OriginalEdge};
pub use edge_reader::{EdgeListFormat, EdgeListReader};
pub use line_graph::{evans_lambiotte_weight, LineGraphGenerator, WeightFn};
pub use mapping::{MappingRecord, MappingSink, MappingWriter, NullMappingSink};
