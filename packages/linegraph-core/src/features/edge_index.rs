//! Edge Indexer
//!
//! Consumes the edge stream exactly once and builds the only state the
//! engine keeps resident: a per-node adjacency index of original-edge ids,
//! plus the id → original-edge table. Index size is bounded by the input
//! graph, never by the (potentially O(E²)) line graph.
//!
//! Node iteration order is pinned to first-observation order so that a run
//! on identical input reproduces the output byte for byte.

use rustc_hash::FxHashMap;

use crate::errors::Result;
use crate::features::mapping::{MappingRecord, MappingSink};

/// Dense identifier of an original edge, assigned in input order from 0
pub type EdgeId = u64;

/// An edge of the input graph, as read
///
/// Owned by the index; the mapping output references these labels during
/// the indexing pass instead of re-reading the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalEdge {
    pub source: String,
    pub target: String,
}

/// Incoming and outgoing edge-ids of one node
///
/// Append-only during indexing, read-only afterwards. A self-link puts the
/// same id in both lists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeAdjacency {
    /// Ids of edges whose target is this node
    pub incoming: Vec<EdgeId>,
    /// Ids of edges whose source is this node
    pub outgoing: Vec<EdgeId>,
}

impl NodeAdjacency {
    /// Number of line-graph edges this node will contribute
    pub fn pair_count(&self) -> u64 {
        self.incoming.len() as u64 * self.outgoing.len() as u64
    }
}

/// Completed adjacency index of the input graph
#[derive(Debug, Default)]
pub struct EdgeIndex {
    adjacency: FxHashMap<String, NodeAdjacency>,
    /// Node labels in first-observation order; fixes iteration order
    labels: Vec<String>,
    /// Edge-id → original edge (index position is the id)
    edges: Vec<OriginalEdge>,
}

impl EdgeIndex {
    /// Build the index from an edge stream, emitting one mapping record per
    /// assigned id as it is assigned
    ///
    /// Duplicate input edges get distinct ids and distinct adjacency
    /// entries; nothing is deduplicated.
    pub fn build<I, S>(pairs: I, mapping: &mut S) -> Result<Self>
    where
        I: IntoIterator<Item = Result<(String, String)>>,
        S: MappingSink + ?Sized,
    {
        let mut index = EdgeIndex::default();
        for pair in pairs {
            let (source, target) = pair?;
            let edge_id = index.edges.len() as EdgeId;

            index.node_entry(&source).outgoing.push(edge_id);
            index.node_entry(&target).incoming.push(edge_id);

            mapping.emit(MappingRecord {
                edge_id,
                source: &source,
                target: &target,
            })?;
            index.edges.push(OriginalEdge { source, target });
        }
        Ok(index)
    }

    fn node_entry(&mut self, label: &str) -> &mut NodeAdjacency {
        if !self.adjacency.contains_key(label) {
            self.labels.push(label.to_string());
            self.adjacency.insert(label.to_string(), NodeAdjacency::default());
        }
        self.adjacency.get_mut(label).unwrap()
    }

    /// Number of original edges (and of line-graph nodes)
    pub fn edge_count(&self) -> u64 {
        self.edges.len() as u64
    }

    /// Number of distinct node labels observed
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Original edge for the given id, if assigned
    pub fn edge(&self, id: EdgeId) -> Option<&OriginalEdge> {
        self.edges.get(id as usize)
    }

    /// Adjacency of a node label, if observed
    pub fn adjacency(&self, label: &str) -> Option<&NodeAdjacency> {
        self.adjacency.get(label)
    }

    /// Nodes in first-observation order with their adjacency
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &NodeAdjacency)> {
        self.labels
            .iter()
            .map(move |label| (label.as_str(), &self.adjacency[label]))
    }

    /// Exact number of line-graph edges the generator will produce:
    /// `Σ indegree(v) · outdegree(v)` over all nodes
    pub fn possible_pairs(&self) -> u64 {
        self.adjacency.values().map(NodeAdjacency::pair_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::mapping::NullMappingSink;

    fn pairs(input: &[(&str, &str)]) -> Vec<Result<(String, String)>> {
        input
            .iter()
            .map(|(s, t)| Ok((s.to_string(), t.to_string())))
            .collect()
    }

    fn build(input: &[(&str, &str)]) -> EdgeIndex {
        EdgeIndex::build(pairs(input), &mut NullMappingSink).unwrap()
    }

    #[test]
    fn test_sequential_ids_in_input_order() {
        let index = build(&[("1", "2"), ("2", "3"), ("2", "4")]);
        assert_eq!(index.edge_count(), 3);
        assert_eq!(index.edge(0).unwrap().source, "1");
        assert_eq!(index.edge(2).unwrap().target, "4");
        assert!(index.edge(3).is_none());
    }

    #[test]
    fn test_adjacency_lists() {
        let index = build(&[("1", "2"), ("2", "3"), ("2", "4")]);
        let node2 = index.adjacency("2").unwrap();
        assert_eq!(node2.incoming, vec![0]);
        assert_eq!(node2.outgoing, vec![1, 2]);
        let node1 = index.adjacency("1").unwrap();
        assert!(node1.incoming.is_empty());
        assert_eq!(node1.outgoing, vec![0]);
    }

    #[test]
    fn test_self_link_in_both_lists() {
        let index = build(&[("a", "a")]);
        let adj = index.adjacency("a").unwrap();
        assert_eq!(adj.incoming, vec![0]);
        assert_eq!(adj.outgoing, vec![0]);
    }

    #[test]
    fn test_duplicate_edges_kept_distinct() {
        let index = build(&[("1", "2"), ("1", "2")]);
        assert_eq!(index.edge_count(), 2);
        assert_eq!(index.adjacency("1").unwrap().outgoing, vec![0, 1]);
        assert_eq!(index.adjacency("2").unwrap().incoming, vec![0, 1]);
    }

    #[test]
    fn test_node_order_is_first_observation() {
        let index = build(&[("b", "a"), ("a", "c")]);
        let order: Vec<&str> = index.nodes().map(|(label, _)| label).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_possible_pairs() {
        // node 2: indeg 1, outdeg 2 -> 2 pairs; others contribute 0
        let index = build(&[("1", "2"), ("2", "3"), ("2", "4")]);
        assert_eq!(index.possible_pairs(), 2);
    }

    #[test]
    fn test_build_propagates_reader_error() {
        let input = vec![
            Ok(("1".to_string(), "2".to_string())),
            Err(crate::errors::LineGraphError::MalformedEdge {
                line: 2,
                found: 1,
                content: "1".to_string(),
            }),
        ];
        assert!(EdgeIndex::build(input, &mut NullMappingSink).is_err());
    }
}
