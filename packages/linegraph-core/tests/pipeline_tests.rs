//! End-to-end pipeline tests over real files

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use linegraph_core::{run, Config, EdgeListFormat, LineGraphError};

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn with_input(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("edges.txt"), content).unwrap();
        Self { dir }
    }

    fn config(&self) -> Config {
        Config::new(self.dir.path().join("edges.txt"), self.output_path())
    }

    fn output_path(&self) -> PathBuf {
        self.dir.path().join("line_graph.txt")
    }

    fn mapping_path(&self) -> PathBuf {
        self.dir.path().join("edge_mapping")
    }

    fn lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn output_lines(&self) -> Vec<String> {
        Self::lines(&self.output_path())
    }

    fn mapping_lines(&self) -> Vec<String> {
        Self::lines(&self.mapping_path())
    }
}

#[test]
fn test_end_to_end_example() {
    // edges (1,2),(2,3),(2,4) get ids 0,1,2; node 2 joins 0 with 1 and 2
    let ws = Workspace::with_input("1 2\n2 3\n2 4\n");
    let summary = run(&ws.config()).unwrap();

    assert_eq!(summary.original_edges, 3);
    assert_eq!(summary.line_graph_edges, 2);
    assert_eq!(ws.output_lines(), vec!["0 1 0.5", "0 2 0.5"]);
    assert_eq!(
        ws.mapping_lines(),
        vec!["0: (1,2)", "1: (2,3)", "2: (2,4)"]
    );
}

#[test]
fn test_csv_input() {
    let ws = Workspace::with_input("1,2\n2,3\n2,4\n");
    let mut config = ws.config();
    config.format = EdgeListFormat::Csv;
    let summary = run(&config).unwrap();
    assert_eq!(summary.line_graph_edges, 2);
    assert_eq!(ws.output_lines(), vec!["0 1 0.5", "0 2 0.5"]);
}

#[test]
fn test_custom_delimiter() {
    let ws = Workspace::with_input("1.2\n2.3\n");
    let mut config = ws.config();
    config.format = EdgeListFormat::Delimited(Some(".".to_string()));
    let summary = run(&config).unwrap();
    assert_eq!(summary.original_edges, 2);
    assert_eq!(ws.output_lines(), vec!["0 1 1"]);
}

#[test]
fn test_isolated_edge_produces_empty_line_graph() {
    let ws = Workspace::with_input("1 2\n");
    let summary = run(&ws.config()).unwrap();
    assert_eq!(summary.original_edges, 1);
    assert_eq!(summary.line_graph_edges, 0);
    assert_eq!(ws.output_lines(), Vec::<String>::new());
    assert_eq!(ws.mapping_lines(), vec!["0: (1,2)"]);
}

#[test]
fn test_self_link_pairs_with_itself() {
    let ws = Workspace::with_input("a a\n");
    let summary = run(&ws.config()).unwrap();
    assert_eq!(summary.line_graph_edges, 1);
    assert_eq!(ws.output_lines(), vec!["0 0 1"]);
    assert_eq!(ws.mapping_lines(), vec!["0: (a,a)"]);
}

#[test]
fn test_mapping_is_bijective_and_ascending() {
    let ws = Workspace::with_input("1 2\n2 3\n3 1\n2 4\n4 1\n1 3\n");
    run(&ws.config()).unwrap();

    let ids: Vec<u64> = ws
        .mapping_lines()
        .iter()
        .map(|line| line.split(':').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(ids, (0..6).collect::<Vec<u64>>());
}

#[test]
fn test_completeness_over_degree_products() {
    let input = "1 2\n3 2\n2 4\n2 5\n4 5\n5 1\n1 4\n";
    let ws = Workspace::with_input(input);
    let summary = run(&ws.config()).unwrap();

    // independently: Σ indegree(v) · outdegree(v)
    let mut indeg: HashMap<&str, u64> = HashMap::new();
    let mut outdeg: HashMap<&str, u64> = HashMap::new();
    for line in input.lines() {
        let mut it = line.split_whitespace();
        let (s, t) = (it.next().unwrap(), it.next().unwrap());
        *outdeg.entry(s).or_default() += 1;
        *indeg.entry(t).or_default() += 1;
    }
    let expected: u64 = indeg
        .iter()
        .map(|(node, i)| i * outdeg.get(node).copied().unwrap_or(0))
        .sum();

    assert_eq!(summary.line_graph_edges, expected);
    assert_eq!(ws.output_lines().len() as u64, expected);
}

#[test]
fn test_chunk_size_invariance() {
    let input = "1 2\n2 3\n3 1\n2 4\n4 1\n1 3\n3 4\n4 2\n";
    let mut reference: Option<Vec<String>> = None;

    // capacity below, dividing-unevenly, and above the output size
    for capacity in [1usize, 7, 1_000_000] {
        let ws = Workspace::with_input(input);
        let mut config = ws.config();
        config.chunk_capacity = capacity;
        run(&config).unwrap();

        let mut lines = ws.output_lines();
        lines.sort();
        match &reference {
            None => reference = Some(lines),
            Some(expected) => assert_eq!(&lines, expected, "capacity {capacity} diverged"),
        }
    }
}

#[test]
fn test_flush_counting() {
    // node 1 has indegree 5 and outdegree 1: five line-graph edges
    let ws = Workspace::with_input("2 1\n3 1\n4 1\n5 1\n6 1\n1 7\n");
    let mut config = ws.config();
    config.chunk_capacity = 2;
    let summary = run(&config).unwrap();
    assert_eq!(summary.line_graph_edges, 5);
    assert_eq!(summary.flushes, 3);
}

#[test]
fn test_duplicate_edges_are_distinct_line_graph_nodes() {
    let ws = Workspace::with_input("1 2\n1 2\n2 3\n");
    let summary = run(&ws.config()).unwrap();
    assert_eq!(summary.original_edges, 3);
    assert_eq!(ws.output_lines(), vec!["0 2 1", "1 2 1"]);
    assert_eq!(
        ws.mapping_lines(),
        vec!["0: (1,2)", "1: (1,2)", "2: (2,3)"]
    );
}

#[test]
fn test_explicit_mapping_path() {
    let ws = Workspace::with_input("1 2\n2 3\n");
    let mut config = ws.config();
    let mapping = ws.dir.path().join("custom_mapping.txt");
    config.mapping_path = Some(mapping.clone());
    run(&config).unwrap();
    assert_eq!(Workspace::lines(&mapping), vec!["0: (1,2)", "1: (2,3)"]);
}

#[test]
fn test_missing_input_is_fatal_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().join("absent.txt"), dir.path().join("out.txt"));
    let err = run(&config).unwrap_err();
    assert!(matches!(err, LineGraphError::InputNotFound { .. }));
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_malformed_line_aborts_with_line_number() {
    let ws = Workspace::with_input("1 2\n2 3 4\n3 1\n");
    let err = run(&ws.config()).unwrap_err();
    match err {
        LineGraphError::MalformedEdge { line, .. } => assert_eq!(line, 2),
        other => panic!("expected MalformedEdge, got {other:?}"),
    }
    // already-emitted mapping records stay on disk as a valid prefix
    assert_eq!(ws.mapping_lines().len(), 1);
}

#[test]
fn test_zero_chunk_capacity_rejected() {
    let ws = Workspace::with_input("1 2\n");
    let mut config = ws.config();
    config.chunk_capacity = 0;
    assert!(matches!(
        run(&config),
        Err(LineGraphError::Config(_))
    ));
}

#[test]
fn test_reruns_append_to_output() {
    let ws = Workspace::with_input("1 2\n2 3\n");
    run(&ws.config()).unwrap();
    run(&ws.config()).unwrap();
    assert_eq!(ws.output_lines(), vec!["0 1 1", "0 1 1"]);
}
