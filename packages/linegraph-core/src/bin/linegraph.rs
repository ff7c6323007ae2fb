//! Line-graph CLI
//!
//! Transforms a directed graph given as an edge-list file into its weighted
//! line graph.
//!
//! # Usage
//!
//! ```bash
//! # Whitespace-delimited edge list
//! linegraph -i edges.txt -o line_graph.txt
//!
//! # CSV input, small write buffer, explicit mapping file
//! linegraph -i edges.csv -o line_graph.txt --csv -b 10000 -m mapping.txt
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use linegraph_core::{run, Config, EdgeListFormat};

/// Transform a directed graph into its corresponding line graph
#[derive(Parser)]
#[command(name = "linegraph")]
#[command(version)]
#[command(about = "Transform a directed graph into its weighted line graph")]
struct Cli {
    /// Input file containing the edge list
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the line graph
    #[arg(short, long)]
    output: PathBuf,

    /// Delimiter separating the two labels of an input line; any whitespace
    /// run when omitted
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Interpret the input file as CSV
    #[arg(long)]
    csv: bool,

    /// Number of line-graph edges to buffer before writing to disk; larger
    /// values are faster but use more memory
    #[arg(short, long, default_value_t = 1_000_000)]
    buffer: usize,

    /// File for the mapping from original edges to line-graph nodes;
    /// defaults to "edge_mapping" next to the output file
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// Report progress and expected output size (-v, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.csv {
        EdgeListFormat::Csv
    } else {
        EdgeListFormat::Delimited(cli.delimiter)
    };
    let config = Config {
        input_path: cli.input,
        output_path: cli.output,
        format,
        chunk_capacity: cli.buffer,
        mapping_path: cli.mapping,
        verbose: cli.verbose > 0,
    };

    match run(&config) {
        Ok(summary) => {
            println!(
                "projected {} original edges onto {} line-graph edges ({} nodes)",
                summary.original_edges, summary.line_graph_edges, summary.distinct_nodes
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
