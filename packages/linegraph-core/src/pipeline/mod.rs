//! Pipeline orchestration and configuration

pub mod config;
pub mod runner;

pub use config::{Config, DEFAULT_CHUNK_CAPACITY, DEFAULT_MAPPING_FILE_NAME};
pub use runner::{run, run_with_weight, RunSummary};
