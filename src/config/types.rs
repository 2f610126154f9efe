use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Batch settings, read from `l321.toml` and overridable from the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for edge-list files.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    /// Directory receiving one summary CSV per graph.
    #[serde(default = "default_summary_dir")]
    pub summary_dir: PathBuf,
    /// Directory receiving one `vertex,label` CSV per labeled graph.
    #[serde(default = "default_labeling_dir")]
    pub labeling_dir: PathBuf,
    /// File extension of edge-list files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_time_limit_minutes")]
    pub time_limit_minutes: f64,
    /// Graphs solved concurrently. 1 keeps the batch sequential.
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_true")]
    pub tighten_bounds: bool,
    #[serde(default = "default_true")]
    pub greedy_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            summary_dir: default_summary_dir(),
            labeling_dir: default_labeling_dir(),
            extension: default_extension(),
            time_limit_minutes: default_time_limit_minutes(),
            workers: default_workers(),
            tighten_bounds: true,
            greedy_fallback: true,
        }
    }
}

fn default_input_dir() -> PathBuf { PathBuf::from("graphs") }
fn default_summary_dir() -> PathBuf { PathBuf::from("results") }
fn default_labeling_dir() -> PathBuf { PathBuf::from("labelings") }
fn default_extension() -> String { "txt".to_string() }

const fn default_true() -> bool { true }
const fn default_time_limit_minutes() -> f64 { 15.0 }
const fn default_workers() -> usize { 1 }

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input_dir: Option<PathBuf>,
    pub summary_dir: Option<PathBuf>,
    pub labeling_dir: Option<PathBuf>,
    pub time_limit_minutes: Option<f64>,
    pub workers: Option<usize>,
    pub no_tighten: bool,
    pub no_fallback: bool,
}
