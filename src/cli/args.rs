use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "l321", version, about = "Optimal L(3,2,1)-labeling of graphs via integer programming")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (defaults to ./l321.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug diagnostics on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Label every edge-list file in the input directory
    Run {
        /// Directory of edge-list files
        #[arg(long, value_name = "DIR")]
        input: Option<PathBuf>,
        /// Directory for per-graph summary tables
        #[arg(long, value_name = "DIR")]
        summary_dir: Option<PathBuf>,
        /// Directory for per-graph labeling tables
        #[arg(long, value_name = "DIR")]
        labeling_dir: Option<PathBuf>,
        /// Solver time limit per graph, in minutes
        #[arg(long, value_name = "MINUTES")]
        time_limit: Option<f64>,
        /// Graphs solved concurrently
        #[arg(long, short)]
        workers: Option<usize>,
        /// Leave label variables unbounded above
        #[arg(long)]
        no_tighten: bool,
        /// Report INFEASIBLE instead of the greedy labeling when the solver stops empty-handed
        #[arg(long)]
        no_fallback: bool,
        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Label a single edge-list file and print the labeling
    Label {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Solver time limit, in minutes
        #[arg(long, value_name = "MINUTES")]
        time_limit: Option<f64>,
        /// Also write the `vertex,label` table here
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show graph statistics and model size without solving
    Inspect {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print the effective configuration
    Config,
}
