pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod greedy;
pub mod logging;
pub mod model;
pub mod reporting;
pub mod solve;
pub mod types;
pub mod verify;
