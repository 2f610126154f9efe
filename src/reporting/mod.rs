// src/reporting/mod.rs
//! CSV tables and terminal output.

pub mod console;
pub mod tables;

pub use console::{format_inspect, format_json, format_labeling, format_progress, format_summary};
pub use tables::{summary_record, table_path, write_labeling, write_summary};
