// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("MIP solver unavailable: {0}")]
    SolverUnavailable(String),

    #[error("MIP solver failed: {0}")]
    Solver(String),

    #[error("Solver reported an optimal assignment that violates {violations} gap constraint(s)")]
    InvalidAssignment { violations: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl LabelError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelError>;

// `?` on a bare io::Error, for writers that do not know their path.
impl From<std::io::Error> for LabelError {
    fn from(source: std::io::Error) -> Self {
        LabelError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
