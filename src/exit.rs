// src/exit.rs
//! Standardized process exit codes for `l321`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum L321Exit {
    /// Every graph was labeled (optimal or best found).
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input validation failed (unparseable edge list, bad config value).
    InvalidInput = 2,
    /// The MIP backend could not be started.
    SolverUnavailable = 3,
    /// The batch finished but some graphs failed or had no labeling.
    InstanceFailures = 4,
}

impl L321Exit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for L321Exit {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&crate::error::LabelError> for L321Exit {
    fn from(e: &crate::error::LabelError) -> Self {
        use crate::error::LabelError;
        match e {
            LabelError::SolverUnavailable(_) => Self::SolverUnavailable,
            LabelError::Parse { .. } | LabelError::Config(_) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}
