// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, Overrides};

use crate::error::{LabelError, Result};
use crate::model::BuildOptions;
use crate::solve::SolveOptions;
use std::path::Path;
use std::time::Duration;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `explicit` if given, otherwise `l321.toml` from the working
    /// directory when present, otherwise defaults.
    ///
    /// # Errors
    /// Returns error if an explicit file is missing, or any file is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => io::load_toml_config(path)?,
            None if Path::new(CONFIG_FILE).is_file() => io::load_toml_config(Path::new(CONFIG_FILE))?,
            None => Self::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides on top of file values.
    #[must_use]
    pub fn with_overrides(mut self, o: Overrides) -> Self {
        if let Some(dir) = o.input_dir {
            self.input_dir = dir;
        }
        if let Some(dir) = o.summary_dir {
            self.summary_dir = dir;
        }
        if let Some(dir) = o.labeling_dir {
            self.labeling_dir = dir;
        }
        if let Some(minutes) = o.time_limit_minutes {
            self.time_limit_minutes = minutes;
        }
        if let Some(workers) = o.workers {
            self.workers = workers;
        }
        if o.no_tighten {
            self.tighten_bounds = false;
        }
        if o.no_fallback {
            self.greedy_fallback = false;
        }
        self
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `Config` on a negative or non-finite time limit, zero workers
    /// or an empty extension.
    pub fn validate(&self) -> Result<()> {
        if !self.time_limit_minutes.is_finite() || self.time_limit_minutes < 0.0 {
            return Err(LabelError::Config(format!(
                "time_limit_minutes must be a non-negative number, got {}",
                self.time_limit_minutes
            )));
        }
        if self.workers == 0 {
            return Err(LabelError::Config("workers must be at least 1".to_string()));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(LabelError::Config("extension must not be empty".to_string()));
        }
        Ok(())
    }

    /// Per-instance solver budget.
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_limit_minutes * 60.0).unwrap_or(Duration::MAX)
    }

    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            tighten_bounds: self.tighten_bounds,
        }
    }

    #[must_use]
    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            time_limit: self.time_limit(),
            greedy_fallback: self.greedy_fallback,
        }
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        io::to_toml(self)
    }
}
