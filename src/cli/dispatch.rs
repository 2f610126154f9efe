//! Routes parsed commands to their handlers.

use super::{
    args::{Cli, Commands},
    handlers::{handle_config, handle_inspect, handle_label, handle_run, RunArgs},
};
use crate::config::Overrides;
use crate::exit::L321Exit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: Cli) -> Result<L321Exit> {
    let config = cli.config.as_deref();
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        return Ok(L321Exit::Success);
    };

    match command {
        Commands::Run {
            input,
            summary_dir,
            labeling_dir,
            time_limit,
            workers,
            no_tighten,
            no_fallback,
            json,
        } => {
            let overrides = Overrides {
                input_dir: input,
                summary_dir,
                labeling_dir,
                time_limit_minutes: time_limit,
                workers,
                no_tighten,
                no_fallback,
            };
            handle_run(config, RunArgs { overrides, json })
        }
        Commands::Label {
            file,
            time_limit,
            output,
        } => handle_label(config, &file, time_limit, output.as_deref()),
        Commands::Inspect { file } => handle_inspect(config, &file),
        Commands::Config => handle_config(config),
    }
}
