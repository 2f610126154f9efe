use clap::Parser;
use colored::Colorize;
use l321_core::cli::{self, Cli};
use l321_core::error::LabelError;
use l321_core::exit::L321Exit;
use l321_core::logging;

fn main() -> L321Exit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            e.downcast_ref::<LabelError>()
                .map_or(L321Exit::Error, L321Exit::from)
        }
    }
}
