// src/cli/handlers.rs
use crate::batch::{self, graph_name, label_graph};
use crate::config::{Config, Overrides};
use crate::exit::L321Exit;
use crate::graph::{edgelist, DistanceMap};
use crate::model;
use crate::reporting::{self, tables};
use crate::solve::HighsSolver;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Arguments for the run command.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub overrides: Overrides,
    pub json: bool,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load(path).context("Failed to load configuration")
}

fn start_solver(threads: Option<usize>) -> Result<HighsSolver> {
    let solver = HighsSolver::new()?;
    Ok(match threads {
        Some(t) => solver.with_threads(t),
        None => solver,
    })
}

/// Handles the run command.
///
/// # Errors
/// Returns error if configuration is invalid, the solver cannot start or
/// the input directory cannot be listed.
pub fn handle_run(config_path: Option<&Path>, args: RunArgs) -> Result<L321Exit> {
    let config = load_config(config_path)?.with_overrides(args.overrides);
    config.validate()?;

    // Concurrent graphs each get a single-threaded solver.
    let solver = start_solver((config.workers > 1).then_some(1))?;

    let json = args.json;
    let report = batch::run(&config, &solver, |cur, total, outcome| {
        if !json {
            println!("{}", reporting::format_progress(cur, total, outcome));
        }
    })
    .with_context(|| format!("Batch over {} failed", config.input_dir.display()))?;

    if json {
        println!("{}", reporting::format_json(&report.outcomes, &report.summary));
    } else {
        print!("{}", reporting::format_summary(&report.summary));
    }

    if report.summary.failed > 0 || report.summary.infeasible > 0 {
        Ok(L321Exit::InstanceFailures)
    } else {
        Ok(L321Exit::Success)
    }
}

/// Handles the label command.
///
/// # Errors
/// Returns error if the file cannot be parsed or the solver fails.
pub fn handle_label(
    config_path: Option<&Path>,
    file: &Path,
    time_limit: Option<f64>,
    output: Option<&Path>,
) -> Result<L321Exit> {
    let config = load_config(config_path)?.with_overrides(Overrides {
        time_limit_minutes: time_limit,
        ..Overrides::default()
    });
    config.validate()?;

    let graph = edgelist::load(file)?;
    let solver = start_solver(None)?;
    let name = graph_name(file);
    let (result, labeling) = label_graph(
        &name,
        &graph,
        &config.build_options(),
        &solver,
        &config.solve_options(),
    )?;

    print!("{}", reporting::format_labeling(&graph, &labeling));

    if let Some(out) = output {
        if labeling.status.has_assignment() {
            tables::write_labeling(out, &graph, &labeling)?;
            println!("{} {}", "Wrote".green(), out.display());
        } else {
            println!("{}", "No labeling to write.".yellow());
        }
    }

    Ok(if result.status.has_assignment() {
        L321Exit::Success
    } else {
        L321Exit::InstanceFailures
    })
}

/// Handles the inspect command.
///
/// # Errors
/// Returns error if the file cannot be parsed.
pub fn handle_inspect(config_path: Option<&Path>, file: &Path) -> Result<L321Exit> {
    let config = load_config(config_path)?;
    let graph = edgelist::load(file)?;
    let distances = DistanceMap::compute(&graph);
    let built = model::build(&graph, &distances, &config.build_options());

    print!(
        "{}",
        reporting::format_inspect(&graph_name(file), &graph, &distances, &built.stats())
    );
    Ok(L321Exit::Success)
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the config cannot be loaded or rendered.
pub fn handle_config(config_path: Option<&Path>) -> Result<L321Exit> {
    let config = load_config(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(L321Exit::Success)
}
