use super::args::{Cli, Commands};
use super::handlers;
use crate::presentation::Console;
use anyhow::{Context, Result};
use runscan_runtime::{Config, resolve_workspace_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let console = Console::stderr(cli.log_level);

    match cli.command {
        Commands::Init { force } => handlers::init::handle(&data_dir, force, &console),

        Commands::Process {
            input,
            output,
            year,
            no_raw,
        } => {
            let mut config = load_config(&data_dir)?;
            if let Some(input) = input {
                config.input_dir = input;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if year.is_some() {
                config.year = year;
            }
            if no_raw {
                config.publish_raw = false;
            }
            handlers::process::handle(config, &console)
        }

        Commands::Inspect { file, format, year } => {
            let config = load_config(&data_dir)?;
            let year = year.unwrap_or_else(|| config.effective_year());
            handlers::inspect::handle(&file, year, format)
        }

        Commands::Stats { runs, day } => {
            let config = load_config(&data_dir)?;
            let runs = runs.unwrap_or_else(|| config.output_dir.join(&config.runs_file));
            handlers::stats::handle(&runs, day.as_deref())
        }

        Commands::Odds {
            split,
            cutoff,
            days,
            runs,
        } => {
            let config = load_config(&data_dir)?;
            let runs = runs.unwrap_or_else(|| config.output_dir.join(&config.runs_file));
            handlers::odds::handle(&runs, split.into(), &cutoff, days)
        }
    }
}

fn load_config(data_dir: &Path) -> Result<Config> {
    let path = Config::path_in(data_dir);
    Config::load_from(&path).with_context(|| format!("Failed to load {}", path.display()))
}
