mod commands;

pub use commands::*;

use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser)]
#[command(name = "runscan")]
#[command(about = "Rebuild speedrun attempts and splits from OCR captures", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Where config.toml lives (default: $RUNSCAN_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
