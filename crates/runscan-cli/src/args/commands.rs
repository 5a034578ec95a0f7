use crate::types::{OutputFormat, SplitArg};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default config file to the data directory")]
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },

    #[command(about = "Rebuild runs.json, live.json and the manifest from all captures")]
    Process {
        #[arg(long, help = "Capture directory (overrides config)")]
        input: Option<PathBuf>,

        #[arg(long, help = "Publish directory (overrides config)")]
        output: Option<PathBuf>,

        #[arg(long, help = "Year of the historical file names (overrides config)")]
        year: Option<i32>,

        #[arg(long, help = "Do not copy historical captures to <output>/raw")]
        no_raw: bool,
    },

    #[command(about = "Run one capture file through the pipeline and print its runs")]
    Inspect {
        file: PathBuf,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        #[arg(long, help = "Year of a historical file name (overrides config)")]
        year: Option<i32>,
    },

    #[command(about = "Counts and pacing for one day, plus overall odds")]
    Stats {
        #[arg(long, help = "Published runs file (default: <output>/<runs_file>)")]
        runs: Option<PathBuf>,

        #[arg(long, help = "Date as written in the runs file, e.g. \"Feb 03\" (default: latest)")]
        day: Option<String>,
    },

    #[command(about = "Chance of reaching a split under a cutoff within some days")]
    Odds {
        #[arg(long)]
        split: SplitArg,

        #[arg(long, help = "Cutoff time as MM:SS")]
        cutoff: String,

        #[arg(long, default_value = "7")]
        days: u32,

        #[arg(long, help = "Published runs file (default: <output>/<runs_file>)")]
        runs: Option<PathBuf>,
    },
}
