// NOTE: runscan layering
//
// - types:     wire shapes of captures and published runs
// - engine:    pure reconstruction (filter, segment, checkpoints, summaries, odds)
// - providers: capture discovery and loading
// - runtime:   config, pipeline orchestration, publishing
// - cli:       argument parsing, console output
//
// Library crates never print. Progress flows back through callbacks and is
// rendered here, so the same pipeline can run quietly under tests.

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
