//! Testing infrastructure for runscan integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated input, output and data directories plus CLI execution
//! - `fixtures`: synthetic capture streams in both on-disk formats
//! - `assertions`: checks over published JSON outputs

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::CaptureBuilder;
pub use world::{CliResult, TestWorld};
