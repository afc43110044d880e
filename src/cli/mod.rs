// file: src/cli/mod.rs
// version: 1.0.0
// guid: dc7c406f-54f5-4ae0-9791-bb8fe2605c68

//! Command line interface for the ZFS install configuration tool

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
