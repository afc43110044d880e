// file: src/lib.rs
// version: 1.0.0
// guid: a8b844f4-ab69-4a04-842a-9692e3b6c946

//! # ZFS Install Config
//!
//! Configuration loading, validation, and progress reporting for a ZFS
//! rescue installation workflow.
//!
//! Two independent pieces: a typed configuration model loaded from
//! `key=value` files with environment variable overrides, and a console
//! progress reporter with step timing, a run summary, and a JSON status
//! snapshot for script integration.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod reporter;
pub mod steps;
pub mod utils;

pub use error::{ConfigError, Result};

/// Version information for the tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
