// file: src/cli/args.rs
// version: 1.0.0
// guid: 8d627d75-aa6d-4b98-ae76-ec8cd685969e

//! Command line argument definitions

use clap::Parser;

#[derive(Parser)]
#[command(name = "zfs-install-config")]
#[command(about = "Configuration loader and validator for ZFS rescue installations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Environment file to load
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,

    /// Validate the host environment after loading the configuration
    #[arg(long)]
    pub validate_env: bool,

    /// Output the configuration as pretty-printed JSON
    #[arg(long, conflicts_with = "export")]
    pub json: bool,

    /// Output the configuration as shell export lines
    #[arg(long)]
    pub export: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}
