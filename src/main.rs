// file: src/main.rs
// version: 1.0.0
// guid: dac7daee-7808-41e6-aef4-d2274960a2b0

//! ZFS install configuration tool - main entry point

use clap::Parser;
use zfs_install_config::{
    cli::{args::Cli, commands},
    logging::logger,
    Result,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    commands::execute(&cli)
}
