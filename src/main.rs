// Copyright © 2024 SiteFooter. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # SiteFooter CLI
//!
//! This is the main entry point for the SiteFooter command-line interface.
//! It initializes the logger and dispatches to the selected subcommand.

use anyhow::Context;
use env_logger::Env;
use log::info;
use sitefooter::cli;

/// Initializes `env_logger`, defaulting to a level derived from `-v` flags
/// when `RUST_LOG` is not set.
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .init();
}

/// Parses the command line and runs the selected subcommand.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, a custom template
/// fails to render, or the fragment cannot be written.
fn run() -> Result<(), anyhow::Error> {
    let matches = cli::build().get_matches();
    init_logger(matches.get_count("verbose"));
    info!("Starting SiteFooter v{}", cli::VERSION);

    cli::run(&matches).context("Failed to produce footer")?;
    Ok(())
}

/// The main entry point for the SiteFooter CLI.
fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
