//! Tether CLI Binary
//!
//! Interactive console for Android devices over the debug bridge.

use clap::Parser;
use std::process;
use tether::cli::{self, Cli};
use tether::logging::{init_logging, LoggingConfig};
use tether::session::Session;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = LoggingConfig::from_flags(
        cli.verbose,
        cli.quiet,
        cli.log_level.as_deref(),
        cli.log_format.as_deref(),
    );

    // Initialize logging early
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Tether console starting");

    // The debug bridge is required; without it there is nothing to drive.
    let session = match Session::resolve() {
        Ok(session) => session,
        Err(e) => {
            error!("Tool resolution failed: {}", e);
            eprintln!("{}", cli::format_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&session) {
        error!("Console stopped: {}", e);
        eprintln!("{}", cli::format_error(&e));
        process::exit(1);
    }

    info!("Tether console exiting");
}
