//! CLI parse: clap types for the console. No behavior; definitions only.
//!
//! Every operation is reached through the interactive menu, so the command
//! line carries only logging flags.

use clap::Parser;

/// Tether - interactive console for Android devices over the debug bridge
#[derive(Parser)]
#[command(name = "tether")]
#[command(about = "Interactive console for Android devices over the debug bridge")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging (default: off)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Silence all logging
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
