//! Error types for the device bridge console.
//!
//! A tool exiting non-zero is not an error here: that is an ordinary
//! [`CommandResult`](crate::runner::CommandResult) carrying the tool's own
//! diagnostic. These variants cover everything else a handler can hit. All
//! of them are rendered at the menu boundary and none ends the session
//! except a failed prompt read.

use thiserror::Error;

/// Console errors
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{tool} not found. Searched the execution path and: {searched}")]
    ToolNotFound { tool: String, searched: String },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read input: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
