//! Errors raised while configuring a gate.

use crate::command::CommandError;
use thiserror::Error;

/// Errors that can occur when building a gate.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid command {line:?}: {source}")]
    InvalidCommand {
        line: String,
        #[source]
        source: CommandError,
    },
}

/// Errors that can occur when reading or writing a gate configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid gate configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
