//! Command rejection errors.

use thiserror::Error;

/// Reasons a configuration command is rejected.
///
/// A rejected command never mutates the condition registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("Unknown setting: {key}")]
    UnknownSetting { key: String },
}
