//! Textual configuration commands.
//!
//! The gate is configured one line at a time:
//!
//! ```text
//! set condition_<name>=<guardedModule>,<triggerModule>,<requiredState>
//! ```
//!
//! Parsing is deliberately tolerant: a malformed state parses as `0` instead
//! of rejecting the line. Only an unknown verb or a key without the
//! `condition_` prefix rejects the command.

pub mod error;
pub mod parse;

pub use error::CommandError;
pub use parse::{cut_first_word, parse_state, Command, CONDITION_PREFIX};
