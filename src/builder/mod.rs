//! Builder API and startup configuration for gates.
//!
//! Hosts that know their conditions up front can declare them with
//! [`SafetyBuilder`] or load them from JSON with [`GateConfig`] instead of
//! replaying command lines one at a time.

pub mod config;
pub mod error;
pub mod safety;

pub use config::GateConfig;
pub use error::{BuildError, ConfigError};
pub use safety::SafetyBuilder;
