//! Serializable gate configuration.

use crate::builder::error::ConfigError;
use crate::core::Condition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Startup configuration for a gate.
///
/// `conditions` are declared first, then `commands` are applied in order,
/// so a command may override a condition of the same identifier.
///
/// # Example
///
/// ```rust
/// use safegate::builder::GateConfig;
/// use safegate::core::{Condition, Target};
///
/// let config = GateConfig::from_json(
///     r#"{
///         "name": "interlock",
///         "conditions": {
///             "estop": { "guarded": "*", "trigger": "estop", "required_state": 0 }
///         },
///         "commands": ["set condition_a=arm,sensor,2"]
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.name.as_deref(), Some("interlock"));
/// assert_eq!(config.conditions["estop"].guarded, Target::Any);
/// assert_eq!(config.commands.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub conditions: BTreeMap<String, Condition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
}

impl GateConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
