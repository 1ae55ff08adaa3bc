//! Reasons a gate denies an action.

use thiserror::Error;

/// A condition that currently blocks a module.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateViolation {
    #[error("Condition {condition}: {trigger} is in state {actual}, requires {required}")]
    StateMismatch {
        condition: String,
        trigger: String,
        required: i32,
        actual: i32,
    },

    #[error("Condition {condition}: trigger module {trigger} is not registered")]
    UnknownTrigger { condition: String, trigger: String },
}

impl GateViolation {
    /// Identifier of the violated condition.
    pub fn condition(&self) -> &str {
        match self {
            Self::StateMismatch { condition, .. } | Self::UnknownTrigger { condition, .. } => {
                condition
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_condition_and_trigger() {
        let mismatch = GateViolation::StateMismatch {
            condition: "a".to_string(),
            trigger: "sensor".to_string(),
            required: 2,
            actual: 3,
        };
        assert_eq!(
            mismatch.to_string(),
            "Condition a: sensor is in state 3, requires 2"
        );
        assert_eq!(mismatch.condition(), "a");

        let unknown = GateViolation::UnknownTrigger {
            condition: "b".to_string(),
            trigger: "lidar".to_string(),
        };
        assert_eq!(
            unknown.to_string(),
            "Condition b: trigger module lidar is not registered"
        );
        assert_eq!(unknown.condition(), "b");
    }
}
