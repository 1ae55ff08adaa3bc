//! Condition records held by the gate.

use crate::command::{cut_first_word, parse_state};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire form of [`Target::Any`].
pub const WILDCARD: &str = "*";

/// The module (or modules) a condition restricts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Target {
    /// Applies to every module (`*`).
    Any,
    /// Applies only to the named module.
    Module(String),
}

impl Target {
    /// Whether a condition with this target applies to the named module.
    ///
    /// ```rust
    /// use safegate::core::Target;
    ///
    /// assert!(Target::Any.applies_to("arm"));
    /// assert!(Target::from("arm").applies_to("arm"));
    /// assert!(!Target::from("arm").applies_to("wheels"));
    /// ```
    pub fn applies_to(&self, module: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Module(name) => name == module,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => WILDCARD,
            Self::Module(name) => name,
        }
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        if value == WILDCARD {
            Self::Any
        } else {
            Self::Module(value.to_string())
        }
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        if value == WILDCARD {
            Self::Any
        } else {
            Self::Module(value)
        }
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        match target {
            Target::Any => WILDCARD.to_string(),
            Target::Module(name) => name,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule gating the actions of `guarded` on the state of `trigger`.
///
/// The condition is satisfied while the trigger module's state equals
/// `required_state`.
///
/// # Example
///
/// ```rust
/// use safegate::core::{Condition, Target};
///
/// let condition = Condition::new("arm", "sensor", 2);
/// assert_eq!(condition.guarded, Target::Module("arm".to_string()));
/// assert_eq!(condition.to_string(), "arm,sensor,2");
///
/// let parsed = Condition::from_triple("*,estop,0");
/// assert_eq!(parsed.guarded, Target::Any);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    pub guarded: Target,
    pub trigger: String,
    pub required_state: i32,
}

impl Condition {
    pub fn new(
        guarded: impl Into<Target>,
        trigger: impl Into<String>,
        required_state: i32,
    ) -> Self {
        Self {
            guarded: guarded.into(),
            trigger: trigger.into(),
            required_state,
        }
    }

    /// Parse a `guarded,trigger,state` triple.
    ///
    /// Parsing never fails: missing fields become empty names and a
    /// malformed state becomes `0`. An empty trigger names no module, so the
    /// condition fails closed wherever it applies.
    pub fn from_triple(value: &str) -> Self {
        let (guarded, rest) = cut_first_word(value, ',');
        let (trigger, rest) = cut_first_word(rest, ',');
        let (state, _) = cut_first_word(rest, ',');

        Self::new(guarded, trigger, parse_state(state))
    }

    /// Whether this condition restricts the named module.
    pub fn applies_to(&self, module: &str) -> bool {
        self.guarded.applies_to(module)
    }

    /// Whether a trigger state satisfies this condition.
    pub fn is_satisfied_by(&self, trigger_state: i32) -> bool {
        trigger_state == self.required_state
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.guarded, self.trigger, self.required_state)
    }
}
