//! Safegate: a safety gating engine for modular control systems
//!
//! A gate decides whether a module may act, based on conditions over the
//! live states of other modules. Conditions are declared with one-line text
//! commands and read module states through the host's registry at the moment
//! of each check. A missing trigger module never permits an action: the gate
//! fails closed.
//!
//! # Core Concepts
//!
//! - **Module**: anything with a name and an integer state code (`Module` trait)
//! - **Condition**: `(guarded, trigger, required_state)`, where `guarded` is a
//!   module name or `*` for every module
//! - **Gate**: `Safety`, holding the conditions and answering `check`
//!
//! # Example
//!
//! ```rust
//! use safegate::core::BasicModule;
//! use safegate::Safety;
//! use std::collections::HashMap;
//!
//! let modules = HashMap::from([
//!     ("arm".to_string(), BasicModule::new("arm", 1)),
//!     ("sensor".to_string(), BasicModule::new("sensor", 2)),
//! ]);
//!
//! let mut safety = Safety::new(&modules);
//! safety.handle_command("set condition_a=arm,sensor,2").unwrap();
//! safety.handle_command("set condition_b=*,estop,0").unwrap();
//!
//! // `estop` is not registered, so every module is denied.
//! assert!(!safety.check(&modules["arm"]));
//!
//! assert!(safety.handle_command("get foo").is_err());
//! ```

pub mod builder;
pub mod command;
pub mod core;
pub mod gate;

// Re-export commonly used types
pub use builder::{GateConfig, SafetyBuilder};
pub use command::{Command, CommandError};
pub use crate::core::{BasicModule, Condition, Module, ModuleRegistry, Target};
pub use gate::{GateViolation, Safety};
