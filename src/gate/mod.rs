//! The safety gate: condition registry plus gate evaluator.
//!
//! Conditions are declared through textual commands (see [`crate::command`])
//! and evaluated against the live states in the host's module registry.
//! Evaluation fails closed: a trigger module missing from the registry
//! denies every module the condition applies to.
//!
//! # Example
//!
//! ```rust
//! use safegate::core::BasicModule;
//! use safegate::gate::Safety;
//! use std::cell::RefCell;
//! use std::collections::HashMap;
//! use std::rc::Rc;
//!
//! let modules = Rc::new(RefCell::new(HashMap::from([
//!     ("arm".to_string(), BasicModule::new("arm", 1)),
//!     ("sensor".to_string(), BasicModule::new("sensor", 2)),
//! ])));
//!
//! let mut safety = Safety::new(Rc::clone(&modules));
//! safety.handle_command("set condition_a=arm,sensor,2").unwrap();
//!
//! assert!(safety.check_name("arm"));
//!
//! modules.borrow_mut().get_mut("sensor").unwrap().set_state(3);
//! assert!(!safety.check_name("arm"));
//! ```

pub mod safety;
pub mod violations;

pub use safety::{Safety, DEFAULT_NAME};
pub use violations::GateViolation;
