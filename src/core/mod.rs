//! Core data model and the boundary to the host's module registry.
//!
//! - Modules via the `Module` trait (name and integer state)
//! - Read-only registry lookups via `ModuleRegistry`
//! - Conditions as explicit `(guarded, trigger, required_state)` records

mod condition;
mod module;
mod registry;

pub use condition::{Condition, Target, WILDCARD};
pub use module::{BasicModule, Module};
pub use registry::ModuleRegistry;
