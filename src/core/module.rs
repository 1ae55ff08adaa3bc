//! The module capability consumed by the gate.
//!
//! The gate never needs more from a host module than its name and its
//! current integer state code. What a state code means is up to the host.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// A named component carrying an integer state code.
///
/// # Example
///
/// ```rust
/// use safegate::core::Module;
///
/// struct Arm {
///     homed: bool,
/// }
///
/// impl Module for Arm {
///     fn name(&self) -> &str {
///         "arm"
///     }
///
///     fn state(&self) -> i32 {
///         i32::from(self.homed)
///     }
/// }
///
/// let arm = Arm { homed: true };
/// assert_eq!(arm.name(), "arm");
/// assert_eq!(arm.state(), 1);
/// ```
pub trait Module {
    /// Unique name of the module within its registry.
    fn name(&self) -> &str;

    /// Current state code.
    fn state(&self) -> i32;
}

impl<M: Module + ?Sized> Module for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn state(&self) -> i32 {
        (**self).state()
    }
}

impl<M: Module + ?Sized> Module for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn state(&self) -> i32 {
        (**self).state()
    }
}

impl<M: Module + ?Sized> Module for Rc<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn state(&self) -> i32 {
        (**self).state()
    }
}

impl<M: Module + ?Sized> Module for Arc<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn state(&self) -> i32 {
        (**self).state()
    }
}

/// Plain module record for hosts that only track a name and a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicModule {
    pub name: String,
    pub state: i32,
}

impl BasicModule {
    pub fn new(name: impl Into<String>, state: i32) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }

    pub fn set_state(&mut self, state: i32) {
        self.state = state;
    }
}

impl Module for BasicModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> i32 {
        self.state
    }
}
