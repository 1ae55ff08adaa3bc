//! Read-only view of the host's module registry.
//!
//! The host owns its modules and keeps mutating their states. The gate only
//! holds a handle implementing [`ModuleRegistry`] and looks states up by name
//! at evaluation time. Shared handles (`Rc<RefCell<_>>`, `Arc<RwLock<_>>`)
//! implement the trait so the host can keep writing while the gate reads.
//! Those handles never block or panic on a conflicting borrow: while the
//! host holds the registry mutably, every lookup misses and the gate denies.

use super::module::Module;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock, TryLockError};

/// Lookup-by-name capability over live modules.
///
/// # Example
///
/// ```rust
/// use safegate::core::{BasicModule, ModuleRegistry};
/// use std::collections::HashMap;
///
/// let mut modules = HashMap::new();
/// modules.insert("sensor".to_string(), BasicModule::new("sensor", 2));
///
/// assert_eq!(modules.state_of("sensor"), Some(2));
/// assert_eq!(modules.state_of("lidar"), None);
/// ```
pub trait ModuleRegistry {
    /// Current state of the named module, or `None` if it is not registered
    /// or the registry cannot be read right now.
    fn state_of(&self, name: &str) -> Option<i32>;

    fn contains(&self, name: &str) -> bool {
        self.state_of(name).is_some()
    }
}

impl<M: Module, H: BuildHasher> ModuleRegistry for HashMap<String, M, H> {
    fn state_of(&self, name: &str) -> Option<i32> {
        self.get(name).map(Module::state)
    }
}

impl<M: Module> ModuleRegistry for BTreeMap<String, M> {
    fn state_of(&self, name: &str) -> Option<i32> {
        self.get(name).map(Module::state)
    }
}

impl<R: ModuleRegistry + ?Sized> ModuleRegistry for &R {
    fn state_of(&self, name: &str) -> Option<i32> {
        (**self).state_of(name)
    }
}

impl<R: ModuleRegistry + ?Sized> ModuleRegistry for Rc<R> {
    fn state_of(&self, name: &str) -> Option<i32> {
        (**self).state_of(name)
    }
}

impl<R: ModuleRegistry + ?Sized> ModuleRegistry for Arc<R> {
    fn state_of(&self, name: &str) -> Option<i32> {
        (**self).state_of(name)
    }
}

// A registry that cannot be read right now (borrowed mutably, or locked
// by another holder) reports no state, so every condition on it denies.
impl<R: ModuleRegistry + ?Sized> ModuleRegistry for RefCell<R> {
    fn state_of(&self, name: &str) -> Option<i32> {
        self.try_borrow()
            .ok()
            .and_then(|modules| modules.state_of(name))
    }
}

// Poisoned locks are read through: a panicking writer must not leave the
// gate unable to answer.
impl<R: ModuleRegistry + ?Sized> ModuleRegistry for Mutex<R> {
    fn state_of(&self, name: &str) -> Option<i32> {
        match self.try_lock() {
            Ok(modules) => modules.state_of(name),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().state_of(name),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

impl<R: ModuleRegistry + ?Sized> ModuleRegistry for RwLock<R> {
    fn state_of(&self, name: &str) -> Option<i32> {
        match self.try_read() {
            Ok(modules) => modules.state_of(name),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().state_of(name),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}
