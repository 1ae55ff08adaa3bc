//! Condition registry and gate evaluation.

use crate::builder::GateConfig;
use crate::command::{Command, CommandError};
use crate::core::{Condition, Module, ModuleRegistry};
use crate::gate::violations::GateViolation;
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Module name a gate reports unless configured otherwise.
pub const DEFAULT_NAME: &str = "safety";

/// Safety gate over a shared module registry.
///
/// The gate owns its conditions and reads module states through `R`, a
/// handle to the host's registry. It never mutates the registry. Mutation
/// takes `&mut self` and queries take `&self`, so callers are held to one
/// writer or many readers at a time.
#[derive(Debug)]
pub struct Safety<R: ModuleRegistry> {
    name: String,
    modules: R,
    conditions: BTreeMap<String, Condition>,
}

impl<R: ModuleRegistry> Safety<R> {
    /// Create a gate with no conditions.
    pub fn new(modules: R) -> Self {
        Self::with_name(DEFAULT_NAME, modules)
    }

    /// Create a gate that reports itself under `name`.
    pub fn with_name(name: impl Into<String>, modules: R) -> Self {
        Self {
            name: name.into(),
            modules,
            conditions: BTreeMap::new(),
        }
    }

    /// Apply one configuration line.
    ///
    /// On success the declared condition replaces any condition with the same
    /// identifier. A rejected line is logged as a `warn` event and also
    /// returned; the conditions are left untouched. Hosts that only need the
    /// logged diagnostic may discard the result with `.ok()`.
    ///
    /// ```rust
    /// use safegate::core::BasicModule;
    /// use safegate::Safety;
    /// use std::collections::HashMap;
    ///
    /// let modules: HashMap<String, BasicModule> = HashMap::new();
    /// let mut safety = Safety::new(&modules);
    ///
    /// // Already logged; nothing left for this host to do with the error.
    /// safety.handle_command("get foo").ok();
    /// assert!(safety.is_empty());
    /// ```
    pub fn handle_command(&mut self, raw: &str) -> Result<(), CommandError> {
        match Command::parse(raw) {
            Ok(Command::SetCondition { id, condition }) => {
                self.set_condition(id, condition);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(gate = %self.name, line = raw.trim(), "{error}");
                Err(error)
            }
        }
    }

    /// Declare a condition, returning the one it replaced.
    pub fn set_condition(
        &mut self,
        id: impl Into<String>,
        condition: Condition,
    ) -> Option<Condition> {
        let id = id.into();
        tracing::debug!(
            gate = %self.name,
            condition = %id,
            guarded = %condition.guarded,
            trigger = %condition.trigger,
            required_state = condition.required_state,
            "condition declared"
        );

        let previous = self.conditions.insert(id, condition);
        if let Some(previous) = &previous {
            tracing::debug!(gate = %self.name, replaced = %previous, "condition replaced");
        }
        previous
    }

    /// Whether `candidate` may act right now.
    ///
    /// Every condition guarding the candidate (by name or by `*`) must see
    /// its trigger module in the required state. An unregistered trigger
    /// denies. With no applicable conditions the candidate is permitted.
    pub fn check<M: Module + ?Sized>(&self, candidate: &M) -> bool {
        self.check_name(candidate.name())
    }

    /// [`check`](Self::check) keyed by module name.
    pub fn check_name(&self, module: &str) -> bool {
        for (id, condition) in self.applicable(module) {
            if let Err(violation) = self.inspect(id, condition) {
                tracing::debug!(gate = %self.name, module, %violation, "action denied");
                return false;
            }
        }
        true
    }

    /// Evaluate every applicable condition, collecting all violations.
    ///
    /// Agrees with [`check`](Self::check): the result is a success exactly
    /// when `check` permits the candidate.
    pub fn evaluate<M: Module + ?Sized>(
        &self,
        candidate: &M,
    ) -> Validation<(), NonEmptyVec<GateViolation>> {
        self.evaluate_name(candidate.name())
    }

    /// [`evaluate`](Self::evaluate) keyed by module name.
    pub fn evaluate_name(&self, module: &str) -> Validation<(), NonEmptyVec<GateViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<GateViolation>>> = self
            .applicable(module)
            .map(|(id, condition)| match self.inspect(id, condition) {
                Ok(()) => Validation::success(()),
                Err(violation) => Validation::fail(violation),
            })
            .collect();

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Condition declared under `id`.
    pub fn condition(&self, id: &str) -> Option<&Condition> {
        self.conditions.get(id)
    }

    /// All declared conditions, ordered by identifier.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.conditions
            .iter()
            .map(|(id, condition)| (id.as_str(), condition))
    }

    /// The commands that would recreate the current conditions.
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.conditions
            .iter()
            .map(|(id, condition)| Command::SetCondition {
                id: id.clone(),
                condition: condition.clone(),
            })
    }

    /// Snapshot of the gate's configuration.
    pub fn export(&self) -> GateConfig {
        GateConfig {
            name: Some(self.name.clone()),
            conditions: self.conditions.clone(),
            commands: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// The module registry this gate reads from.
    pub fn modules(&self) -> &R {
        &self.modules
    }

    fn applicable<'a>(
        &'a self,
        module: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a Condition)> + 'a {
        self.conditions
            .iter()
            .filter(move |(_, condition)| condition.applies_to(module))
    }

    fn inspect(&self, id: &str, condition: &Condition) -> Result<(), GateViolation> {
        match self.modules.state_of(&condition.trigger) {
            Some(actual) if condition.is_satisfied_by(actual) => Ok(()),
            Some(actual) => Err(GateViolation::StateMismatch {
                condition: id.to_string(),
                trigger: condition.trigger.clone(),
                required: condition.required_state,
                actual,
            }),
            None => {
                tracing::warn!(
                    gate = %self.name,
                    condition = id,
                    trigger = %condition.trigger,
                    "trigger module state unavailable, failing closed"
                );
                Err(GateViolation::UnknownTrigger {
                    condition: id.to_string(),
                    trigger: condition.trigger.clone(),
                })
            }
        }
    }
}

impl<R: ModuleRegistry> Module for Safety<R> {
    fn name(&self) -> &str {
        &self.name
    }

    // The gate carries no state code of its own.
    fn state(&self) -> i32 {
        0
    }
}
