//! Builder for configuring a gate before it starts answering checks.

use crate::builder::config::GateConfig;
use crate::builder::error::BuildError;
use crate::command::Command;
use crate::core::{Condition, ModuleRegistry};
use crate::gate::{Safety, DEFAULT_NAME};

enum Declaration {
    Condition(String, Condition),
    Command(String),
}

/// Builder for creating a [`Safety`] gate.
///
/// Conditions and commands are applied in the order they were added, with
/// the last declaration of an identifier winning. Unlike
/// [`Safety::handle_command`], a rejected command fails the build.
///
/// # Example
///
/// ```rust
/// use safegate::builder::SafetyBuilder;
/// use safegate::core::{BasicModule, Condition};
/// use std::collections::HashMap;
///
/// let modules = HashMap::from([
///     ("sensor".to_string(), BasicModule::new("sensor", 2)),
///     ("estop".to_string(), BasicModule::new("estop", 0)),
/// ]);
///
/// let safety = SafetyBuilder::new(&modules)
///     .condition("estop", Condition::new("*", "estop", 0))
///     .command("set condition_a=arm,sensor,2")
///     .build()
///     .unwrap();
///
/// assert_eq!(safety.len(), 2);
/// assert!(safety.check_name("arm"));
/// ```
pub struct SafetyBuilder<R: ModuleRegistry> {
    modules: R,
    name: Option<String>,
    declarations: Vec<Declaration>,
}

impl<R: ModuleRegistry> SafetyBuilder<R> {
    pub fn new(modules: R) -> Self {
        Self {
            modules,
            name: None,
            declarations: Vec::new(),
        }
    }

    /// Set the name the gate reports as a module
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a condition
    pub fn condition(mut self, id: impl Into<String>, condition: Condition) -> Self {
        self.declarations
            .push(Declaration::Condition(id.into(), condition));
        self
    }

    /// Add a configuration line
    pub fn command(mut self, line: impl Into<String>) -> Self {
        self.declarations.push(Declaration::Command(line.into()));
        self
    }

    /// Add several configuration lines
    pub fn commands<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.declarations
            .extend(lines.into_iter().map(|line| Declaration::Command(line.into())));
        self
    }

    /// Apply a loaded configuration
    pub fn config(mut self, config: GateConfig) -> Self {
        if let Some(name) = config.name {
            self.name = Some(name);
        }
        self.declarations.extend(
            config
                .conditions
                .into_iter()
                .map(|(id, condition)| Declaration::Condition(id, condition)),
        );
        self.commands(config.commands)
    }

    /// Build the gate.
    /// Returns an error for the first command that does not parse.
    pub fn build(self) -> Result<Safety<R>, BuildError> {
        let name = self.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
        let mut safety = Safety::with_name(name, self.modules);

        for declaration in self.declarations {
            match declaration {
                Declaration::Condition(id, condition) => {
                    safety.set_condition(id, condition);
                }
                Declaration::Command(line) => match Command::parse(&line) {
                    Ok(Command::SetCondition { id, condition }) => {
                        safety.set_condition(id, condition);
                    }
                    Err(source) => return Err(BuildError::InvalidCommand { line, source }),
                },
            }
        }

        Ok(safety)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandError;
    use crate::core::{BasicModule, Module};
    use std::collections::HashMap;

    fn modules() -> HashMap<String, BasicModule> {
        HashMap::from([("sensor".to_string(), BasicModule::new("sensor", 2))])
    }

    #[test]
    fn builder_defaults_to_empty_gate() {
        let modules = modules();
        let safety = SafetyBuilder::new(&modules).build().unwrap();

        assert!(safety.is_empty());
        assert_eq!(safety.name(), DEFAULT_NAME);
    }

    #[test]
    fn builder_sets_name() {
        let modules = modules();
        let safety = SafetyBuilder::new(&modules)
            .name("interlock")
            .build()
            .unwrap();

        assert_eq!(safety.name(), "interlock");
    }

    #[test]
    fn later_declarations_win() {
        let modules = modules();
        let safety = SafetyBuilder::new(&modules)
            .command("set condition_a=arm,sensor,1")
            .condition("a", Condition::new("arm", "sensor", 2))
            .build()
            .unwrap();

        assert_eq!(safety.condition("a"), Some(&Condition::new("arm", "sensor", 2)));
        assert!(safety.check_name("arm"));
    }

    #[test]
    fn invalid_command_fails_build() {
        let modules = modules();
        let result = SafetyBuilder::new(&modules)
            .commands(["set condition_a=arm,sensor,2", "set speed=5"])
            .build();

        match result {
            Err(BuildError::InvalidCommand { line, source }) => {
                assert_eq!(line, "set speed=5");
                assert_eq!(
                    source,
                    CommandError::UnknownSetting {
                        key: "speed".to_string()
                    }
                );
            }
            Ok(_) => panic!("Expected build error, got gate"),
        }
    }

    #[test]
    fn config_applies_conditions_then_commands() {
        let config = GateConfig::from_json(
            r#"{
                "name": "interlock",
                "conditions": { "a": { "guarded": "arm", "trigger": "sensor", "required_state": 1 } },
                "commands": ["set condition_a=arm,sensor,2", "set condition_b=*,sensor,2"]
            }"#,
        )
        .unwrap();

        let modules = modules();
        let safety = SafetyBuilder::new(&modules).config(config).build().unwrap();

        assert_eq!(safety.name(), "interlock");
        assert_eq!(safety.len(), 2);
        assert_eq!(safety.condition("a"), Some(&Condition::new("arm", "sensor", 2)));
        assert!(safety.check_name("arm"));
    }

    #[test]
    fn exported_config_rebuilds_equivalent_gate() {
        let modules = modules();
        let original = SafetyBuilder::new(&modules)
            .name("interlock")
            .command("set condition_a=arm,sensor,2")
            .command("set condition_b=*,lidar,0")
            .build()
            .unwrap();

        let rebuilt = SafetyBuilder::new(&modules)
            .config(original.export())
            .build()
            .unwrap();

        assert_eq!(rebuilt.name(), "interlock");
        assert!(rebuilt.conditions().eq(original.conditions()));
        assert_eq!(rebuilt.check_name("arm"), original.check_name("arm"));
    }
}
