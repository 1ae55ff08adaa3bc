//! End-to-end gate scenarios with a host-owned module registry.

use safegate::core::{BasicModule, Module, ModuleRegistry};
use safegate::{CommandError, Safety, SafetyBuilder};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, RwLock};

type Registry = HashMap<String, BasicModule>;

fn registry(modules: &[(&str, i32)]) -> Registry {
    modules
        .iter()
        .map(|&(name, state)| (name.to_string(), BasicModule::new(name, state)))
        .collect()
}

/// A host module kept outside the registry, gated by name.
struct Gripper;

impl Module for Gripper {
    fn name(&self) -> &str {
        "gripper"
    }

    fn state(&self) -> i32 {
        0
    }
}

#[test]
fn trigger_state_change_revokes_permission() {
    let modules = Rc::new(RefCell::new(registry(&[("arm", 1), ("sensor", 2)])));
    let mut safety = Safety::new(Rc::clone(&modules));

    safety
        .handle_command("set condition_a=arm,sensor,2")
        .unwrap();

    let arm = modules.borrow()["arm"].clone();
    assert!(safety.check(&arm));

    modules
        .borrow_mut()
        .get_mut("sensor")
        .unwrap()
        .set_state(3);
    assert!(!safety.check(&arm));
}

#[test]
fn wildcard_condition_permits_every_module_when_satisfied() {
    let modules = registry(&[("arm", 1), ("sensor", 2)]);
    let mut safety = Safety::new(&modules);

    safety.handle_command("set condition_b=*,sensor,2").unwrap();

    assert!(safety.check(&modules["arm"]));
    assert!(safety.check(&modules["sensor"]));
    assert!(safety.check(&Gripper));
    assert!(safety.check_name("anything"));
}

#[test]
fn unknown_verb_is_reported_and_ignored() {
    let modules = registry(&[]);
    let mut safety = Safety::new(&modules);

    let error = safety.handle_command("get foo").unwrap_err();
    assert_eq!(error.to_string(), "Unknown command: get");
    assert!(safety.is_empty());
}

#[test]
fn unprefixed_setting_is_reported_and_ignored() {
    let modules = registry(&[]);
    let mut safety = Safety::new(&modules);

    let error = safety.handle_command("set speed=5").unwrap_err();
    assert_eq!(
        error,
        CommandError::UnknownSetting {
            key: "speed".to_string()
        }
    );
    assert_eq!(error.to_string(), "Unknown setting: speed");
    assert!(safety.is_empty());
}

#[test]
fn gate_reads_through_lock_shared_with_writer_thread() {
    let modules = Arc::new(RwLock::new(registry(&[("arm", 1), ("estop", 1)])));
    let safety = SafetyBuilder::new(Arc::clone(&modules))
        .command("set condition_estop=*,estop,0")
        .build()
        .unwrap();

    assert!(!safety.check_name("arm"));

    let writer = Arc::clone(&modules);
    std::thread::spawn(move || {
        writer
            .write()
            .unwrap()
            .get_mut("estop")
            .unwrap()
            .set_state(0);
    })
    .join()
    .unwrap();

    assert_eq!(safety.modules().state_of("estop"), Some(0));
    assert!(safety.check_name("arm"));
}

#[test]
fn removing_trigger_module_fails_closed() {
    let modules = Rc::new(RefCell::new(registry(&[("arm", 1), ("sensor", 2)])));
    let mut safety = Safety::new(Rc::clone(&modules));
    safety.handle_command("set condition_a=arm,sensor,2").unwrap();

    assert!(safety.check_name("arm"));

    modules.borrow_mut().remove("sensor");
    assert!(!safety.check_name("arm"));
    assert!(safety.check(&Gripper));
}

#[test]
fn boxed_host_modules_are_supported() {
    let mut modules: HashMap<String, Box<dyn Module>> = HashMap::new();
    modules.insert("sensor".to_string(), Box::new(BasicModule::new("sensor", 2)));

    let mut safety = Safety::new(&modules);
    safety.handle_command("set condition_a=*,sensor,2").unwrap();

    assert!(safety.check(&safety));
    assert!(safety.check(&Gripper));
}

#[test]
fn check_during_host_step_loop_denies_without_panicking() {
    let modules = Rc::new(RefCell::new(registry(&[("arm", 1), ("sensor", 2)])));
    let mut safety = Safety::new(Rc::clone(&modules));
    safety.handle_command("set condition_a=arm,sensor,2").unwrap();

    let mut stepped = Vec::new();
    for module in modules.borrow_mut().values_mut() {
        if safety.check(&*module) {
            stepped.push(module.name.clone());
            module.set_state(module.state + 1);
        }
    }

    // `sensor` has no applicable conditions; `arm` cannot see its trigger
    // while the registry is borrowed for stepping.
    assert_eq!(stepped, vec!["sensor".to_string()]);
    assert_eq!(modules.borrow()["arm"].state, 1);

    assert!(!safety.check_name("arm"));
}
