//! Robot Interlock
//!
//! This example walks a small robot through a few control cycles while a
//! safety gate decides which modules may act.
//!
//! Key concepts:
//! - Declaring conditions with `set condition_<name>=...` lines
//! - Wildcard conditions that guard every module
//! - Failing closed when a trigger module is missing
//! - Collecting every violation with `evaluate`
//!
//! Run with: cargo run --example interlock

use safegate::core::BasicModule;
use safegate::Safety;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use stillwater::validation::Validation;

const ESTOP_RELEASED: i32 = 0;
const ESTOP_PRESSED: i32 = 1;
const BUMPER_CLEAR: i32 = 0;

fn main() {
    println!("=== Robot Interlock Example ===\n");

    let modules = Rc::new(RefCell::new(HashMap::from([
        ("wheels".to_string(), BasicModule::new("wheels", 0)),
        ("arm".to_string(), BasicModule::new("arm", 0)),
        ("estop".to_string(), BasicModule::new("estop", ESTOP_RELEASED)),
        ("bumper".to_string(), BasicModule::new("bumper", BUMPER_CLEAR)),
    ])));

    let mut safety = Safety::new(Rc::clone(&modules));
    for line in [
        "set condition_estop=*,estop,0",
        "set condition_bumper=wheels,bumper,0",
        "set condition_lidar=arm,lidar,1",
        "set speed=5",
    ] {
        match safety.handle_command(line) {
            Ok(()) => println!("  accepted: {line}"),
            Err(error) => println!("  rejected: {line} ({error})"),
        }
    }
    println!();

    println!("Cycle 1: everything nominal");
    report(&safety, &["wheels", "arm"]);

    println!("Cycle 2: bumper hit");
    set_state(&modules, "bumper", 1);
    report(&safety, &["wheels", "arm"]);

    println!("Cycle 3: emergency stop pressed");
    set_state(&modules, "estop", ESTOP_PRESSED);
    report(&safety, &["wheels", "arm"]);

    println!("Violations for arm:");
    match safety.evaluate_name("arm") {
        Validation::Success(_) => println!("  none"),
        Validation::Failure(violations) => {
            for violation in violations.iter() {
                println!("  - {violation}");
            }
        }
    }
}

fn set_state(modules: &RefCell<HashMap<String, BasicModule>>, name: &str, state: i32) {
    if let Some(module) = modules.borrow_mut().get_mut(name) {
        module.set_state(state);
    }
}

fn report<R: safegate::ModuleRegistry>(safety: &Safety<R>, candidates: &[&str]) {
    for candidate in candidates {
        let verdict = if safety.check_name(candidate) {
            "permitted"
        } else {
            "denied"
        };
        println!("  {candidate}: {verdict}");
    }
    println!();
}
