//! Gate Configuration
//!
//! This example loads a gate from JSON, rebuilds it from its own export,
//! and shows how a bad command line fails the build.
//!
//! Key concepts:
//! - `GateConfig` conditions and command lines
//! - `SafetyBuilder` for up-front configuration
//! - `Safety::commands` to list the active conditions as text
//!
//! Run with: cargo run --example config_loading

use safegate::core::{BasicModule, Module};
use safegate::{GateConfig, SafetyBuilder};
use std::collections::HashMap;

const CONFIG: &str = r#"{
    "name": "interlock",
    "conditions": {
        "estop": { "guarded": "*", "trigger": "estop", "required_state": 0 }
    },
    "commands": [
        "set condition_gripper=arm,gripper,2"
    ]
}"#;

fn main() {
    println!("=== Gate Configuration Example ===\n");

    let modules = HashMap::from([
        ("estop".to_string(), BasicModule::new("estop", 0)),
        ("gripper".to_string(), BasicModule::new("gripper", 2)),
    ]);

    let config = match GateConfig::from_json(CONFIG) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("could not load configuration: {error}");
            return;
        }
    };

    let safety = match SafetyBuilder::new(&modules).config(config).build() {
        Ok(safety) => safety,
        Err(error) => {
            eprintln!("could not build gate: {error}");
            return;
        }
    };

    println!("Gate '{}' with {} conditions:", safety.name(), safety.len());
    for command in safety.commands() {
        println!("  {command}");
    }
    println!("  arm permitted: {}\n", safety.check_name("arm"));

    println!("Exported configuration:");
    match safety.export().to_json() {
        Ok(json) => println!("{json}\n"),
        Err(error) => eprintln!("could not export configuration: {error}"),
    }

    println!("Building with a rejected line:");
    match SafetyBuilder::new(&modules)
        .command("set condition_a=arm,gripper,2")
        .command("set speed=5")
        .build()
    {
        Ok(_) => println!("  unexpectedly built"),
        Err(error) => println!("  {error}"),
    }
}
