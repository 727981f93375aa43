//! Order Lifecycle from Configuration
//!
//! This example loads a machine from JSON instead of code.
//!
//! Key concepts:
//! - States and transitions as data
//! - Opt-in validation that reports every configuration issue at once
//! - The same engine reused for an unrelated domain
//!
//! Run with: cargo run --example order_lifecycle

use statecraft::builder::MachineConfig;
use statecraft::state_enum;
use stillwater::validation::Validation;

state_enum! {
    enum OrderState {
        Placed => "placed",
        Paid => "paid",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
    final: [Delivered, Cancelled]
}

const CONFIG: &str = r#"{
    "states": ["placed", "paid", "shipped", "delivered", "cancelled"],
    "transitions": {
        "placed": ["paid", "cancelled"],
        "paid": ["shipped", "cancelled"],
        "shipped": ["delivered"]
    },
    "initial": "placed"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Order Lifecycle ===\n");

    let mut machine = MachineConfig::<OrderState>::from_json(CONFIG)?.into_machine()?;
    machine.on(OrderState::Shipped, |_| {
        println!("  [Notify] Your order is on its way");
        Ok(())
    });

    for next in [OrderState::Paid, OrderState::Shipped, OrderState::Delivered] {
        machine.transition_to(next)?;
        println!("Order is now {}", next);
    }
    println!("Final: {}\n", machine.is_final());

    println!("Validating a broken configuration:");
    let mut broken = MachineConfig::<OrderState>::from_json(CONFIG)?;
    broken.states.retain(|s| *s != OrderState::Cancelled && *s != OrderState::Shipped);
    let broken = broken.into_machine()?;

    match broken.validate() {
        Validation::Success(_) => println!("  No issues"),
        Validation::Failure(issues) => {
            for issue in issues.iter() {
                println!("  - {}", issue);
            }
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
