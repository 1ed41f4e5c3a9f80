//! Barista Machine
//!
//! This example serves the same menu from both drink families.
//!
//! Key concepts:
//! - Swapping the abstract factory changes every drink the machine makes
//! - Decorators stack add-ons without touching the base drink
//! - Orders typed as text are validated before serving
//!
//! Run with: RUST_LOG=debug cargo run --example barista

use barista::decorator::Addon;
use barista::factory::{DrinkFactory, Family};
use barista::machine::BaristaMachine;
use barista::order::{DrinkChoice, OrderRequest};
use tracing_subscriber::EnvFilter;

fn main() -> barista::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for family in Family::ALL {
        println!("=== {family} Factory ===");

        let factory: Box<dyn DrinkFactory> = Box::new(family.factory());
        let machine = BaristaMachine::new(factory);

        println!("{}", machine.serve_coffee()?);
        println!("{}", machine.serve_coffee_with_milk()?);
        println!("{}", machine.serve_tea()?);

        let receipt = machine.serve(DrinkChoice::Tea, &[Addon::Sugar, Addon::VanillaSyrup])?;
        println!("{} (receipt {})\n", receipt.description, receipt.id);
    }

    println!("=== Orders ===");
    let machine = BaristaMachine::new(Family::Classic.factory());

    let good = OrderRequest::new("classic", "coffee").addon("milk").addon("sugar");
    let receipt = machine.serve_order(&good.to_order()?)?;
    println!("{}", serde_json::to_string_pretty(&receipt).unwrap_or_default());

    let bad = OrderRequest::new("keto", "juice").addon("honey");
    match bad.to_order() {
        Ok(order) => println!("Unexpectedly accepted {order:?}"),
        Err(err) => println!("{err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
