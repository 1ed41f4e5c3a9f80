//! Drink model.
//!
//! This module contains the products the pipeline assembles:
//! - The `Drink` capability every beverage and decorator exposes
//! - The `Product` and `Variant` traits a builder works against
//! - The coffee and tea families with their closed subtype enums
//!
//! Nothing in here performs I/O. Products are plain values created fresh
//! for every request.

mod macros;

mod coffee;
mod drink;
mod tea;

pub use coffee::{Coffee, CoffeeKind};
pub use drink::{Defaults, Drink, Product, Variant};
pub use tea::{Tea, TeaKind};
