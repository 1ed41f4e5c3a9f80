//! Builder for assembling drinks.
//!
//! One generic `DrinkBuilder` serves every family; `CoffeeBuilder` and
//! `TeaBuilder` are aliases rather than separate types.

mod drink;

pub use drink::{CoffeeBuilder, DrinkBuilder, TeaBuilder};
