//! Barista: a pure beverage assembly pipeline
//!
//! Drinks are assembled by composing three classic construction patterns.
//! Nothing in the pipeline performs I/O; every drink is built fresh for the
//! request that asks for it and discarded afterwards.
//!
//! # Core Concepts
//!
//! - **Drink**: The capability every product and decorator exposes via the `Drink` trait
//! - **Builder**: One generic `DrinkBuilder` reused across the coffee and tea families
//! - **Director**: Maps a subtype ("Latte", "Green", ...) to a fully configured drink
//! - **Factory**: Fixes a `Family` (Classic or Diet) and creates its coffee and tea
//! - **Decorator**: Stacks add-ons (milk, sugar, vanilla syrup) onto a finished drink
//! - **Machine**: Thin client sequencing factory calls and decoration
//!
//! # Example
//!
//! ```rust
//! use barista::core::Drink;
//! use barista::decorator::{Addon, AddonDecorator};
//! use barista::factory::{DrinkFactory, FamilyFactory};
//!
//! let factory = FamilyFactory::classic();
//! let coffee = factory.create_coffee().unwrap();
//! assert_eq!(coffee.name(), "Latte Coffee");
//! assert_eq!(coffee.temperature(), 60);
//!
//! let with_milk = AddonDecorator::new(Box::new(coffee), Addon::Milk);
//! assert_eq!(with_milk.name(), "Latte Coffee with Milk");
//! assert_eq!(with_milk.temperature(), 60);
//! ```

pub mod builder;
pub mod core;
pub mod decorator;
pub mod director;
pub mod error;
pub mod factory;
pub mod machine;
pub mod order;

// Re-export commonly used types
pub use builder::{CoffeeBuilder, DrinkBuilder, TeaBuilder};
pub use self::core::{Coffee, CoffeeKind, Drink, Product, Tea, TeaKind, Variant};
pub use decorator::{decorate, Addon, AddonDecorator};
pub use director::Director;
pub use error::{BaristaError, Result};
pub use factory::{DrinkFactory, Family, FamilyFactory};
pub use machine::{BaristaMachine, Receipt};
pub use order::{DrinkChoice, Order, OrderRequest};
