//! Generic builder shared by every drink family.

use crate::core::{Coffee, Product, Tea};

/// Builder for coffee.
pub type CoffeeBuilder = DrinkBuilder<Coffee>;

/// Builder for tea.
pub type TeaBuilder = DrinkBuilder<Tea>;

/// Holds at most one in-progress product of family `P`.
///
/// Setters called while nothing is held are silently ignored, so a builder
/// can be probed before a director assigns it an instance. `build()` hands
/// back a copy of the held product and leaves the builder untouched; the
/// caller owns the reset/build lifecycle.
#[derive(Clone, Debug)]
pub struct DrinkBuilder<P: Product> {
    drink: Option<P>,
}

impl<P: Product> DrinkBuilder<P> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { drink: None }
    }

    /// Discard any held product.
    pub fn reset(&mut self) {
        self.drink = None;
    }

    /// Place a fresh product into the builder, replacing any held one.
    pub fn assign(&mut self, drink: P) {
        self.drink = Some(drink);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(drink) = self.drink.as_mut() {
            drink.set_name(name.into());
        }
    }

    pub fn set_temperature(&mut self, temperature: i32) {
        if let Some(drink) = self.drink.as_mut() {
            drink.set_temperature(temperature);
        }
    }

    /// Set the family-specific subtype of the held product.
    pub fn set_kind(&mut self, kind: P::Kind) {
        if let Some(drink) = self.drink.as_mut() {
            drink.set_kind(kind);
        }
    }

    /// Check whether a product is currently held.
    pub fn is_empty(&self) -> bool {
        self.drink.is_none()
    }

    /// Return the held product, if any.
    pub fn build(&self) -> Option<P> {
        self.drink.clone()
    }
}

impl<P: Product> Default for DrinkBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CoffeeKind, Drink, TeaKind};

    #[test]
    fn new_builder_is_empty() {
        let builder = CoffeeBuilder::new();

        assert!(builder.is_empty());
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn setters_without_product_are_noops() {
        let mut builder = TeaBuilder::new();
        builder.set_name("Ghost Tea");
        builder.set_temperature(99);
        builder.set_kind(TeaKind::Green);

        assert!(builder.is_empty());
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn setters_mutate_assigned_product() {
        let mut builder = CoffeeBuilder::new();
        builder.assign(Coffee::new(CoffeeKind::Latte));
        builder.set_name("Iced Latte");
        builder.set_temperature(4);

        let coffee = builder.build().unwrap();
        assert_eq!(coffee.name(), "Iced Latte");
        assert_eq!(coffee.temperature(), 4);
        assert_eq!(coffee.kind(), CoffeeKind::Latte);
    }

    #[test]
    fn build_does_not_reset() {
        let mut builder = TeaBuilder::new();
        builder.assign(Tea::new(TeaKind::English));

        let first = builder.build();
        let second = builder.build();

        assert!(first.is_some());
        assert_eq!(first, second);
        assert!(!builder.is_empty());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut builder = CoffeeBuilder::new();
        builder.assign(Coffee::new(CoffeeKind::Black));

        builder.reset();
        assert_eq!(builder.build(), None);

        builder.reset();
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn consecutive_resets_leave_nothing_to_build() {
        let mut builder = TeaBuilder::new();
        builder.assign(Tea::new(TeaKind::Green));

        builder.reset();
        builder.reset();

        assert_eq!(builder.build(), None);
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn setters_after_reset_are_noops() {
        let mut builder = CoffeeBuilder::new();
        builder.assign(Coffee::new(CoffeeKind::Black));
        builder.reset();
        builder.set_name("Too Late");

        assert_eq!(builder.build(), None);
    }
}
