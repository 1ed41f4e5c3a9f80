//! Director that turns a subtype into a fully configured drink.
//!
//! The director owns the build sequence: reset the builder, instantiate the
//! product for the requested subtype, hand it to the builder, apply the
//! subtype's defaults through the builder's setters and return the result.
//! The subtype is fixed by instantiation and never set a second time.
//! It never overrides those defaults; callers that want something else call
//! the builder's setters afterwards.

use crate::builder::{CoffeeBuilder, DrinkBuilder, TeaBuilder};
use crate::core::{Coffee, Product, Tea, Variant};
use crate::error::{BaristaError, Result};
use tracing::debug;

/// Stateless director shared by every family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Build a coffee from its symbolic subtype name.
    ///
    /// # Example
    ///
    /// ```
    /// use barista::builder::CoffeeBuilder;
    /// use barista::core::Drink;
    /// use barista::director::Director;
    ///
    /// let mut builder = CoffeeBuilder::new();
    /// let latte = Director::new().build_coffee(&mut builder, "Latte").unwrap();
    /// assert_eq!(latte.name(), "Latte Coffee");
    /// assert_eq!(latte.temperature(), 60);
    ///
    /// assert!(Director::new().build_coffee(&mut builder, "Cappuccino").is_err());
    /// ```
    pub fn build_coffee(&self, builder: &mut CoffeeBuilder, coffee_type: &str) -> Result<Coffee> {
        self.build_named(builder, coffee_type)
    }

    /// Build a tea from its symbolic subtype name.
    pub fn build_tea(&self, builder: &mut TeaBuilder, tea_type: &str) -> Result<Tea> {
        self.build_named(builder, tea_type)
    }

    /// Parse `name` into the family's subtype and build it.
    pub fn build_named<P: Product>(&self, builder: &mut DrinkBuilder<P>, name: &str) -> Result<P> {
        let kind = name.parse::<P::Kind>()?;
        self.make(builder, kind)
    }

    /// Drive `builder` through the full sequence for `kind`.
    pub fn make<P: Product>(&self, builder: &mut DrinkBuilder<P>, kind: P::Kind) -> Result<P> {
        let family = <P::Kind as Variant>::FAMILY;

        builder.reset();
        builder.assign(P::from_kind(kind));

        let defaults = kind.defaults();
        builder.set_name(defaults.name);
        builder.set_temperature(defaults.temperature);

        debug!(
            family,
            kind = %kind,
            temperature = defaults.temperature,
            "built drink"
        );

        builder.build().ok_or(BaristaError::NothingBuilt { family })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CoffeeKind, Drink, TeaKind};

    #[test]
    fn black_coffee_defaults() {
        let mut builder = CoffeeBuilder::new();
        let coffee = Director::new().build_coffee(&mut builder, "Black").unwrap();

        assert_eq!(coffee.name(), "Black Coffee");
        assert_eq!(coffee.temperature(), 80);
        assert_eq!(coffee.kind(), CoffeeKind::Black);
    }

    #[test]
    fn latte_defaults() {
        let mut builder = CoffeeBuilder::new();
        let coffee = Director::new().build_coffee(&mut builder, "Latte").unwrap();

        assert_eq!(coffee.name(), "Latte Coffee");
        assert_eq!(coffee.temperature(), 60);
        assert_eq!(coffee.kind(), CoffeeKind::Latte);
    }

    #[test]
    fn english_tea_defaults() {
        let mut builder = TeaBuilder::new();
        let tea = Director::new().build_tea(&mut builder, "English").unwrap();

        assert_eq!(tea.name(), "English Tea");
        assert_eq!(tea.temperature(), 80);
        assert_eq!(tea.kind(), TeaKind::English);
    }

    #[test]
    fn green_tea_defaults() {
        let mut builder = TeaBuilder::new();
        let tea = Director::new().build_tea(&mut builder, "Green").unwrap();

        assert_eq!(tea.name(), "Green Tea");
        assert_eq!(tea.temperature(), 60);
        assert_eq!(tea.kind(), TeaKind::Green);
    }

    #[test]
    fn names_are_case_insensitive() {
        let mut builder = CoffeeBuilder::new();
        let coffee = Director::new().build_coffee(&mut builder, "latte").unwrap();

        assert_eq!(coffee.kind(), CoffeeKind::Latte);
    }

    #[test]
    fn unknown_coffee_is_rejected() {
        let mut builder = CoffeeBuilder::new();
        let result = Director::new().build_coffee(&mut builder, "Cappuccino");

        assert_eq!(
            result,
            Err(BaristaError::UnknownVariant {
                family: "coffee",
                name: "Cappuccino".to_string(),
            })
        );
    }

    #[test]
    fn unknown_tea_is_rejected() {
        let mut builder = TeaBuilder::new();
        let result = Director::new().build_tea(&mut builder, "Oolong");

        assert!(matches!(
            result,
            Err(BaristaError::UnknownVariant { family: "tea", .. })
        ));
    }

    #[test]
    fn make_replaces_previous_product() {
        let director = Director::new();
        let mut builder = CoffeeBuilder::new();
        director.make(&mut builder, CoffeeKind::Latte).unwrap();
        builder.set_name("Leftover");

        let coffee = director.make(&mut builder, CoffeeKind::Black).unwrap();

        assert_eq!(coffee.name(), "Black Coffee");
        assert_eq!(coffee.kind(), CoffeeKind::Black);
    }

    #[test]
    fn builder_keeps_product_after_make() {
        let director = Director::new();
        let mut builder = TeaBuilder::new();
        let tea = director.make(&mut builder, TeaKind::Green).unwrap();

        assert_eq!(builder.build(), Some(tea));
    }

    crate::variant_enum! {
        enum TallyKind for "tally" {
            Plain => ("Plain", "Plain Tally", 20),
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        name: String,
        temperature: i32,
        kind: TallyKind,
        kind_writes: usize,
    }

    impl Drink for Tally {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn temperature(&self) -> i32 {
            self.temperature
        }

        fn set_name(&mut self, name: String) {
            self.name = name;
        }

        fn set_temperature(&mut self, temperature: i32) {
            self.temperature = temperature;
        }
    }

    impl Product for Tally {
        type Kind = TallyKind;

        fn from_kind(kind: TallyKind) -> Self {
            Self {
                name: String::new(),
                temperature: 0,
                kind,
                kind_writes: 1,
            }
        }

        fn kind(&self) -> TallyKind {
            self.kind
        }

        fn set_kind(&mut self, kind: TallyKind) {
            self.kind = kind;
            self.kind_writes += 1;
        }
    }

    #[test]
    fn make_sets_subtype_exactly_once() {
        let mut builder = DrinkBuilder::<Tally>::new();
        let tally = Director::new().make(&mut builder, TallyKind::Plain).unwrap();

        assert_eq!(tally.kind_writes, 1);
        assert_eq!(tally.name(), "Plain Tally");
        assert_eq!(tally.temperature(), 20);
    }

    #[test]
    fn caller_can_override_after_build() {
        let director = Director::new();
        let mut builder = TeaBuilder::new();
        director.make(&mut builder, TeaKind::English).unwrap();
        builder.set_temperature(85);

        let tea = builder.build().unwrap();
        assert_eq!(tea.temperature(), 85);
        assert_eq!(tea.name(), "English Tea");
    }
}
