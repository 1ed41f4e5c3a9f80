//! The barista machine: a thin client over one drink factory.
//!
//! The machine does no business logic of its own. It asks its factory for
//! drinks, optionally wraps them in add-ons and reports what was served.

mod receipt;

pub use receipt::Receipt;

use crate::core::Drink;
use crate::decorator::{decorate, Addon, AddonDecorator};
use crate::error::{BaristaError, Result};
use crate::factory::DrinkFactory;
use crate::order::{DrinkChoice, Order};
use tracing::info;

/// Serves drinks from the family of its factory.
///
/// # Example
///
/// ```
/// use barista::factory::FamilyFactory;
/// use barista::machine::BaristaMachine;
///
/// let machine = BaristaMachine::new(FamilyFactory::classic());
/// assert_eq!(machine.serve_coffee().unwrap(), "Latte Coffee");
/// assert_eq!(machine.serve_coffee_with_milk().unwrap(), "Latte Coffee with Milk");
/// ```
#[derive(Clone, Debug)]
pub struct BaristaMachine<F: DrinkFactory> {
    factory: F,
}

impl<F: DrinkFactory> BaristaMachine<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Serve a plain coffee and return its name.
    pub fn serve_coffee(&self) -> Result<String> {
        let coffee = self.factory.create_coffee()?;
        Ok(self.hand_over(&coffee))
    }

    /// Serve a plain tea and return its name.
    pub fn serve_tea(&self) -> Result<String> {
        let tea = self.factory.create_tea()?;
        Ok(self.hand_over(&tea))
    }

    /// Serve a coffee and a tea, in that order.
    pub fn serve_combo(&self) -> Result<[String; 2]> {
        Ok([self.serve_coffee()?, self.serve_tea()?])
    }

    pub fn serve_coffee_with_milk(&self) -> Result<String> {
        let coffee = self.factory.create_coffee()?;
        let drink = AddonDecorator::new(Box::new(coffee), Addon::Milk);
        Ok(self.hand_over(&drink))
    }

    /// Serve `choice` with `addons` applied in order.
    pub fn serve(&self, choice: DrinkChoice, addons: &[Addon]) -> Result<Receipt> {
        let base: Box<dyn Drink> = match choice {
            DrinkChoice::Coffee => Box::new(self.factory.create_coffee()?),
            DrinkChoice::Tea => Box::new(self.factory.create_tea()?),
        };
        let drink = decorate(base, addons);
        let description = self.hand_over(drink.as_ref());

        Ok(Receipt::issue(
            self.factory.family(),
            description,
            drink.temperature(),
        ))
    }

    /// Serve a validated order.
    ///
    /// The order's family must match the family this machine serves.
    pub fn serve_order(&self, order: &Order) -> Result<Receipt> {
        let family = self.factory.family();
        if order.family != family {
            return Err(BaristaError::FamilyMismatch {
                expected: family.to_string(),
                found: order.family.to_string(),
            });
        }

        self.serve(order.drink, &order.addons)
    }

    fn hand_over(&self, drink: &dyn Drink) -> String {
        let description = drink.name();
        info!(
            family = %self.factory.family(),
            drink = %description,
            temperature = drink.temperature(),
            "served"
        );
        description
    }
}
