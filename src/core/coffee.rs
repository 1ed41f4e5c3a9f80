//! Coffee family.

use super::drink::{Drink, Product, Variant};
use serde::{Deserialize, Serialize};

crate::variant_enum! {
    /// Coffee subtypes on the menu.
    pub enum CoffeeKind for "coffee" {
        Latte => ("Latte", "Latte Coffee", 60),
        Black => ("Black", "Black Coffee", 80),
    }
}

/// A cup of coffee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coffee {
    name: String,
    temperature: i32,
    kind: CoffeeKind,
}

impl Coffee {
    /// Make a coffee with the subtype's defaults.
    pub fn new(kind: CoffeeKind) -> Self {
        let defaults = kind.defaults();
        Self {
            name: defaults.name.to_string(),
            temperature: defaults.temperature,
            kind,
        }
    }

    pub fn coffee_type(&self) -> CoffeeKind {
        self.kind
    }
}

impl Drink for Coffee {
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

impl Product for Coffee {
    type Kind = CoffeeKind;

    fn from_kind(kind: CoffeeKind) -> Self {
        Self::new(kind)
    }

    fn kind(&self) -> CoffeeKind {
        self.kind
    }

    fn set_kind(&mut self, kind: CoffeeKind) {
        self.kind = kind;
    }
}
