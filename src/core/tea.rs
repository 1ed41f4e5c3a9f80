//! Tea family.

use super::drink::{Drink, Product, Variant};
use serde::{Deserialize, Serialize};

crate::variant_enum! {
    /// Tea subtypes on the menu.
    pub enum TeaKind for "tea" {
        English => ("English", "English Tea", 80),
        Green => ("Green", "Green Tea", 60),
    }
}

/// A cup of tea.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tea {
    name: String,
    temperature: i32,
    kind: TeaKind,
}

impl Tea {
    /// Make a tea with the subtype's defaults.
    pub fn new(kind: TeaKind) -> Self {
        let defaults = kind.defaults();
        Self {
            name: defaults.name.to_string(),
            temperature: defaults.temperature,
            kind,
        }
    }

    pub fn tea_type(&self) -> TeaKind {
        self.kind
    }
}

impl Drink for Tea {
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

impl Product for Tea {
    type Kind = TeaKind;

    fn from_kind(kind: TeaKind) -> Self {
        Self::new(kind)
    }

    fn kind(&self) -> TeaKind {
        self.kind
    }

    fn set_kind(&mut self, kind: TeaKind) {
        self.kind = kind;
    }
}
