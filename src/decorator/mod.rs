//! Add-on decorators layered over finished drinks.
//!
//! An [`AddonDecorator`] wraps exactly one drink and is itself a [`Drink`],
//! so decorators stack to any depth. Each layer appends its own suffix to the
//! name it wraps; temperature and both setters pass straight through to the
//! innermost drink.
//!
//! # Example
//!
//! ```
//! use barista::core::{Coffee, CoffeeKind, Drink};
//! use barista::decorator::{decorate, Addon};
//!
//! let coffee = Box::new(Coffee::new(CoffeeKind::Latte));
//! let drink = decorate(coffee, &[Addon::Milk, Addon::Sugar]);
//!
//! assert_eq!(drink.name(), "Latte Coffee with Milk with Sugar");
//! assert_eq!(drink.temperature(), 60);
//! ```

use crate::core::Drink;
use crate::error::{BaristaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional extras a drink can be served with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Addon {
    Milk,
    Sugar,
    VanillaSyrup,
}

impl Addon {
    pub const ALL: [Addon; 3] = [Addon::Milk, Addon::Sugar, Addon::VanillaSyrup];

    /// Text appended after "with" in a decorated name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Milk => "Milk",
            Self::Sugar => "Sugar",
            Self::VanillaSyrup => "Vanilla Syrup",
        }
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Addon {
    type Err = BaristaError;

    /// Accepts the label in any case, with spaces, underscores or nothing
    /// between words ("vanilla syrup", "vanilla_syrup", "VanillaSyrup").
    fn from_str(s: &str) -> Result<Self> {
        let wanted = compact(s);
        Self::ALL
            .into_iter()
            .find(|addon| compact(addon.label()) == wanted)
            .ok_or_else(|| BaristaError::UnknownAddon(s.to_string()))
    }
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Wraps one drink and adds one add-on to it.
#[derive(Debug)]
pub struct AddonDecorator {
    inner: Box<dyn Drink>,
    addon: Addon,
}

impl AddonDecorator {
    pub fn new(inner: Box<dyn Drink>, addon: Addon) -> Self {
        Self { inner, addon }
    }

    /// Wrap a drink that may be missing, such as the output of an empty
    /// builder.
    ///
    /// Fails with [`BaristaError::InvalidComposition`] when there is nothing
    /// to wrap.
    pub fn try_new(inner: Option<Box<dyn Drink>>, addon: Addon) -> Result<Self> {
        inner
            .map(|inner| Self::new(inner, addon))
            .ok_or_else(|| BaristaError::InvalidComposition {
                addon: addon.label().to_string(),
            })
    }

    pub fn addon(&self) -> Addon {
        self.addon
    }

    /// The drink this decorator wraps.
    pub fn inner(&self) -> &dyn Drink {
        self.inner.as_ref()
    }

    /// Remove this layer and return the wrapped drink.
    pub fn into_inner(self) -> Box<dyn Drink> {
        self.inner
    }
}

impl Drink for AddonDecorator {
    fn name(&self) -> String {
        format!("{} with {}", self.inner.name(), self.addon.label())
    }

    fn temperature(&self) -> i32 {
        self.inner.temperature()
    }

    fn set_name(&mut self, name: String) {
        self.inner.set_name(name);
    }

    fn set_temperature(&mut self, temperature: i32) {
        self.inner.set_temperature(temperature);
    }
}

/// Apply `addons` to `drink` in order.
///
/// The first add-on becomes the innermost layer, so its suffix appears
/// first in the final name.
pub fn decorate(drink: Box<dyn Drink>, addons: &[Addon]) -> Box<dyn Drink> {
    addons.iter().fold(drink, |drink, addon| {
        let wrapped: Box<dyn Drink> = Box::new(AddonDecorator::new(drink, *addon));
        wrapped
    })
}
