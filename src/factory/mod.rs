//! Abstract factories producing one consistent family of drinks.
//!
//! A factory is fixed to a [`Family`] when it is constructed. Every coffee it
//! makes has that family's coffee subtype and every tea its tea subtype, for
//! as many calls as the factory lives. Factories hold no mutable state, so
//! they may be shared freely once built.

use crate::builder::{CoffeeBuilder, TeaBuilder};
use crate::core::{Coffee, CoffeeKind, Tea, TeaKind};
use crate::director::Director;
use crate::error::{BaristaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A fixed pairing of one coffee subtype and one tea subtype.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Latte coffee and English tea.
    Classic,
    /// Black coffee and green tea.
    Diet,
}

impl Family {
    /// Every family, in menu order.
    pub const ALL: [Family; 2] = [Family::Classic, Family::Diet];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Diet => "Diet",
        }
    }

    pub fn coffee_kind(&self) -> CoffeeKind {
        match self {
            Self::Classic => CoffeeKind::Latte,
            Self::Diet => CoffeeKind::Black,
        }
    }

    pub fn tea_kind(&self) -> TeaKind {
        match self {
            Self::Classic => TeaKind::English,
            Self::Diet => TeaKind::Green,
        }
    }

    /// Build a factory serving this family.
    pub fn factory(self) -> FamilyFactory {
        FamilyFactory::new(self)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = BaristaError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BaristaError::UnknownFamily(s.to_string()))
    }
}

/// Creates the drinks of one family.
pub trait DrinkFactory {
    /// The family this factory was fixed to at construction.
    fn family(&self) -> Family;

    fn create_coffee(&self) -> Result<Coffee>;

    fn create_tea(&self) -> Result<Tea>;
}

impl<F: DrinkFactory + ?Sized> DrinkFactory for Box<F> {
    fn family(&self) -> Family {
        (**self).family()
    }

    fn create_coffee(&self) -> Result<Coffee> {
        (**self).create_coffee()
    }

    fn create_tea(&self) -> Result<Tea> {
        (**self).create_tea()
    }
}

/// Factory that delegates every request to a director with a fresh builder.
///
/// # Example
///
/// ```
/// use barista::core::Drink;
/// use barista::factory::{DrinkFactory, FamilyFactory};
///
/// let diet = FamilyFactory::diet();
/// let tea = diet.create_tea().unwrap();
/// assert_eq!(tea.name(), "Green Tea");
/// assert_eq!(tea.temperature(), 60);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FamilyFactory {
    family: Family,
    director: Director,
}

impl FamilyFactory {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            director: Director::new(),
        }
    }

    /// Latte coffee and English tea.
    pub fn classic() -> Self {
        Self::new(Family::Classic)
    }

    /// Black coffee and green tea.
    pub fn diet() -> Self {
        Self::new(Family::Diet)
    }
}

impl DrinkFactory for FamilyFactory {
    fn family(&self) -> Family {
        self.family
    }

    fn create_coffee(&self) -> Result<Coffee> {
        let kind = self.family.coffee_kind();
        debug!(family = %self.family, %kind, "creating coffee");
        let mut builder = CoffeeBuilder::new();
        self.director.make(&mut builder, kind)
    }

    fn create_tea(&self) -> Result<Tea> {
        let kind = self.family.tea_kind();
        debug!(family = %self.family, %kind, "creating tea");
        let mut builder = TeaBuilder::new();
        self.director.make(&mut builder, kind)
    }
}
