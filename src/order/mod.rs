//! Menu orders coming from a calling layer.
//!
//! An [`OrderRequest`] is the raw, textual selection a front end collects
//! (for instance deserialized from JSON). Validating it checks every field
//! and accumulates ALL problems instead of stopping at the first, so a
//! customer sees everything wrong with an order at once.
//!
//! # Example
//!
//! ```rust
//! use barista::decorator::Addon;
//! use barista::factory::Family;
//! use barista::order::{DrinkChoice, OrderRequest};
//!
//! let request: OrderRequest = serde_json::from_str(
//!     r#"{ "family": "classic", "drink": "coffee", "addons": ["milk"] }"#,
//! ).unwrap();
//!
//! let order = request.to_order().unwrap();
//! assert_eq!(order.family, Family::Classic);
//! assert_eq!(order.drink, DrinkChoice::Coffee);
//! assert_eq!(order.addons, vec![Addon::Milk]);
//! ```

use crate::decorator::Addon;
use crate::error::{BaristaError, Result};
use crate::factory::Family;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::warn;

/// Which drink of the family to serve.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkChoice {
    Coffee,
    Tea,
}

impl DrinkChoice {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Tea => "tea",
        }
    }
}

impl fmt::Display for DrinkChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrinkChoice {
    type Err = BaristaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coffee" => Ok(Self::Coffee),
            "tea" => Ok(Self::Tea),
            _ => Err(BaristaError::UnknownDrink(s.to_string())),
        }
    }
}

/// A validated order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub family: Family,
    pub drink: DrinkChoice,
    /// Applied in order; the first add-on's suffix appears first.
    #[serde(default)]
    pub addons: Vec<Addon>,
}

impl Order {
    /// Create an order without add-ons.
    pub fn new(family: Family, drink: DrinkChoice) -> Self {
        Self {
            family,
            drink,
            addons: Vec::new(),
        }
    }

    /// Add one more add-on on top of the current ones.
    pub fn with_addon(mut self, addon: Addon) -> Self {
        self.addons.push(addon);
        self
    }
}

/// Unvalidated order as typed by a customer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub family: String,
    pub drink: String,
    #[serde(default)]
    pub addons: Vec<String>,
}

impl OrderRequest {
    pub fn new(family: impl Into<String>, drink: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            drink: drink.into(),
            addons: Vec::new(),
        }
    }

    pub fn addon(mut self, addon: impl Into<String>) -> Self {
        self.addons.push(addon.into());
        self
    }

    /// Check every field, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BaristaError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BaristaError>>> = Vec::new();

        checks.push(check(self.family.parse::<Family>()));
        checks.push(check(self.drink.parse::<DrinkChoice>()));
        for addon in &self.addons {
            checks.push(check(addon.parse::<Addon>()));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Turn the request into an [`Order`].
    ///
    /// Fails with [`BaristaError::RejectedOrder`] listing every problem
    /// found by [`validate`](Self::validate).
    pub fn to_order(&self) -> Result<Order> {
        if let Validation::Failure(errors) = self.validate() {
            let problems: Vec<BaristaError> = errors.iter().cloned().collect();
            warn!(problems = problems.len(), "order rejected");
            return Err(BaristaError::RejectedOrder { problems });
        }

        Ok(Order {
            family: self.family.parse()?,
            drink: self.drink.parse()?,
            addons: self
                .addons
                .iter()
                .map(|addon| addon.parse())
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

fn check<T>(parsed: Result<T>) -> Validation<(), NonEmptyVec<BaristaError>> {
    match parsed {
        Ok(_) => Validation::success(()),
        Err(err) => Validation::fail(err),
    }
}
