//! Capability traits shared by every drink.
//!
//! `Drink` is the object-safe surface that decorators wrap and clients read.
//! `Product` adds what a builder needs to know about one concrete family
//! member, and `Variant` describes the closed set of subtypes a family offers.

use crate::error::BaristaError;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Anything that can be served.
///
/// Decorators implement this trait by delegating to the drink they wrap, so a
/// `Box<dyn Drink>` may be a bare product or an arbitrarily deep chain of
/// add-ons.
///
/// # Example
///
/// ```rust
/// use barista::core::{Coffee, CoffeeKind, Drink};
///
/// let mut latte = Coffee::new(CoffeeKind::Latte);
/// assert_eq!(latte.name(), "Latte Coffee");
///
/// latte.set_temperature(70);
/// assert_eq!(latte.temperature(), 70);
/// ```
pub trait Drink: Debug {
    /// Human readable name, including any add-on suffixes.
    fn name(&self) -> String;

    /// Serving temperature in degrees Celsius.
    fn temperature(&self) -> i32;

    fn set_name(&mut self, name: String);

    fn set_temperature(&mut self, temperature: i32);
}

/// A concrete family member that a `DrinkBuilder` can assemble.
pub trait Product: Drink + Clone {
    /// The closed set of subtypes this family offers.
    type Kind: Variant;

    /// Instantiate a product carrying the subtype's literal defaults.
    fn from_kind(kind: Self::Kind) -> Self;

    fn kind(&self) -> Self::Kind;

    /// Replace the subtype discriminator.
    ///
    /// `from_kind` already sets the subtype, so the build sequence never
    /// calls this; it exists for callers re-purposing a builder by hand.
    fn set_kind(&mut self, kind: Self::Kind);
}

/// Literal defaults carried by one subtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defaults {
    pub name: &'static str,
    pub temperature: i32,
}

/// Closed enumeration of the subtypes of one family.
///
/// Implemented through the `variant_enum!` macro. Parsing is
/// case-insensitive on the label and fails with
/// [`BaristaError::UnknownVariant`].
pub trait Variant:
    Copy + PartialEq + Debug + Display + FromStr<Err = BaristaError> + Send + Sync + 'static
{
    /// Family noun used in diagnostics ("coffee", "tea").
    const FAMILY: &'static str;

    /// Label used for display and parsing ("Latte", "Green").
    fn label(&self) -> &'static str;

    fn defaults(&self) -> Defaults;

    /// Every subtype, in declaration order.
    fn all() -> &'static [Self];
}
