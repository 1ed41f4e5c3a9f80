//! Errors raised while assembling, decorating or ordering drinks.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BaristaError>;

/// Errors that can occur anywhere in the beverage pipeline.
///
/// Every variant is a caller contract violation. The pipeline is pure and
/// deterministic, so nothing here is worth retrying.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BaristaError {
    #[error("Unknown {family} variant '{name}'")]
    UnknownVariant { family: &'static str, name: String },

    #[error("Cannot add {addon} without a drink to wrap")]
    InvalidComposition { addon: String },

    #[error("Builder held no {family} when build() was called")]
    NothingBuilt { family: &'static str },

    #[error("Unknown family '{0}'")]
    UnknownFamily(String),

    #[error("Unknown add-on '{0}'")]
    UnknownAddon(String),

    #[error("Unknown drink '{0}', expected coffee or tea")]
    UnknownDrink(String),

    #[error("Order is for the {found} family but this machine serves {expected}")]
    FamilyMismatch { expected: String, found: String },

    #[error("Order rejected with {} problem(s)", .problems.len())]
    RejectedOrder { problems: Vec<BaristaError> },
}
