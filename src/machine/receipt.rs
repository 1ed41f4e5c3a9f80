//! Receipts handed out with every served drink.

use crate::factory::Family;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of one served drink.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt identifier
    pub id: Uuid,

    /// When the drink was handed over
    pub served_at: DateTime<Utc>,

    pub family: Family,

    /// Final name, including add-on suffixes
    pub description: String,

    pub temperature: i32,
}

impl Receipt {
    pub(crate) fn issue(family: Family, description: String, temperature: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            served_at: Utc::now(),
            family,
            description,
            temperature,
        }
    }
}
