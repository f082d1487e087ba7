use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::InventoryError;

/// Units on hand in one warehouse. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(i64);

impl Quantity {
    /// Parses the textual form of a JSON integer or string.
    ///
    /// Fractional, exponent and non-numeric forms are `InvalidQuantity`.
    pub fn parse(raw: &str) -> Result<Self, InventoryError> {
        let value = i64::from_str(raw.trim()).map_err(|_| InventoryError::InvalidQuantity)?;
        Self::new(value)
    }

    pub fn new(value: i64) -> Result<Self, InventoryError> {
        if value < 0 {
            return Err(InventoryError::NegativeQuantity);
        }
        Ok(Self(value))
    }

    /// Constructor for values already persisted (no validation).
    pub fn from_repository(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
