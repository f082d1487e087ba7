use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Stock keeping unit. Globally unique across all tenants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sku(String);

impl Sku {
    /// Builds a SKU from raw input, rejecting blank values.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProductError::MissingField);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Constructor for values already persisted (no validation).
    pub fn from_repository(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exact, non-negative product price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price(BigDecimal);

impl Price {
    /// Parses the textual form of a JSON number or string.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a finite
    /// decimal is `InvalidPrice`; values below zero are `NegativePrice`.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let value = BigDecimal::from_str(raw.trim()).map_err(|_| ProductError::InvalidPrice)?;
        Self::new(value)
    }

    pub fn new(value: BigDecimal) -> Result<Self, ProductError> {
        if value.is_negative() {
            return Err(ProductError::NegativePrice);
        }
        Ok(Self(value))
    }

    /// Constructor for values already persisted (no validation).
    pub fn from_repository(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &BigDecimal {
        &self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
