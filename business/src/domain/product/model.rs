use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::{Price, Sku};
use crate::domain::shared::value_objects::CompanyId;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub company_id: CompanyId,
    pub name: String,
    pub sku: Sku,
    pub price: Price,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub company_id: CompanyId,
    pub name: String,
    pub sku: Sku,
    pub price: Price,
}

/// Validated product waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub company_id: CompanyId,
    pub name: String,
    pub sku: Sku,
    pub price: Price,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::MissingField);
        }

        Ok(Self {
            company_id: props.company_id,
            name: props.name,
            sku: props.sku,
            price: props.price,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        company_id: CompanyId,
        name: String,
        sku: Sku,
        price: Price,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            company_id,
            name,
            sku,
            price,
            created_at,
        }
    }
}
