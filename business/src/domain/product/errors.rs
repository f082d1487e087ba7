use crate::domain::errors::RepositoryError;
use crate::domain::inventory::errors::InventoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.missing_field")]
    MissingField,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.invalid_quantity")]
    InvalidQuantity,
    #[error("product.negative_quantity")]
    NegativeQuantity,
    /// Advisory pre-check found the SKU already taken.
    #[error("product.duplicate_sku")]
    DuplicateSku { product_id: i64 },
    /// The store rejected the transaction on an integrity constraint.
    #[error("product.integrity_conflict")]
    IntegrityConflict(String),
    #[error("product.internal_failure")]
    InternalFailure(String),
}

impl ProductError {
    /// Input errors are raised before any transaction is opened.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::MissingField
                | ProductError::InvalidPrice
                | ProductError::NegativePrice
                | ProductError::InvalidQuantity
                | ProductError::NegativeQuantity
        )
    }
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        if err.is_integrity_violation() {
            ProductError::IntegrityConflict(err.detail())
        } else {
            ProductError::InternalFailure(err.detail())
        }
    }
}

impl From<InventoryError> for ProductError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::InvalidQuantity => ProductError::InvalidQuantity,
            InventoryError::NegativeQuantity => ProductError::NegativeQuantity,
        }
    }
}
