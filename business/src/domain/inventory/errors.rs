#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InventoryError {
    #[error("inventory.invalid_quantity")]
    InvalidQuantity,
    #[error("inventory.negative_quantity")]
    NegativeQuantity,
}
