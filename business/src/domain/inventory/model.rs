use chrono::{DateTime, Utc};

use super::value_objects::Quantity;
use crate::domain::shared::value_objects::WarehouseId;

/// Stock of one product in one warehouse.
/// At most one row exists per (product_id, warehouse_id).
#[derive(Debug, Clone)]
pub struct Inventory {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: WarehouseId,
    pub quantity: Quantity,
    pub updated_at: DateTime<Utc>,
}

/// Inventory row not yet written; the store assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInventory {
    pub product_id: i64,
    pub warehouse_id: WarehouseId,
    pub quantity: Quantity,
}

impl Inventory {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        product_id: i64,
        warehouse_id: WarehouseId,
        quantity: Quantity,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            warehouse_id,
            quantity,
            updated_at,
        }
    }
}
