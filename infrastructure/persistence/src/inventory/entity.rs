use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::inventory::model::Inventory;
use business::domain::inventory::value_objects::Quantity;
use business::domain::shared::value_objects::WarehouseId;

#[derive(Debug, FromRow)]
pub struct InventoryEntity {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
    pub updated_at: DateTime<Utc>,
}

impl InventoryEntity {
    pub fn into_domain(self) -> Inventory {
        Inventory::from_repository(
            self.id,
            self.product_id,
            WarehouseId::new(self.warehouse_id),
            Quantity::from_repository(self.quantity),
            self.updated_at,
        )
    }
}
