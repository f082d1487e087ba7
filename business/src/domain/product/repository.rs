use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::inventory::model::{Inventory, NewInventory};
use crate::domain::inventory::value_objects::Quantity;
use crate::domain::shared::value_objects::WarehouseId;

use super::model::{NewProduct, Product};
use super::value_objects::Sku;

/// Entry point to the product catalog store.
///
/// Every write goes through a transaction obtained from [`begin`](Self::begin),
/// so product and inventory rows become visible together or not at all.
#[async_trait]
pub trait ProductCatalogRepository: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn ProductCatalogTransaction>, RepositoryError>;
}

/// An open store transaction over the products and inventory tables.
///
/// Nothing written through the handle is visible to others until
/// [`commit`](Self::commit). A handle that is dropped without committing
/// is rolled back.
#[async_trait]
pub trait ProductCatalogTransaction: Send {
    async fn find_product_by_sku(&mut self, sku: &Sku) -> Result<Option<Product>, RepositoryError>;
    /// Inserts the product and returns the id assigned by the store.
    async fn insert_product(&mut self, product: &NewProduct) -> Result<i64, RepositoryError>;
    async fn find_inventory(
        &mut self,
        product_id: i64,
        warehouse_id: WarehouseId,
    ) -> Result<Option<Inventory>, RepositoryError>;
    async fn insert_inventory(&mut self, inventory: &NewInventory) -> Result<i64, RepositoryError>;
    async fn update_inventory_quantity(
        &mut self,
        inventory_id: i64,
        quantity: Quantity,
    ) -> Result<(), RepositoryError>;
    async fn commit(&mut self) -> Result<(), RepositoryError>;
    async fn rollback(&mut self) -> Result<(), RepositoryError>;
}
