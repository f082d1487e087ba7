use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use business::domain::errors::RepositoryError;
use business::domain::inventory::model::{Inventory, NewInventory};
use business::domain::inventory::value_objects::Quantity;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::{ProductCatalogRepository, ProductCatalogTransaction};
use business::domain::product::value_objects::Sku;
use business::domain::shared::value_objects::WarehouseId;

use super::entity::ProductEntity;
use crate::error::map_sqlx_error;
use crate::inventory::entity::InventoryEntity;

pub struct ProductCatalogRepositoryPostgres {
    pool: PgPool,
}

impl ProductCatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalogRepository for ProductCatalogRepositoryPostgres {
    async fn begin(&self) -> Result<Box<dyn ProductCatalogTransaction>, RepositoryError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("begin", e))?;

        Ok(Box::new(ProductCatalogTransactionPostgres { tx: Some(tx) }))
    }
}

/// Open PostgreSQL transaction. Dropping it before `commit` rolls it back.
pub struct ProductCatalogTransactionPostgres {
    tx: Option<Transaction<'static, Postgres>>,
}

impl ProductCatalogTransactionPostgres {
    fn active(&mut self) -> Result<&mut Transaction<'static, Postgres>, RepositoryError> {
        self.tx
            .as_mut()
            .ok_or_else(|| RepositoryError::database_error("transaction already finished"))
    }
}

#[async_trait]
impl ProductCatalogTransaction for ProductCatalogTransactionPostgres {
    async fn find_product_by_sku(&mut self, sku: &Sku) -> Result<Option<Product>, RepositoryError> {
        let tx = self.active()?;
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, company_id, name, sku, price, created_at FROM products WHERE sku = $1",
        )
        .bind(sku.as_str())
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| map_sqlx_error("find_product_by_sku", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert_product(&mut self, product: &NewProduct) -> Result<i64, RepositoryError> {
        let tx = self.active()?;
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO products (company_id, name, sku, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id"#,
        )
        .bind(product.company_id.value())
        .bind(&product.name)
        .bind(product.sku.as_str())
        .bind(product.price.value())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| map_sqlx_error("insert_product", e))?;

        Ok(id)
    }

    async fn find_inventory(
        &mut self,
        product_id: i64,
        warehouse_id: WarehouseId,
    ) -> Result<Option<Inventory>, RepositoryError> {
        let tx = self.active()?;
        let entity = sqlx::query_as::<_, InventoryEntity>(
            "SELECT id, product_id, warehouse_id, quantity, updated_at FROM inventory WHERE product_id = $1 AND warehouse_id = $2 FOR UPDATE",
        )
        .bind(product_id)
        .bind(warehouse_id.value())
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| map_sqlx_error("find_inventory", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert_inventory(&mut self, inventory: &NewInventory) -> Result<i64, RepositoryError> {
        let tx = self.active()?;
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO inventory (product_id, warehouse_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING id"#,
        )
        .bind(inventory.product_id)
        .bind(inventory.warehouse_id.value())
        .bind(inventory.quantity.value())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| map_sqlx_error("insert_inventory", e))?;

        Ok(id)
    }

    async fn update_inventory_quantity(
        &mut self,
        inventory_id: i64,
        quantity: Quantity,
    ) -> Result<(), RepositoryError> {
        let tx = self.active()?;
        let result = sqlx::query("UPDATE inventory SET quantity = $1, updated_at = now() WHERE id = $2")
            .bind(quantity.value())
            .bind(inventory_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| map_sqlx_error("update_inventory_quantity", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }

        Ok(())
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| RepositoryError::database_error("transaction already finished"))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("commit", e))?;
        debug!("catalog transaction committed");
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), RepositoryError> {
        match self.tx.take() {
            Some(tx) => {
                tx.rollback()
                    .await
                    .map_err(|e| map_sqlx_error("rollback", e))?;
                debug!("catalog transaction rolled back");
                Ok(())
            }
            None => Ok(()),
        }
    }
}
