use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::inventory::model::NewInventory;
use crate::domain::inventory::value_objects::Quantity;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps};
use crate::domain::product::repository::{ProductCatalogRepository, ProductCatalogTransaction};
use crate::domain::product::use_cases::create::{
    CreateProductParams, CreateProductUseCase, CreatedProduct,
};
use crate::domain::product::value_objects::{Price, Sku};
use crate::domain::shared::value_objects::{CompanyId, WarehouseId};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductCatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Request that passed validation and may now touch the store.
struct ValidatedRequest {
    product: NewProduct,
    initial_stock: Option<(WarehouseId, Quantity)>,
}

impl CreateProductUseCaseImpl {
    fn validate(&self, params: CreateProductParams) -> Result<ValidatedRequest, ProductError> {
        let (Some(name), Some(sku), Some(price), Some(company_id)) =
            (params.name, params.sku, params.price, params.company_id)
        else {
            return Err(ProductError::MissingField);
        };
        if name.trim().is_empty() || price.trim().is_empty() {
            return Err(ProductError::MissingField);
        }

        let sku = Sku::parse(&sku)?;
        let price = Price::parse(&price)?;
        let quantity = params
            .initial_quantity
            .as_deref()
            .map(Quantity::parse)
            .transpose()?;

        let product = NewProduct::new(NewProductProps {
            company_id: CompanyId::new(company_id),
            name,
            sku,
            price,
        })?;

        let initial_stock = match (params.warehouse_id, quantity) {
            (Some(warehouse_id), Some(quantity)) => Some((WarehouseId::new(warehouse_id), quantity)),
            (None, None) => None,
            (warehouse_id, quantity) => {
                self.logger.warn(&format!(
                    "Ignoring initial stock for sku {}: warehouse_id={:?}, initial_quantity={:?}",
                    product.sku, warehouse_id, quantity
                ));
                None
            }
        };

        Ok(ValidatedRequest {
            product,
            initial_stock,
        })
    }

    async fn create_in_transaction(
        &self,
        tx: &mut dyn ProductCatalogTransaction,
        request: &ValidatedRequest,
    ) -> Result<CreatedProduct, ProductError> {
        // Advisory only: concurrent requests can both pass this check,
        // the unique index on sku decides the winner.
        if let Some(existing) = tx.find_product_by_sku(&request.product.sku).await? {
            return Err(ProductError::DuplicateSku {
                product_id: existing.id,
            });
        }

        let product_id = tx.insert_product(&request.product).await?;

        let inventory_id = match request.initial_stock {
            Some((warehouse_id, quantity)) => Some(
                self.upsert_inventory(tx, product_id, warehouse_id, quantity)
                    .await?,
            ),
            None => None,
        };

        Ok(CreatedProduct {
            product_id,
            inventory_id,
        })
    }

    /// Overwrites the quantity of an existing row; never adds to it.
    async fn upsert_inventory(
        &self,
        tx: &mut dyn ProductCatalogTransaction,
        product_id: i64,
        warehouse_id: WarehouseId,
        quantity: Quantity,
    ) -> Result<i64, ProductError> {
        match tx.find_inventory(product_id, warehouse_id).await? {
            Some(existing) => {
                self.logger.debug(&format!(
                    "Setting inventory {} quantity {} -> {}",
                    existing.id, existing.quantity, quantity
                ));
                tx.update_inventory_quantity(existing.id, quantity).await?;
                Ok(existing.id)
            }
            None => {
                self.logger.debug(&format!(
                    "Inserting inventory for product {} in warehouse {}",
                    product_id, warehouse_id
                ));
                let id = tx
                    .insert_inventory(&NewInventory {
                        product_id,
                        warehouse_id,
                        quantity,
                    })
                    .await?;
                Ok(id)
            }
        }
    }

    async fn rollback(&self, tx: &mut dyn ProductCatalogTransaction) {
        if let Err(err) = tx.rollback().await {
            self.logger
                .error(&format!("Rollback failed: {}", err.detail()));
        }
    }

    fn log_failure(&self, sku: &str, err: &ProductError) {
        match err {
            invalid if invalid.is_validation() => self.logger.debug(&format!(
                "Rejected request for SKU {:?}: {}",
                sku, invalid
            )),
            ProductError::DuplicateSku { product_id } => self.logger.warn(&format!(
                "SKU {} already exists as product {}",
                sku, product_id
            )),
            ProductError::IntegrityConflict(detail) => self.logger.warn(&format!(
                "Integrity conflict creating SKU {}: {}",
                sku, detail
            )),
            other => self.logger.error(&format!(
                "Failed to create SKU {}: {:?}",
                sku, other
            )),
        }
    }
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<CreatedProduct, ProductError> {
        let raw_sku = params.sku.clone().unwrap_or_default();
        let request = self
            .validate(params)
            .inspect_err(|err| self.log_failure(&raw_sku, err))?;
        let sku = request.product.sku.to_string();

        self.logger.info(&format!(
            "Creating product {} for company {}",
            sku, request.product.company_id
        ));

        let mut tx = self.repository.begin().await.map_err(|e| {
            let err = ProductError::from(e);
            self.log_failure(&sku, &err);
            err
        })?;

        let created = match self.create_in_transaction(tx.as_mut(), &request).await {
            Ok(created) => created,
            Err(err) => {
                self.rollback(tx.as_mut()).await;
                self.log_failure(&sku, &err);
                return Err(err);
            }
        };

        if let Err(e) = tx.commit().await {
            let err = ProductError::from(e);
            self.log_failure(&sku, &err);
            return Err(err);
        }

        self.logger.info(&format!(
            "Product created with id: {}",
            created.product_id
        ));
        Ok(created)
    }
}
