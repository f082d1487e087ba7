use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

/// Raw creation request as received from the caller.
///
/// `price` and `initial_quantity` hold the textual form of whatever the
/// caller sent (JSON number or string) and are parsed by the use case.
#[derive(Debug, Clone, Default)]
pub struct CreateProductParams {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub company_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub initial_quantity: Option<String>,
}

/// Outcome of a successful creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedProduct {
    pub product_id: i64,
    /// Id of the inventory row written, when initial stock was supplied.
    pub inventory_id: Option<i64>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<CreatedProduct, ProductError>;
}
