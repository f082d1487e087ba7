use poem_openapi::Object;
use serde_json::Value;

use business::domain::product::use_cases::create::{CreateProductParams, CreatedProduct};

/// Request to create a product with optional initial stock.
///
/// Every field is optional at the schema level so that missing values are
/// reported by the use case with a single, consistent error.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: Option<String>,
    /// Stock keeping unit, unique across all companies
    pub sku: Option<String>,
    /// Price as a JSON number or decimal string (must be >= 0)
    pub price: Option<Value>,
    /// Owning company (tenant)
    pub company_id: Option<i64>,
    /// Warehouse receiving the initial stock
    pub warehouse_id: Option<i64>,
    /// Initial stock in the warehouse, as an integer or integer string
    pub initial_quantity: Option<Value>,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            sku: request.sku,
            price: textual(request.price),
            company_id: request.company_id,
            warehouse_id: request.warehouse_id,
            initial_quantity: textual(request.initial_quantity.map(integral)),
        }
    }
}

/// Keeps strings as sent and renders every other JSON value as text,
/// leaving numeric validation to the domain.
fn textual(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Collapses a whole-valued JSON float such as `10.0` to its integer form.
/// Fractional and out-of-range numbers are left for the domain to reject.
fn integral(value: Value) -> Value {
    match value.as_f64() {
        Some(f)
            if value.is_f64()
                && f.fract() == 0.0
                && f >= i64::MIN as f64
                && f < i64::MAX as f64 =>
        {
            Value::from(f as i64)
        }
        _ => value,
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCreatedResponse {
    /// Confirmation message
    pub message: String,
    /// Id assigned to the new product
    pub product_id: i64,
}

impl From<CreatedProduct> for ProductCreatedResponse {
    fn from(created: CreatedProduct) -> Self {
        Self {
            message: "Product created".to_string(),
            product_id: created.product_id,
        }
    }
}
