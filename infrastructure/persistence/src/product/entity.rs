use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Price, Sku};
use business::domain::shared::value_objects::CompanyId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    pub sku: String,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            CompanyId::new(self.company_id),
            self.name,
            Sku::from_repository(self.sku),
            Price::from_repository(self.price),
            self.created_at,
        )
    }
}
