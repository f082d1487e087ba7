//! Runs against a real PostgreSQL when `TEST_DATABASE_URL` is set; each test
//! returns early otherwise.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::Utc;
use sqlx::PgPool;

use business::application::product::create::CreateProductUseCaseImpl;
use business::domain::inventory::model::NewInventory;
use business::domain::inventory::value_objects::Quantity;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProduct, NewProductProps};
use business::domain::product::repository::{ProductCatalogRepository, ProductCatalogTransaction};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::value_objects::{Price, Sku};
use business::domain::shared::value_objects::{CompanyId, WarehouseId};
use logger::TracingLogger;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::repository::ProductCatalogRepositoryPostgres;

async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = create_postgres_pool(&DatabaseConfig::new(url))
        .await
        .expect("TEST_DATABASE_URL must point to a reachable database");
    run_migrations(&pool, concat!(env!("CARGO_MANIFEST_DIR"), "/migrations"))
        .await
        .expect("migrations should apply");
    Some(pool)
}

fn unique_sku(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

fn use_case(pool: &PgPool) -> CreateProductUseCaseImpl {
    CreateProductUseCaseImpl {
        repository: Arc::new(ProductCatalogRepositoryPostgres::new(pool.clone())),
        logger: Arc::new(TracingLogger),
    }
}

fn widget(sku: &str) -> CreateProductParams {
    CreateProductParams {
        name: Some("Widget".to_string()),
        sku: Some(sku.to_string()),
        price: Some("9.99".to_string()),
        company_id: Some(1),
        warehouse_id: Some(5),
        initial_quantity: Some("10".to_string()),
    }
}

async fn count_products(pool: &PgPool, sku: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE sku = $1")
        .bind(sku)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn inventory_quantities(pool: &PgPool, product_id: i64, warehouse_id: i64) -> Vec<i64> {
    sqlx::query_scalar("SELECT quantity FROM inventory WHERE product_id = $1 AND warehouse_id = $2")
        .bind(product_id)
        .bind(warehouse_id)
        .fetch_all(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn should_persist_product_and_inventory() {
    let Some(pool) = test_pool().await else { return };
    let sku = unique_sku("W-1");

    let created = use_case(&pool).execute(widget(&sku)).await.unwrap();

    let (name, company_id, price): (String, i64, BigDecimal) =
        sqlx::query_as("SELECT name, company_id, price FROM products WHERE id = $1")
            .bind(created.product_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(name, "Widget");
    assert_eq!(company_id, 1);
    assert_eq!(price, BigDecimal::from_str("9.99").unwrap());
    assert_eq!(inventory_quantities(&pool, created.product_id, 5).await, vec![10]);
}

#[tokio::test]
async fn should_create_product_without_inventory() {
    let Some(pool) = test_pool().await else { return };
    let sku = unique_sku("W-NOINV");
    let params = CreateProductParams {
        warehouse_id: None,
        ..widget(&sku)
    };

    let created = use_case(&pool).execute(params).await.unwrap();

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory WHERE product_id = $1")
        .bind(created.product_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
    assert_eq!(count_products(&pool, &sku).await, 1);
}

#[tokio::test]
async fn should_leave_store_unchanged_on_duplicate_sku() {
    let Some(pool) = test_pool().await else { return };
    let sku = unique_sku("W-DUP");
    let first = use_case(&pool).execute(widget(&sku)).await.unwrap();

    let params = CreateProductParams {
        warehouse_id: Some(6),
        ..widget(&sku)
    };
    let result = use_case(&pool).execute(params).await;

    assert!(matches!(
        result.unwrap_err(),
        ProductError::DuplicateSku { product_id } if product_id == first.product_id
    ));
    assert_eq!(count_products(&pool, &sku).await, 1);
    assert!(inventory_quantities(&pool, first.product_id, 6).await.is_empty());
}

#[tokio::test]
async fn should_allow_only_one_of_two_concurrent_creations() {
    let Some(pool) = test_pool().await else { return };
    let sku = unique_sku("W-RACE");
    let use_case = use_case(&pool);

    let (a, b) = tokio::join!(use_case.execute(widget(&sku)), use_case.execute(widget(&sku)));

    let outcomes = [a, b];
    let created = outcomes.iter().filter(|r| r.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(ProductError::DuplicateSku { .. }) | Err(ProductError::IntegrityConflict(_))
            )
        })
        .count();
    assert_eq!(created, 1);
    assert_eq!(conflicts, 1);
    assert_eq!(count_products(&pool, &sku).await, 1);
}

#[tokio::test]
async fn should_discard_writes_on_rollback() {
    let Some(pool) = test_pool().await else { return };
    let sku = unique_sku("W-RB");
    let repository = ProductCatalogRepositoryPostgres::new(pool.clone());

    let mut tx = repository.begin().await.unwrap();
    let product_id = tx
        .insert_product(&new_product(&sku))
        .await
        .unwrap();
    tx.insert_inventory(&NewInventory {
        product_id,
        warehouse_id: WarehouseId::new(5),
        quantity: Quantity::new(10).unwrap(),
    })
    .await
    .unwrap();
    tx.rollback().await.unwrap();

    assert_eq!(count_products(&pool, &sku).await, 0);
    assert!(inventory_quantities(&pool, product_id, 5).await.is_empty());
}

#[tokio::test]
async fn should_discard_writes_when_handle_dropped() {
    let Some(pool) = test_pool().await else { return };
    let sku = unique_sku("W-DROP");
    let repository = ProductCatalogRepositoryPostgres::new(pool.clone());

    {
        let mut tx = repository.begin().await.unwrap();
        tx.insert_product(&new_product(&sku)).await.unwrap();
    }

    assert_eq!(count_products(&pool, &sku).await, 0);
}

#[tokio::test]
async fn should_overwrite_inventory_quantity() {
    let Some(pool) = test_pool().await else { return };
    let sku = unique_sku("W-SET");
    let repository = ProductCatalogRepositoryPostgres::new(pool.clone());
    let warehouse_id = WarehouseId::new(5);

    let mut tx = repository.begin().await.unwrap();
    let product_id = tx.insert_product(&new_product(&sku)).await.unwrap();
    tx.insert_inventory(&NewInventory {
        product_id,
        warehouse_id,
        quantity: Quantity::new(10).unwrap(),
    })
    .await
    .unwrap();
    tx.commit().await.unwrap();

    let mut tx = repository.begin().await.unwrap();
    let existing = tx
        .find_inventory(product_id, warehouse_id)
        .await
        .unwrap()
        .expect("inventory row should exist");
    assert_eq!(existing.quantity.value(), 10);
    tx.update_inventory_quantity(existing.id, Quantity::new(3).unwrap())
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert_eq!(inventory_quantities(&pool, product_id, 5).await, vec![3]);
}

#[tokio::test]
async fn should_reject_second_inventory_row_for_same_warehouse() {
    let Some(pool) = test_pool().await else { return };
    let sku = unique_sku("W-INVDUP");
    let repository = ProductCatalogRepositoryPostgres::new(pool.clone());
    let row = |product_id| NewInventory {
        product_id,
        warehouse_id: WarehouseId::new(5),
        quantity: Quantity::new(1).unwrap(),
    };

    let mut tx = repository.begin().await.unwrap();
    let product_id = tx.insert_product(&new_product(&sku)).await.unwrap();
    tx.insert_inventory(&row(product_id)).await.unwrap();
    let err = tx.insert_inventory(&row(product_id)).await.unwrap_err();
    tx.rollback().await.unwrap();

    assert!(err.is_integrity_violation());
}

fn new_product(sku: &str) -> NewProduct {
    NewProduct::new(NewProductProps {
        company_id: CompanyId::new(1),
        name: "Widget".to_string(),
        sku: Sku::parse(sku).unwrap(),
        price: Price::parse("9.99").unwrap(),
    })
    .unwrap()
}
