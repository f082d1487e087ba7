use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductCatalogRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(ProductCatalogRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: catalog_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(create_use_case);

        Self {
            health_api,
            product_api,
        }
    }
}
