use std::sync::Arc;

use business::application::product::create::CreateProductUseCaseImpl;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl::new(product_repository, logger));

        let product_api = crate::api::product::routes::ProductApi::new(create_use_case);

        Self {
            health_api,
            product_api,
        }
    }
}
