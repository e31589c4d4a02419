use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::validation::validate_create;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CreateProductUseCaseImpl {
    pub fn new(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { repository, logger }
    }
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!(
            "Creating product: {}",
            params.name.as_deref().unwrap_or("<missing>")
        ));

        let new_product = validate_create(params).inspect_err(|err| {
            if let ProductError::Validation(violations) = err {
                let fields: Vec<String> = violations
                    .iter()
                    .map(|v| format!("{}={}", v.field, v.reason))
                    .collect();
                self.logger
                    .warn(&format!("Product rejected: {}", fields.join(", ")));
            }
        })?;

        self.logger.debug(&format!(
            "Mapped product for save: name={:?} value={}",
            new_product.name(),
            new_product.value()
        ));

        let product = self.repository.save(&new_product).await.map_err(|err| {
            self.logger
                .error(&format!("Failed to save product: {}", err));
            ProductError::Persistence(err)
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
