use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Raw input for product creation. Fields are optional so that a missing
/// field can be reported instead of rejected by the transport.
#[derive(Debug, Clone, Default)]
pub struct CreateProductParams {
    pub name: Option<String>,
    pub value: Option<BigDecimal>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
