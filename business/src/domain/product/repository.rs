use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

/// Storage port for products.
///
/// `save` is the only operation: the store assigns the identifier and hands
/// back the durable record.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
}
