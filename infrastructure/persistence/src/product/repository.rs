use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("Product insert failed: {}", err);
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::duplicated(),
        sqlx::Error::RowNotFound => RepositoryError::persistence(),
        _ => RepositoryError::database_error(),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn save(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        // id comes from the column default
        let entity = sqlx::query_as::<_, ProductEntity>(
            "INSERT INTO products (name, value) VALUES ($1, $2) RETURNING id, name, value",
        )
        .bind(product.name())
        .bind(product.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_row_to_persistence_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::Persistence
        ));
    }

    #[test]
    fn should_map_pool_timeout_to_database_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        ));
    }
}
