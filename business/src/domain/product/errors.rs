use super::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.validation_failed")]
    Validation(Vec<FieldViolation>),
    #[error("repository.persistence")]
    Persistence(#[from] crate::domain::errors::RepositoryError),
}
