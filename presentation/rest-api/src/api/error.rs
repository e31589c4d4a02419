use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// A single rejected request field.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldErrorResponse {
    /// Name of the offending field
    pub field: String,
    /// Why it was rejected: `missing` or `blank`
    pub reason: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind, e.g. `ValidationError` or `PersistenceError`
    pub name: String,
    /// Code-style message
    pub message: String,
    /// Per-field details, only present for validation failures
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<Vec<FieldErrorResponse>>,
}

impl ErrorResponse {
    /// Body shared by every field-level rejection.
    pub fn validation(fields: Vec<FieldErrorResponse>) -> Self {
        Self {
            name: "ValidationError".to_string(),
            message: "product.validation_failed".to_string(),
            fields: Some(fields),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
