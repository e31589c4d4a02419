use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, response) = match self {
            ProductError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(
                    violations
                        .into_iter()
                        .map(|v| FieldErrorResponse {
                            field: v.field.to_string(),
                            reason: v.reason.to_string(),
                        })
                        .collect(),
                ),
            ),
            // Surface the repository code, e.g. "repository.database_error".
            ProductError::Persistence(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    name: "PersistenceError".to_string(),
                    message: err.to_string(),
                    fields: None,
                },
            ),
        };

        (status, Json(response))
    }
}
