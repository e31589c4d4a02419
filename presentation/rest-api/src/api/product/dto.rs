use std::str::FromStr;

use bigdecimal::BigDecimal;
use poem_openapi::Object;
use serde_json::{Number, Value};

use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;

use crate::api::error::FieldErrorResponse;

/// Body of `POST /products`.
///
/// Both fields are optional here so that a missing one is reported by
/// validation as a field error instead of a body parse failure. `value` is
/// kept as raw JSON so its digits reach the decimal untouched
/// (serde_json is built with `arbitrary_precision`).
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (must contain at least one non-whitespace character)
    pub name: Option<String>,
    /// Product value as a JSON number, any precision
    pub value: Option<Value>,
}

impl TryFrom<CreateProductRequest> for CreateProductParams {
    type Error = FieldErrorResponse;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        let value = match request.value {
            None | Some(Value::Null) => None,
            Some(Value::Number(number)) => Some(decimal_from_wire(&number)?),
            Some(_) => return Err(not_a_number()),
        };

        Ok(Self {
            name: request.name,
            value,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product value as a JSON number with the stored digits
    pub value: Value,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            value: decimal_to_wire(&product.value),
        }
    }
}

fn not_a_number() -> FieldErrorResponse {
    FieldErrorResponse {
        field: "value".to_string(),
        reason: "not_a_number".to_string(),
    }
}

/// Reads the literal text of the number, e.g. `12345678901234567.89`.
fn decimal_from_wire(number: &Number) -> Result<BigDecimal, FieldErrorResponse> {
    BigDecimal::from_str(&number.to_string()).map_err(|_| not_a_number())
}

/// Writes the decimal text back as a JSON number token.
fn decimal_to_wire(value: &BigDecimal) -> Value {
    serde_json::from_str::<Number>(&value.to_string())
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn number(raw: &str) -> Value {
        Value::Number(serde_json::from_str::<Number>(raw).unwrap())
    }

    #[test]
    fn should_copy_request_fields_into_params() {
        let params = CreateProductParams::try_from(CreateProductRequest {
            name: Some(" Keyboard ".to_string()),
            value: Some(number("49.90")),
        })
        .unwrap();

        assert_eq!(params.name.as_deref(), Some(" Keyboard "));
        assert_eq!(params.value, Some(BigDecimal::from_str("49.90").unwrap()));
    }

    #[test]
    fn should_keep_every_digit_of_value() {
        let params = CreateProductParams::try_from(CreateProductRequest {
            name: Some("Ledger".to_string()),
            value: Some(number("12345678901234567.89")),
        })
        .unwrap();

        assert_eq!(
            params.value.unwrap().to_string(),
            "12345678901234567.89"
        );
    }

    #[test]
    fn should_keep_absent_and_null_fields_absent() {
        let params = CreateProductParams::try_from(CreateProductRequest {
            name: None,
            value: Some(Value::Null),
        })
        .unwrap();

        assert!(params.name.is_none());
        assert!(params.value.is_none());
    }

    #[test]
    fn should_reject_non_numeric_value() {
        let err = CreateProductParams::try_from(CreateProductRequest {
            name: Some("Mouse".to_string()),
            value: Some(Value::String("12.5".to_string())),
        })
        .unwrap_err();

        assert_eq!(err.field, "value");
        assert_eq!(err.reason, "not_a_number");
    }

    #[test]
    fn should_render_product_with_exact_value() {
        let id = Uuid::new_v4();
        let response: ProductResponse = Product::from_repository(
            id,
            "Mouse".to_string(),
            BigDecimal::from_str("12345678901234567.89").unwrap(),
        )
        .into();

        assert_eq!(response.id, id.to_string());
        assert_eq!(response.name, "Mouse");
        assert_eq!(
            serde_json::to_string(&response.value).unwrap(),
            "12345678901234567.89"
        );
    }
}
