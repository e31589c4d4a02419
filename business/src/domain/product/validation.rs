use super::errors::ProductError;
use super::model::NewProduct;
use super::use_cases::create::CreateProductParams;

pub const NAME_FIELD: &str = "name";
pub const VALUE_FIELD: &str = "value";

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationReason {
    /// The field was absent or null.
    Missing,
    /// The field was present but empty or whitespace only.
    Blank,
}

impl std::fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationReason::Missing => write!(f, "missing"),
            ViolationReason::Blank => write!(f, "blank"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: ViolationReason,
}

impl FieldViolation {
    pub fn new(field: &'static str, reason: ViolationReason) -> Self {
        Self { field, reason }
    }
}

/// Checks a name for presence and at least one non-whitespace character.
pub fn validate_name(name: Option<&str>) -> Option<FieldViolation> {
    match name {
        None => Some(FieldViolation::new(NAME_FIELD, ViolationReason::Missing)),
        Some(n) if n.trim().is_empty() => {
            Some(FieldViolation::new(NAME_FIELD, ViolationReason::Blank))
        }
        Some(_) => None,
    }
}

/// Checks a value for presence. Any number is accepted, including zero and
/// negatives.
pub fn validate_value<T>(value: Option<&T>) -> Option<FieldViolation> {
    match value {
        None => Some(FieldViolation::new(VALUE_FIELD, ViolationReason::Missing)),
        Some(_) => None,
    }
}

/// Validates creation input and maps it field by field onto a [`NewProduct`].
///
/// Every failing field is reported, in declaration order. The name is kept
/// exactly as received (no trimming).
pub fn validate_create(params: CreateProductParams) -> Result<NewProduct, ProductError> {
    let violations: Vec<FieldViolation> = [
        validate_name(params.name.as_deref()),
        validate_value(params.value.as_ref()),
    ]
    .into_iter()
    .flatten()
    .collect();

    match (params.name, params.value) {
        (Some(name), Some(value)) if violations.is_empty() => Ok(NewProduct { name, value }),
        _ => Err(ProductError::Validation(violations)),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use proptest::prelude::*;

    use super::*;

    fn params(name: Option<&str>, value: Option<&str>) -> CreateProductParams {
        CreateProductParams {
            name: name.map(str::to_string),
            value: value.map(|v| BigDecimal::from_str(v).unwrap()),
        }
    }

    fn violations_of(result: Result<NewProduct, ProductError>) -> Vec<FieldViolation> {
        match result {
            Err(ProductError::Validation(violations)) => violations,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn should_accept_name_and_value() {
        let product = validate_create(params(Some("Keyboard"), Some("49.90"))).unwrap();

        assert_eq!(product.name(), "Keyboard");
        assert_eq!(product.value(), &BigDecimal::from_str("49.90").unwrap());
    }

    #[test]
    fn should_keep_surrounding_whitespace_in_name() {
        let product = validate_create(params(Some("  Mouse "), Some("10"))).unwrap();

        assert_eq!(product.name(), "  Mouse ");
    }

    #[test]
    fn should_accept_zero_and_negative_values() {
        assert!(validate_create(params(Some("Free sample"), Some("0"))).is_ok());
        assert!(validate_create(params(Some("Refund"), Some("-5.25"))).is_ok());
    }

    #[test]
    fn should_reject_empty_name_as_blank() {
        let violations = violations_of(validate_create(params(Some(""), Some("10.0"))));

        assert_eq!(
            violations,
            vec![FieldViolation::new(NAME_FIELD, ViolationReason::Blank)]
        );
    }

    #[test]
    fn should_reject_whitespace_name_as_blank() {
        let violations = violations_of(validate_create(params(Some(" \t\n"), Some("10.0"))));

        assert_eq!(
            violations,
            vec![FieldViolation::new(NAME_FIELD, ViolationReason::Blank)]
        );
    }

    #[test]
    fn should_reject_absent_name_as_missing() {
        let violations = violations_of(validate_create(params(None, Some("10.0"))));

        assert_eq!(
            violations,
            vec![FieldViolation::new(NAME_FIELD, ViolationReason::Missing)]
        );
    }

    #[test]
    fn should_reject_absent_value_as_missing() {
        let violations = violations_of(validate_create(params(Some("Mouse"), None)));

        assert_eq!(
            violations,
            vec![FieldViolation::new(VALUE_FIELD, ViolationReason::Missing)]
        );
    }

    #[test]
    fn should_report_every_failing_field() {
        let violations = violations_of(validate_create(params(Some("   "), None)));

        assert_eq!(
            violations,
            vec![
                FieldViolation::new(NAME_FIELD, ViolationReason::Blank),
                FieldViolation::new(VALUE_FIELD, ViolationReason::Missing),
            ]
        );
    }

    #[test]
    fn should_display_reason_as_code() {
        assert_eq!(ViolationReason::Missing.to_string(), "missing");
        assert_eq!(ViolationReason::Blank.to_string(), "blank");
    }

    proptest! {
        #[test]
        fn any_name_with_visible_char_is_copied_verbatim(
            prefix in "\\s{0,3}",
            body in "[A-Za-z0-9][A-Za-z0-9 ]{0,20}",
            cents in -1_000_000i64..1_000_000i64,
        ) {
            let name = format!("{}{}", prefix, body);
            let value = BigDecimal::new(cents.into(), 2);

            let product = validate_create(CreateProductParams {
                name: Some(name.clone()),
                value: Some(value.clone()),
            })
            .unwrap();

            prop_assert_eq!(product.name(), name.as_str());
            prop_assert_eq!(product.value(), &value);
        }

        #[test]
        fn whitespace_only_names_are_blank(name in "[ \\t\\r\\n]{0,10}") {
            let violations = violations_of(validate_create(CreateProductParams {
                name: Some(name),
                value: Some(BigDecimal::from(1)),
            }));

            prop_assert_eq!(
                violations,
                vec![FieldViolation::new(NAME_FIELD, ViolationReason::Blank)]
            );
        }
    }
}
