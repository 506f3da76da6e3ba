use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Which constraint a request field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationKind {
    MissingField,
    EmptyString,
    NegativeQuantity,
    NonIntegerQuantity,
    OutOfRange,
    NotNullable,
    Invalid,
}

impl ValidationKind {
    /// Error code carried by `validator::ValidationError`.
    pub const fn code(self) -> &'static str {
        match self {
            ValidationKind::MissingField => "required",
            ValidationKind::EmptyString => "length",
            ValidationKind::NegativeQuantity => "negative_quantity",
            ValidationKind::NonIntegerQuantity => "non_integer_quantity",
            ValidationKind::OutOfRange => "out_of_range",
            ValidationKind::NotNullable => "not_nullable",
            ValidationKind::Invalid => "invalid",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "required" => ValidationKind::MissingField,
            "length" => ValidationKind::EmptyString,
            "negative_quantity" => ValidationKind::NegativeQuantity,
            "non_integer_quantity" => ValidationKind::NonIntegerQuantity,
            "out_of_range" | "range" => ValidationKind::OutOfRange,
            "not_nullable" => ValidationKind::NotNullable,
            _ => ValidationKind::Invalid,
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            ValidationKind::MissingField => "Field is required",
            ValidationKind::EmptyString => "Field must not be empty",
            ValidationKind::NegativeQuantity => "Quantity must be a non-negative integer",
            ValidationKind::NonIntegerQuantity => "Quantity must be an integer",
            ValidationKind::OutOfRange => "Value out of range",
            ValidationKind::NotNullable => "Field cannot be null",
            ValidationKind::Invalid => "Invalid value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub kind: ValidationKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ValidationKind) -> Self {
        Self {
            field: field.into(),
            kind,
            message: kind.default_message().to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Flattens derive-level errors, ordered by field name.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut out: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| {
                    let kind = ValidationKind::from_code(error.code.as_ref());
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| kind.default_message().to_string());
                    FieldError {
                        field: field.to_string(),
                        kind,
                        message,
                    }
                })
            })
            .collect();

        out.sort_by(|a, b| a.field.cmp(&b.field));
        out
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn codes_round_trip_to_kinds() {
        for kind in [
            ValidationKind::MissingField,
            ValidationKind::EmptyString,
            ValidationKind::NegativeQuantity,
            ValidationKind::NonIntegerQuantity,
            ValidationKind::OutOfRange,
            ValidationKind::NotNullable,
            ValidationKind::Invalid,
        ] {
            assert_eq!(ValidationKind::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn flattens_and_sorts_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("quantity", ValidationError::new("negative_quantity"));
        errors.add(
            "location",
            ValidationError::new("length").with_message("Location is required.".into()),
        );

        let flat = FieldError::from_validation_errors(&errors);

        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].field, "location");
        assert_eq!(flat[0].kind, ValidationKind::EmptyString);
        assert_eq!(flat[0].message, "Location is required.");
        assert_eq!(flat[1].field, "quantity");
        assert_eq!(flat[1].kind, ValidationKind::NegativeQuantity);
    }

    #[test]
    fn kinds_serialize_kebab_case() {
        let json = serde_json::to_string(&ValidationKind::NonIntegerQuantity).unwrap();
        assert_eq!(json, "\"non-integer-quantity\"");
    }
}
