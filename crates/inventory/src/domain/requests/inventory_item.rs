use crate::domain::{
    normalized::{InventoryItemChanges, NewInventoryItem},
    requests::Patch,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use shared::errors::{FieldError, ServiceError, ValidationKind};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItemRequest {
    #[serde(default)]
    #[validate(
        required(message = "Name is required."),
        length(min = 1, message = "Name is required.")
    )]
    #[schema(value_type = String, example = "Widget")]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(nullable, example = "Blue plastic widget")]
    pub description: Option<String>,

    /// Raw JSON number so that fractional values can be reported as such.
    #[serde(default)]
    #[validate(
        required(message = "Quantity is required."),
        custom(function = "validate_quantity")
    )]
    #[schema(value_type = i32, minimum = 0, example = 50)]
    pub quantity: Option<Number>,

    #[serde(default)]
    #[validate(
        required(message = "Location is required."),
        length(min = 1, message = "Location is required.")
    )]
    #[schema(value_type = String, example = "Warehouse A")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i32>,

    #[serde(default, skip_serializing_if = "Patch::is_untouched")]
    #[validate(custom(function = "validate_name_patch"))]
    #[schema(value_type = Option<String>, example = "Widget")]
    pub name: Patch<String>,

    /// `null` clears the stored description, omission keeps it.
    #[serde(default, skip_serializing_if = "Patch::is_untouched")]
    #[schema(value_type = Option<String>, nullable)]
    pub description: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_untouched")]
    #[validate(custom(function = "validate_quantity_patch"))]
    #[schema(value_type = Option<i32>, minimum = 0, example = 75)]
    pub quantity: Patch<Number>,

    #[serde(default, skip_serializing_if = "Patch::is_untouched")]
    #[validate(custom(function = "validate_location_patch"))]
    #[schema(value_type = Option<String>, example = "Warehouse B")]
    pub location: Patch<String>,
}

impl CreateInventoryItemRequest {
    /// Checks every field constraint and produces the record to insert.
    /// A missing or `null` description becomes `None`.
    pub fn normalize(&self) -> Result<NewInventoryItem, ServiceError> {
        self.validate()?;

        let name = required("name", self.name.as_ref())?;
        let location = required("location", self.location.as_ref())?;
        let quantity = required("quantity", self.quantity.as_ref())
            .and_then(|number| field_quantity("quantity", number))?;

        Ok(NewInventoryItem {
            name: name.clone(),
            description: self.description.clone(),
            quantity,
            location: location.clone(),
            created_at: Utc::now(),
            updated_at: None,
        })
    }
}

impl UpdateInventoryItemRequest {
    /// Checks the constraints of the fields that are present and returns the
    /// target id together with the changes to apply.
    pub fn normalize(&self) -> Result<(i32, InventoryItemChanges), ServiceError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => FieldError::from_validation_errors(&errors),
        };

        if self.id.is_none() {
            errors.push(
                FieldError::new("id", ValidationKind::MissingField).with_message("Id is required."),
            );
            errors.sort_by(|a, b| a.field.cmp(&b.field));
        }

        let Some(id) = self.id else {
            return Err(ServiceError::Validation(errors));
        };
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let quantity = match &self.quantity {
            Patch::Untouched => None,
            Patch::Cleared => {
                return Err(FieldError::new("quantity", ValidationKind::NotNullable).into());
            }
            Patch::Set(number) => Some(field_quantity("quantity", number)?),
        };

        let changes = InventoryItemChanges {
            name: non_nullable("name", &self.name)?,
            description: self.description.clone(),
            quantity,
            location: non_nullable("location", &self.location)?,
        };

        Ok((id, changes))
    }
}

fn required<'a, T>(field: &'static str, value: Option<&'a T>) -> Result<&'a T, FieldError> {
    value.ok_or_else(|| FieldError::new(field, ValidationKind::MissingField))
}

fn non_nullable(field: &'static str, patch: &Patch<String>) -> Result<Option<String>, FieldError> {
    match patch {
        Patch::Untouched => Ok(None),
        Patch::Cleared => Err(FieldError::new(field, ValidationKind::NotNullable)),
        Patch::Set(value) => Ok(Some(value.clone())),
    }
}

fn field_quantity(field: &'static str, number: &Number) -> Result<i32, FieldError> {
    quantity_from_number(number).map_err(|kind| {
        FieldError::new(field, kind).with_message(quantity_message(kind))
    })
}

/// Integral JSON numbers (including `5.0`) in `0..=i32::MAX`.
pub fn quantity_from_number(number: &Number) -> Result<i32, ValidationKind> {
    let whole: i128 = if let Some(value) = number.as_i64() {
        i128::from(value)
    } else if let Some(value) = number.as_u64() {
        i128::from(value)
    } else {
        match number.as_f64() {
            Some(value) if value.is_finite() && value.fract() == 0.0 => {
                if value < 0.0 {
                    return Err(ValidationKind::NegativeQuantity);
                }
                if value > f64::from(i32::MAX) {
                    return Err(ValidationKind::OutOfRange);
                }
                value as i128
            }
            _ => return Err(ValidationKind::NonIntegerQuantity),
        }
    };

    if whole < 0 {
        return Err(ValidationKind::NegativeQuantity);
    }

    i32::try_from(whole).map_err(|_| ValidationKind::OutOfRange)
}

fn quantity_message(kind: ValidationKind) -> &'static str {
    match kind {
        ValidationKind::NegativeQuantity => "Quantity must be a non-negative integer.",
        ValidationKind::NonIntegerQuantity => "Quantity must be an integer.",
        ValidationKind::OutOfRange => "Quantity is too large.",
        _ => "Quantity is invalid.",
    }
}

fn violation(kind: ValidationKind, message: &'static str) -> ValidationError {
    ValidationError::new(kind.code()).with_message(Cow::Borrowed(message))
}

fn validate_quantity(number: &Number) -> Result<(), ValidationError> {
    quantity_from_number(number)
        .map(|_| ())
        .map_err(|kind| violation(kind, quantity_message(kind)))
}

fn validate_quantity_patch(patch: &Patch<Number>) -> Result<(), ValidationError> {
    match patch {
        Patch::Untouched => Ok(()),
        Patch::Cleared => Err(violation(
            ValidationKind::NotNullable,
            "Quantity cannot be null.",
        )),
        Patch::Set(number) => validate_quantity(number),
    }
}

fn validate_text_patch(
    patch: &Patch<String>,
    empty_message: &'static str,
    null_message: &'static str,
) -> Result<(), ValidationError> {
    match patch {
        Patch::Untouched => Ok(()),
        Patch::Cleared => Err(violation(ValidationKind::NotNullable, null_message)),
        Patch::Set(value) if value.is_empty() => {
            Err(violation(ValidationKind::EmptyString, empty_message))
        }
        Patch::Set(_) => Ok(()),
    }
}

fn validate_name_patch(patch: &Patch<String>) -> Result<(), ValidationError> {
    validate_text_patch(patch, "Name is required.", "Name cannot be null.")
}

fn validate_location_patch(patch: &Patch<String>) -> Result<(), ValidationError> {
    validate_text_patch(patch, "Location is required.", "Location cannot be null.")
}
