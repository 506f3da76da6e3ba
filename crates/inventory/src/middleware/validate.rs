use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;
use shared::errors::{FieldError, HttpError, ServiceError, ValidationKind};
use validator::Validate;

/// JSON body that has passed its `Validate` rules.
///
/// Unparseable bodies keep axum's rejection status (400/415). A field of the
/// wrong JSON type and any rule violation become a 400 carrying the
/// per-field error list.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(raw) = axum::Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::Rejected(
                    rejection.status(),
                    format!("Invalid JSON: {}", rejection.body_text()),
                )
            })?;

        let value: T = serde_path_to_error::deserialize(raw).map_err(type_mismatch)?;

        value
            .validate()
            .map_err(|errors| HttpError::from(ServiceError::from(errors)))?;

        Ok(Self(value))
    }
}

fn type_mismatch(err: serde_path_to_error::Error<serde_json::Error>) -> HttpError {
    // Only top-level object keys name a request field.
    let field = match err.path().iter().next() {
        Some(Segment::Map { key }) => key.clone(),
        _ => {
            return HttpError::Rejected(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid JSON: {}", err.inner()),
            );
        }
    };

    let error = if field == "quantity" {
        FieldError::new(field, ValidationKind::NonIntegerQuantity)
            .with_message("Quantity must be an integer.")
    } else {
        FieldError::new(field, ValidationKind::Invalid).with_message(err.inner().to_string())
    };

    HttpError::Validation(vec![error])
}
