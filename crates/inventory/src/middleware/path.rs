use axum::{
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::request::Parts,
};
use shared::errors::{FieldError, HttpError, ValidationKind};

/// Integer `{id}` path segment. Non-integer ids are reported as a field
/// error on `id` instead of axum's plain-text rejection.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::FailedToDeserializePathParams(_) => {
                    HttpError::Validation(vec![
                        FieldError::new("id", ValidationKind::Invalid)
                            .with_message("Id must be an integer."),
                    ])
                }
                other => HttpError::Rejected(other.status(), other.body_text()),
            })?;

        Ok(Self(id))
    }
}
