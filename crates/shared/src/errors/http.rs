use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, service::ServiceError,
    validation::FieldError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    Validation(Vec<FieldError>),
    Rejected(StatusCode, String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::Validation(errors),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Sqlx(err) => {
                    error!("❌ Storage failure: {err:?}");
                    HttpError::Internal("Database error".into())
                }
                RepositoryError::Custom(msg) => {
                    error!("❌ Repository failure: {msg}");
                    HttpError::Internal("Repository error".into())
                }
            },

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::Validation(errors) => {
                let message = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(format!("Validation failed: {message}"))
                        .with_errors(errors),
                )
            }
            HttpError::Rejected(status, msg) => (status, ErrorResponse::new(msg)),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            HttpError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
        };

        (status, Json(body)).into_response()
    }
}
