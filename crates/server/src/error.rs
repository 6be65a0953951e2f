use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calendar::CalendarError;
use database::error::StoreError;
use log::error;
use models::validation::ValidationErrors;
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with, mapped onto an HTTP response
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("record not found")]
    NotFound,
    #[error("store error: {0}")]
    Store(StoreError),
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    #[error("not signed in")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(&'static str),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(errors) => Self::Validation(errors),
            StoreError::NotFound(_) => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "validation failed", "fields": errors.fields() })),
            )
                .into_response(),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "record not found" })),
            )
                .into_response(),
            AppError::Store(err) => {
                error!("{err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Something went wrong, please try again later" })),
                )
                    .into_response()
            }
            AppError::Calendar(err) => {
                let status = match &err {
                    CalendarError::MissingCalendarId => StatusCode::CONFLICT,
                    CalendarError::MissingAccessToken => StatusCode::UNAUTHORIZED,
                    e if e.is_not_found() => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_GATEWAY,
                };
                if status == StatusCode::BAD_GATEWAY {
                    error!("{err}");
                }
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "not signed in" })),
            )
                .into_response(),
            AppError::Forbidden(reason) => {
                (StatusCode::FORBIDDEN, Json(json!({ "error": reason }))).into_response()
            }
        }
    }
}
