//! API error type with automatic HTTP status mapping.
//!
//! The data layer hands back an unambiguous signal (tagged outcome or
//! `StoreError`); this is where that signal picks a status code. Store
//! failures are logged here and surface as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use corkboard_store::StoreError;

use crate::envelope::StructuredResponse;

#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { resource: &'static str, id: i32 },

    /// Identity verification failed (401)
    Unauthorized { reason: String },

    /// Malformed request the framework didn't already reject (400)
    BadRequest { message: String },

    /// Store failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, format!("{resource} {id} not found"))
            }
            Self::Unauthorized { reason } => (StatusCode::UNAUTHORIZED, reason.clone()),
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Store(err) => {
                tracing::error!("store error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
        };

        let body = StructuredResponse::<()>::error(message);
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_404() {
        let response = ApiError::not_found("message", 7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unauthorized_is_401() {
        let response = ApiError::unauthorized("bad token").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn store_failure_is_500() {
        let err = ApiError::Store(StoreError::Config("broken".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
