//! Authentication endpoint.
//!
//! POST /auth takes a bearer ID token, verifies it with the configured
//! identity provider, gates on the allowed email domain, and mints a session
//! token into the registry. The session token in the response is what the
//! client presents on later authenticated calls.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};

use crate::auth::AuthError;
use crate::envelope::StructuredResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", post(authenticate))
        .route("/auth/session", axum::routing::get(whoami))
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let raw = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;
    match raw.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::unauthorized("malformed Authorization header")),
    }
}

/// POST /auth
async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StructuredResponse<String>>, ApiError> {
    let token = bearer_token(&headers)?;

    let identity = state.verifier().verify(token).await.map_err(|err| match err {
        AuthError::Rejected => ApiError::unauthorized("authentication failed"),
        AuthError::Unavailable(reason) => {
            tracing::error!("identity provider unreachable: {reason}");
            ApiError::unauthorized("authentication failed")
        }
    })?;

    if let Some(domain) = state.auth_domain() {
        if !identity
            .email
            .ends_with(&format!("@{domain}"))
        {
            return Err(ApiError::unauthorized(format!(
                "authentication failed: not from the {domain} domain"
            )));
        }
    }

    let session = state.sessions().issue(identity.subject);
    tracing::info!(sessions = state.sessions().len(), "session issued");
    Ok(Json(StructuredResponse::ok_with_message(
        "Authenticated",
        session,
    )))
}

/// GET /auth/session - resolve a session token back to its subject.
///
/// This is the lookup every authenticated handler performs to recover who
/// is calling; exposed directly so clients can check a stored token.
async fn whoami(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StructuredResponse<String>>, ApiError> {
    let token = bearer_token(&headers)?;
    let subject = state
        .sessions()
        .get(token)
        .ok_or_else(|| ApiError::unauthorized("unknown session"))?;
    Ok(Json(StructuredResponse::ok(subject)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok-123"));
        assert_eq!(bearer_token(&headers).unwrap(), "tok-123");
    }

    #[test]
    fn missing_or_malformed_headers_are_rejected() {
        let headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("tok-123"));
        assert!(bearer_token(&headers).is_err());

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_err());
    }
}
