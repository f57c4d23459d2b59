//! Authentication flow over the assembled router.
//!
//! These tests never reach the database: the store handle is a lazy pool
//! and the identity provider is a fixed token table, so what is exercised
//! is exactly the /auth contract - verify, domain gate, session issuance,
//! and session lookup.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use corkboard_server::auth::StaticVerifier;
use corkboard_server::{build_router, AppState};
use corkboard_store::{SessionRegistry, Store, StoreConfig};

fn test_state(domain: Option<&str>) -> AppState {
    let cfg = StoreConfig::from_parts("localhost", 5432, "unused", "nobody", "nothing");
    let verifier = StaticVerifier::default()
        .with_identity("id-tok", "user-42", "ana@campus.edu")
        .with_identity("outsider-tok", "user-99", "bob@elsewhere.com");
    AppState::new(
        Store::connect_lazy(&cfg),
        SessionRegistry::new(),
        Arc::new(verifier),
        domain.map(String::from),
    )
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn auth_issues_a_usable_session() {
    let state = test_state(Some("campus.edu"));
    let sessions = state.sessions().clone();
    let app = build_router(state, false);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth")
                .header(header::AUTHORIZATION, "Bearer id-tok")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    let session = body["data"].as_str().expect("session token").to_string();

    // The registry now knows the caller.
    assert_eq!(sessions.get(&session).as_deref(), Some("user-42"));

    // And the session resolves back to its subject over HTTP.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/session")
                .header(header::AUTHORIZATION, format!("Bearer {session}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["data"], "user-42");
}

#[tokio::test]
async fn unverifiable_tokens_are_unauthorized() {
    let app = build_router(test_state(Some("campus.edu")), false);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth")
                .header(header::AUTHORIZATION, "Bearer forged")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn wrong_email_domain_is_rejected() {
    let app = build_router(test_state(Some("campus.edu")), false);

    // The token verifies, but the email is not from the allowed domain.
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth")
                .header(header::AUTHORIZATION, "Bearer outsider-tok")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn any_domain_is_admitted_when_unset() {
    let app = build_router(test_state(None), false);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth")
                .header(header::AUTHORIZATION, "Bearer outsider-tok")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_sessions_do_not_resolve() {
    let app = build_router(test_state(Some("campus.edu")), false);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/session")
                .header(header::AUTHORIZATION, "Bearer never-issued")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
