//! corkboard-server: HTTP surface for the corkboard message board.
//!
//! The routing layer stays thin: extract parameters, call one repository
//! operation (resolving caller identity through the session registry where
//! needed), wrap the typed result in the response envelope. Everything with
//! real invariants lives in `corkboard-store`.

pub mod auth;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use corkboard_store::{SessionRegistry, Store, StoreConfig};

use crate::auth::{GoogleVerifier, IdentityVerifier, StaticVerifier};
pub use crate::state::AppState;

/// Default HTTP port when `PORT` is unset.
const DEFAULT_HTTP_PORT: u16 = 4567;

/// Server configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// Inject permissive CORS headers. Off unless `CORS_ENABLED=true`.
    pub cors_enabled: bool,

    /// Email domain admitted through /auth; None admits any verified email.
    pub auth_domain: Option<String>,

    /// OAuth client id for the Google verifier. Without one, /auth rejects
    /// everything - the server still serves unauthenticated routes.
    pub auth_client_id: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            cors_enabled: std::env::var("CORS_ENABLED")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            auth_domain: std::env::var("AUTH_DOMAIN").ok(),
            auth_client_id: std::env::var("AUTH_CLIENT_ID").ok(),
        }
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState, cors_enabled: bool) -> Router {
    let mut app = Router::new()
        .merge(routes::messages::router())
        .merge(routes::users::router())
        .merge(routes::votes::router())
        .merge(routes::comments::router())
        .merge(routes::auth::router());

    if cors_enabled {
        tracing::warn!("CORS: permissive mode enabled - all origins allowed");
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Connect the store and run the HTTP server until shutdown.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let store_config = StoreConfig::from_env()?;
    let store = Store::connect(&store_config).await?;

    let verifier: Arc<dyn IdentityVerifier> = match &config.auth_client_id {
        Some(client_id) => Arc::new(GoogleVerifier::new(client_id)),
        None => {
            tracing::warn!("AUTH_CLIENT_ID unset; /auth will reject all tokens");
            Arc::new(StaticVerifier::default())
        }
    };

    let state = AppState::new(
        store.clone(),
        SessionRegistry::new(),
        verifier,
        config.auth_domain.clone(),
    );
    let app = build_router(state, config.cors_enabled);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
