//! corkboard-server entry point.
//!
//! All configuration comes from the environment (a local `.env` is honored):
//! `DATABASE_URL` or the discrete `POSTGRES_*` variables for the store,
//! `PORT`, `CORS_ENABLED`, `AUTH_DOMAIN`, `AUTH_CLIENT_ID` for the server.

use tracing_subscriber::EnvFilter;

use corkboard_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env();
    run_server(config).await
}
