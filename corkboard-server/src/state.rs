//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use corkboard_store::{SessionRegistry, Store};

use crate::auth::IdentityVerifier;

/// Shared state: the store handle, the session registry, and the identity
/// verifier. Cloning is cheap; everything inside is shared.
#[derive(Clone)]
pub struct AppState {
    store: Store,
    sessions: SessionRegistry,
    verifier: Arc<dyn IdentityVerifier>,
    /// Email domain allowed through /auth, e.g. "example.edu". None admits any.
    auth_domain: Option<String>,
}

impl AppState {
    pub fn new(
        store: Store,
        sessions: SessionRegistry,
        verifier: Arc<dyn IdentityVerifier>,
        auth_domain: Option<String>,
    ) -> Self {
        Self {
            store,
            sessions,
            verifier,
            auth_domain,
        }
    }

    pub fn pool(&self) -> &PgPool {
        self.store.pool()
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn verifier(&self) -> &dyn IdentityVerifier {
        self.verifier.as_ref()
    }

    pub fn auth_domain(&self) -> Option<&str> {
        self.auth_domain.as_deref()
    }
}
