//! Identity verification seam.
//!
//! The provider is opaque to the rest of the server: hand it a bearer token,
//! get back a verified subject and email or a failure. The production
//! implementation asks Google's tokeninfo endpoint; tests plug in a stub.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// What a successful verification yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-scoped stable subject identifier.
    pub subject: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// The token did not verify (expired, wrong audience, garbage).
    #[error("token rejected")]
    Rejected,

    /// The provider could not be reached.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Verifies Google ID tokens against the tokeninfo endpoint.
pub struct GoogleVerifier {
    client: reqwest::Client,
    client_id: String,
    endpoint: String,
}

#[derive(Deserialize)]
struct TokenInfo {
    aud: String,
    sub: String,
    email: Option<String>,
}

impl GoogleVerifier {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.into(),
            endpoint: "https://oauth2.googleapis.com/tokeninfo".to_string(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for GoogleVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("id_token", token)])
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected);
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        // A token minted for someone else's client is not ours to accept.
        if info.aud != self.client_id {
            tracing::warn!(aud = %info.aud, "token audience mismatch");
            return Err(AuthError::Rejected);
        }

        let email = info.email.ok_or(AuthError::Rejected)?;
        Ok(Identity {
            subject: info.sub,
            email,
        })
    }
}

/// Accepts a fixed token table. Test and local-development use only.
#[derive(Default)]
pub struct StaticVerifier {
    identities: std::collections::HashMap<String, Identity>,
}

impl StaticVerifier {
    pub fn with_identity(
        mut self,
        token: impl Into<String>,
        subject: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.identities.insert(
            token.into(),
            Identity {
                subject: subject.into(),
                email: email.into(),
            },
        );
        self
    }
}

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        self.identities.get(token).cloned().ok_or(AuthError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_verifier_resolves_known_tokens() {
        let verifier =
            StaticVerifier::default().with_identity("tok-A", "user-42", "ana@example.edu");

        let identity = verifier.verify("tok-A").await.unwrap();
        assert_eq!(identity.subject, "user-42");
        assert_eq!(identity.email, "ana@example.edu");

        assert!(matches!(
            verifier.verify("tok-B").await,
            Err(AuthError::Rejected)
        ));
    }
}
