//! In-memory session registry.
//!
//! Maps opaque session tokens to verified user subjects for the life of the
//! process. Constructed once at startup and handed to every handler that
//! needs caller identity; it is never a free-floating static. There is no
//! eviction and no revocation - every successful verification grows the map
//! until the process exits. That is a known operational gap, not a bug.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

/// Concurrent token -> subject map. Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unconditionally. An existing token is overwritten,
    /// last-write-wins; tokens carry enough entropy that collision is not a
    /// case worth detecting.
    pub fn put(&self, token: impl Into<String>, subject: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), subject.into());
    }

    /// Look up the subject for a token. Never mutates.
    pub fn get(&self, token: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    /// Mint a fresh random token for a verified subject and register it.
    pub fn issue(&self, subject: impl Into<String>) -> String {
        let token = Uuid::new_v4().to_string();
        self.put(token.clone(), subject);
        token
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let sessions = SessionRegistry::new();
        sessions.put("tok-A", "user-42");

        assert_eq!(sessions.get("tok-A").as_deref(), Some("user-42"));
        assert_eq!(sessions.get("tok-B"), None);
    }

    #[test]
    fn put_overwrites_last_write_wins() {
        let sessions = SessionRegistry::new();
        sessions.put("tok-A", "user-1");
        sessions.put("tok-A", "user-2");

        assert_eq!(sessions.get("tok-A").as_deref(), Some("user-2"));
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn issue_registers_a_unique_token() {
        let sessions = SessionRegistry::new();
        let a = sessions.issue("user-1");
        let b = sessions.issue("user-1");

        assert_ne!(a, b);
        assert_eq!(sessions.get(&a).as_deref(), Some("user-1"));
        assert_eq!(sessions.get(&b).as_deref(), Some("user-1"));
    }

    #[test]
    fn concurrent_puts_and_gets_lose_nothing() {
        let sessions = SessionRegistry::new();
        let writers: Vec<_> = (0..32)
            .map(|i| {
                let sessions = sessions.clone();
                std::thread::spawn(move || {
                    sessions.put(format!("tok-{i}"), format!("user-{i}"));
                })
            })
            .collect();
        for handle in writers {
            handle.join().unwrap();
        }

        let readers: Vec<_> = (0..32)
            .map(|i| {
                let sessions = sessions.clone();
                std::thread::spawn(move || {
                    assert_eq!(
                        sessions.get(&format!("tok-{i}")),
                        Some(format!("user-{i}"))
                    );
                })
            })
            .collect();
        for handle in readers {
            handle.join().unwrap();
        }

        assert_eq!(sessions.len(), 32);
    }
}
