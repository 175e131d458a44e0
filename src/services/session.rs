//! Session state management
//!
//! Each logical session owns an independent usage ledger and request
//! counter; the page registry stays process-wide. The per-session mutex
//! serializes requests within a session, so the ledger itself needs no
//! locking.

use crate::config::QuotaConfig;
use crate::services::ledger::UsageLedger;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;

/// Session identifier used when the client sends none
pub const DEFAULT_SESSION: &str = "default";

/// Mutable state owned by one session
#[derive(Debug)]
pub struct SessionState {
    /// Remaining free generations per model
    pub ledger: UsageLedger,
    /// Total requests issued this session, across models
    pub n_requests: u32,
}

impl SessionState {
    pub fn new(quota: &QuotaConfig) -> Self {
        Self {
            ledger: UsageLedger::from_quota(quota),
            n_requests: 0,
        }
    }
}

/// Lazily-created map of session id to session state
///
/// The inner std mutex only guards the map; per-session state sits behind a
/// tokio mutex because it is held across the remote generation await.
#[derive(Debug)]
pub struct SessionManager {
    quota: QuotaConfig,
    sessions: Mutex<HashMap<String, Arc<AsyncMutex<SessionState>>>>,
}

impl SessionManager {
    pub fn new(quota: QuotaConfig) -> Self {
        Self {
            quota,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a session's state, creating it on first sight
    pub fn session(&self, session_id: &str) -> Arc<AsyncMutex<SessionState>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!("Creating session state for {}", session_id);
                Arc::new(AsyncMutex::new(SessionState::new(&self.quota)))
            })
            .clone()
    }

    /// Drop a session's state, resetting its quota and counter
    pub fn reset(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions.remove(session_id).is_some()
    }

    /// Number of sessions seen so far
    pub fn len(&self) -> usize {
        let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelId;

    fn test_quota() -> QuotaConfig {
        QuotaConfig {
            gpt35_uses: 3,
            gpt4_uses: 1,
            session_request_limit: 5,
        }
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let manager = SessionManager::new(test_quota());

        {
            let session = manager.session("alpha");
            let mut state = session.lock().await;
            state.ledger.decrement(ModelId::Gpt4, 1).unwrap();
            state.n_requests += 1;
        }

        let other = manager.session("beta");
        let state = other.lock().await;
        assert_eq!(state.ledger.usages_remaining(ModelId::Gpt4), 1);
        assert_eq!(state.n_requests, 0);
        assert_eq!(manager.len(), 2);
    }

    #[tokio::test]
    async fn test_session_state_persists_across_lookups() {
        let manager = SessionManager::new(test_quota());

        {
            let session = manager.session("alpha");
            session.lock().await.n_requests = 4;
        }

        let session = manager.session("alpha");
        assert_eq!(session.lock().await.n_requests, 4);
        assert_eq!(manager.len(), 1);
    }

    #[tokio::test]
    async fn test_reset_restores_fresh_state() {
        let manager = SessionManager::new(test_quota());

        {
            let session = manager.session("alpha");
            let mut state = session.lock().await;
            state.ledger.decrement(ModelId::Gpt35, 3).unwrap();
        }

        assert!(manager.reset("alpha"));
        assert!(!manager.reset("alpha"));

        let session = manager.session("alpha");
        let state = session.lock().await;
        assert_eq!(state.ledger.usages_remaining(ModelId::Gpt35), 3);
    }
}
