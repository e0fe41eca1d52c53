//! In-memory victim session storage.

use std::sync::RwLock;

use serde::Deserialize;

use crate::error_handling::VictimError;

/// Session returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct VictimSession {
    /// Opaque session token passed as a query parameter
    #[serde(default)]
    pub session: String,
    /// Everything else the login response carried
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl VictimSession {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            metadata: serde_json::Map::new(),
        }
    }
}

/// Holds at most one victim session.
///
/// Setting a session discards the previous one. Expiry is only ever discovered
/// by the server rejecting a request, never here.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<VictimSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_session(&self, session: VictimSession) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(session);
    }

    /// Returns the held session, or [`VictimError::NoSession`] if none was ever set.
    pub fn get_session(&self) -> Result<VictimSession, VictimError> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone().ok_or(VictimError::NoSession)
    }
}
