//! Gateway session reference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque reference to the gateway session a message originated from.
///
/// Carried through the envelope so handlers can answer the originating
/// connection; the core never interprets it beyond the uid binding check.
/// Session lifecycle itself is managed by the gateway, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session id assigned by the gateway
    pub sid: String,
    /// Bound user id; 0 until the connection authenticates
    pub uid: i64,
    /// Client address
    pub ip: String,
    /// Per-session string metadata
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl Session {
    pub fn new(sid: impl Into<String>, uid: i64, ip: impl Into<String>) -> Self {
        Self {
            sid: sid.into(),
            uid,
            ip: ip.into(),
            data: HashMap::new(),
        }
    }

    /// True once the session is bound to an authenticated user
    pub fn is_bound(&self) -> bool {
        self.uid > 0
    }
}
