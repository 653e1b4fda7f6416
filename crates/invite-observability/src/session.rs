//! Page session identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

/// Identifies one storefront session in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new session ID.
    pub fn generate() -> Self {
        static SEQUENCE: AtomicU32 = AtomicU32::new(0);

        let now = chrono::Utc::now();
        let id = format!(
            "{:x}-{:x}-{:x}",
            now.timestamp_millis(),
            now.timestamp_subsec_nanos(),
            SEQUENCE.fetch_add(1, Ordering::Relaxed)
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
