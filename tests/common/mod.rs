//! Common test utilities for polman integration tests
//!
//! Provides a shared fixture with a populated in-memory policy store.

#![allow(dead_code)]

use polman::{MemoryStore, PolicyKey, PolicyReader};
use serde_json::json;

// =============================================================================
// Well-Known Test Keys
// =============================================================================

pub const CONTROL_URL: PolicyKey = PolicyKey::from_static("ControlURL");
pub const ADMIN_CONSOLE: PolicyKey = PolicyKey::from_static("AdminConsole");
pub const UPDATE_CHECK: PolicyKey = PolicyKey::from_static("UpdateCheck");
pub const LOG_LIMIT: PolicyKey = PolicyKey::from_static("LogLimit");
pub const TELEMETRY: PolicyKey = PolicyKey::from_static("Telemetry");
pub const ALLOWED_SUGGESTIONS: PolicyKey = PolicyKey::from_static("AllowedSuggestions");
pub const KEEP_ALIVE: PolicyKey = PolicyKey::from_static("KeepAliveInterval");

// =============================================================================
// Test Fixture
// =============================================================================

/// A reader over a pre-populated in-memory store
///
/// The store handle is kept alongside the reader so tests can mutate
/// policy values mid-test (clones share the same map).
pub struct TestFixture {
    pub store: MemoryStore,
    pub reader: PolicyReader<MemoryStore>,
}

impl TestFixture {
    /// Fixture with one value of every primitive kind
    pub fn populated() -> Self {
        let store = MemoryStore::new()
            .with("ControlURL", "https://hq.example.com")
            .with("AdminConsole", "hide")
            .with("UpdateCheck", "always")
            .with("LogLimit", 4096)
            .with("Telemetry", false)
            .with("AllowedSuggestions", json!(["exit-node", "update"]))
            .with("KeepAliveInterval", "45s");
        Self::over(store)
    }

    /// Fixture with an empty store: every key reads as absent
    pub fn empty() -> Self {
        Self::over(MemoryStore::new())
    }

    fn over(store: MemoryStore) -> Self {
        Self {
            store: store.clone(),
            reader: PolicyReader::new(store),
        }
    }
}
