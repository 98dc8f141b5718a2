//! Application state for the leave balance engine API.

use std::sync::Arc;

use crate::config::LeavePolicy;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains the record store and the leave policy applied to newly
/// registered employees.
#[derive(Clone)]
pub struct AppState {
    store: Arc<MemoryStore>,
    policy: LeavePolicy,
}

impl AppState {
    /// Creates a new application state around the given store and policy.
    pub fn new(store: MemoryStore, policy: LeavePolicy) -> Self {
        Self {
            store: Arc::new(store),
            policy,
        }
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Returns the configured leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }
}
