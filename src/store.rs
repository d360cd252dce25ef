//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The mission
//! session stays the source of truth for groups; the store mirrors it
//! for rendering.

use leptos::prelude::*;
use mission_core::{Group, PasscodeFlow};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Live groups, mirrored from the mission session
    pub groups: Vec<Group>,
    /// Group shown on the map and in the mobile tab view
    pub active_group: String,
    /// Passcode prompt state
    pub passcode: PasscodeFlow,
}

impl AppState {
    pub fn new(groups: Vec<Group>, active_group: String, passcode: PasscodeFlow) -> Self {
        Self { groups, active_group, passcode }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Look up a group by ID (tracked)
pub fn store_group(store: &AppStore, group_id: &str) -> Option<Group> {
    store.groups().read().iter().find(|g| g.id == group_id).cloned()
}

/// Replace all groups in the store
pub fn store_set_groups(store: &AppStore, groups: Vec<Group>) {
    store.groups().set(groups);
}
