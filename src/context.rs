//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every mission
//! interaction from the UI goes through here.

use leptos::prelude::*;
use mission_core::{MissionSession, Verdict, FIRST_MISSION_ID};

use crate::celebration::ConfettiNotifier;
use crate::config::EventConfig;
use crate::storage::LocalStorage;
use crate::store::{store_set_groups, AppStateStoreFields, AppStore};

pub type LiveSession = MissionSession<LocalStorage, ConfettiNotifier>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive view state
    pub store: AppStore,
    /// Mission session (source of truth, persisted)
    session: StoredValue<LiveSession>,
    /// Immutable event configuration
    config: StoredValue<EventConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, session: LiveSession, config: EventConfig) -> Self {
        Self {
            store,
            session: StoredValue::new(session),
            config: StoredValue::new(config),
        }
    }

    /// Read from the event configuration
    pub fn with_config<T>(&self, f: impl FnOnce(&EventConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Show a group on the map and in the tab view
    pub fn select_group(&self, group_id: &str) {
        if self.store.active_group().get_untracked() != group_id {
            self.store.active_group().set(group_id.to_string());
        }
    }

    /// Checkbox/row activation for a mission
    ///
    /// The secret mission opens the passcode prompt; everything else goes
    /// through the unlock gate, where a denial is a silent no-op.
    pub fn activate_mission(&self, group_id: &str, mission_id: u32) {
        self.select_group(group_id);

        if mission_id == FIRST_MISSION_ID {
            let done = self.session.with_value(|s| {
                s.group(group_id)
                    .and_then(|g| g.mission(FIRST_MISSION_ID))
                    .map(|m| m.completed)
                    .unwrap_or(false)
            });
            if !done {
                self.open_passcode(group_id);
            }
            return;
        }

        let toggled = self
            .session
            .try_update_value(|s| s.toggle(group_id, mission_id).is_ok())
            .unwrap_or(false);
        if toggled {
            self.sync_groups();
        }
    }

    /// Open (or restart) the passcode prompt for a group
    pub fn open_passcode(&self, group_id: &str) {
        self.store.passcode().write().open(group_id);
    }

    /// Start over with an empty buffer
    pub fn reset_passcode(&self) {
        let group_id = self
            .store
            .passcode()
            .with_untracked(|flow| flow.entry().map(|e| e.group_id.clone()));
        if let Some(group_id) = group_id {
            self.open_passcode(&group_id);
        }
    }

    /// Cancel the prompt without touching any mission
    pub fn close_passcode(&self) {
        self.store.passcode().write().close();
    }

    pub fn enter_digit(&self, index: usize, input: &str) {
        let verdict = self.with_config(|c| {
            self.store.passcode().write().enter_digit(&c.codebook, index, input)
        });
        self.apply_verdict(verdict);
    }

    pub fn paste_code(&self, text: &str) {
        let verdict = self.with_config(|c| self.store.passcode().write().paste(&c.codebook, text));
        self.apply_verdict(verdict);
    }

    pub fn backspace(&self, index: usize) {
        self.store.passcode().write().backspace(index);
    }

    fn apply_verdict(&self, verdict: Option<Verdict>) {
        let Some(verdict) = verdict else {
            return;
        };
        if let Verdict::Granted { .. } = verdict {
            self.session.update_value(|s| {
                s.apply_verdict(&verdict);
            });
            self.sync_groups();
        }
    }

    fn sync_groups(&self) {
        let groups = self.session.with_value(|s| s.groups().to_vec());
        store_set_groups(&self.store, groups);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
