//! Mission Session
//!
//! Owns the live group collection for one app session: reconciles it
//! against storage once on open, routes toggles through the unlock
//! policy, applies passcode verdicts, persists after every mutation and
//! fires celebrations. Nothing in here fails outward.

use crate::kv::KeyValueStore;
use crate::model::{find_group, Group};
use crate::notify::{Celebration, Notifier};
use crate::passcode::Verdict;
use crate::reconcile::{decode_groups, reconcile};
use crate::unlock::{grant_first_mission, is_interactable, request_toggle, Denial, FIRST_MISSION_ID};
use crate::error::MissionResult;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "trip-missions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Key holding the serialized group list
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_string() }
    }
}

pub struct MissionSession<S, N> {
    config: SessionConfig,
    groups: Vec<Group>,
    store: S,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> MissionSession<S, N> {
    /// Reconcile stored progress against `defaults` and write the result
    /// back only when it differs from what was stored
    pub fn open(config: SessionConfig, defaults: &[Group], store: S, notifier: N) -> Self {
        let stored = match store.get_item(&config.storage_key) {
            Ok(raw) => raw.as_deref().and_then(decode_groups),
            Err(e) => {
                log::warn!("could not read {}: {}", config.storage_key, e);
                None
            }
        };
        let groups = reconcile(defaults, stored.as_deref());

        let session = Self { config, groups, store, notifier };
        if stored.as_ref() != Some(&session.groups) {
            session.persist();
        }
        log::info!(
            "mission session opened ({} groups, restored={})",
            session.groups.len(),
            stored.is_some()
        );
        session
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, group_id: &str) -> Option<&Group> {
        find_group(&self.groups, group_id)
    }

    pub fn is_interactable(&self, group_id: &str, mission_id: u32) -> bool {
        self.group(group_id)
            .map(|g| is_interactable(g, mission_id))
            .unwrap_or(false)
    }

    /// Toggle a mission through the unlock gate
    ///
    /// A denial leaves the session untouched; it is not an error.
    pub fn toggle(&mut self, group_id: &str, mission_id: u32) -> Result<(), Denial> {
        let outcome = request_toggle(&self.groups, group_id, mission_id);
        if let Some(denial) = outcome.denial {
            log::debug!("toggle {}/{} denied: {:?}", group_id, mission_id, denial);
            return Err(denial);
        }
        self.commit(outcome.groups);
        self.celebrate_if_completed(group_id, mission_id);
        Ok(())
    }

    /// Apply the verdict of a passcode prompt. Returns whether the
    /// secret mission got completed.
    pub fn apply_verdict(&mut self, verdict: &Verdict) -> bool {
        match verdict {
            Verdict::Granted { group_id } => self.complete_first_mission(group_id),
            Verdict::Rejected { .. } => false,
        }
    }

    /// Mark mission 1 of `group_id` completed
    pub fn complete_first_mission(&mut self, group_id: &str) -> bool {
        let already_done = self
            .group(group_id)
            .and_then(|g| g.mission(FIRST_MISSION_ID))
            .map(|m| m.completed)
            .unwrap_or(false);
        if already_done {
            return false;
        }
        match grant_first_mission(&self.groups, group_id) {
            Some(groups) => {
                self.commit(groups);
                self.celebrate_if_completed(group_id, FIRST_MISSION_ID);
                true
            }
            None => {
                log::warn!("no secret mission to complete in group {}", group_id);
                false
            }
        }
    }

    fn commit(&mut self, groups: Vec<Group>) {
        self.groups = groups;
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            log::warn!("could not persist missions: {}", e);
        }
    }

    fn try_persist(&self) -> MissionResult<()> {
        let raw = serde_json::to_string(&self.groups)?;
        self.store.set_item(&self.config.storage_key, &raw)
    }

    fn celebrate_if_completed(&self, group_id: &str, mission_id: u32) {
        let Some(group) = self.group(group_id) else {
            return;
        };
        let done = group.mission(mission_id).map(|m| m.completed).unwrap_or(false);
        if !done {
            return;
        }
        let celebration = Celebration::new(group.all_completed(), group.color.clone());
        if let Err(e) = self.notifier.celebrate(&celebration) {
            log::warn!("celebration failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissionError;
    use crate::kv::MemoryStore;
    use crate::notify::NoopNotifier;
    use std::cell::RefCell;

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn celebrate(&self, _celebration: &Celebration) -> MissionResult<()> {
            Err(MissionError::Notify("confetti missing".into()))
        }
    }

    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: RefCell<usize>,
    }

    impl KeyValueStore for CountingStore {
        fn get_item(&self, key: &str) -> MissionResult<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> MissionResult<()> {
            *self.writes.borrow_mut() += 1;
            self.inner.set_item(key, value)
        }
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> MissionResult<Option<String>> {
            Err(MissionError::Storage("denied".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> MissionResult<()> {
            Err(MissionError::Storage("quota exceeded".into()))
        }
    }

    fn defaults() -> Vec<Group> {
        vec![Group::new("A", "Team A", "#ef4444")
            .with_mission(1, "selfie")
            .with_mission(2, "bread")]
    }

    #[test]
    fn test_open_skips_write_when_unchanged() {
        let store = CountingStore::default();
        let raw = serde_json::to_string(&defaults()).unwrap();
        store.inner.set_item(DEFAULT_STORAGE_KEY, &raw).unwrap();

        let _session = MissionSession::open(SessionConfig::default(), &defaults(), &store, NoopNotifier);
        assert_eq!(*store.writes.borrow(), 0);
    }

    #[test]
    fn test_open_rewrites_malformed_snapshot() {
        let store = CountingStore::default();
        store.inner.set_item(DEFAULT_STORAGE_KEY, "{broken").unwrap();

        let session = MissionSession::open(SessionConfig::default(), &defaults(), &store, NoopNotifier);
        assert_eq!(session.groups(), defaults().as_slice());
        assert_eq!(*store.writes.borrow(), 1);
        let saved = store.inner.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(decode_groups(&saved), Some(defaults()));
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut session = MissionSession::open(SessionConfig::default(), &defaults(), ReadOnlyStore, NoopNotifier);
        assert!(session.complete_first_mission("A"));
        assert!(session.toggle("A", 2).is_ok());
        assert!(session.group("A").unwrap().all_completed());
    }

    #[test]
    fn test_notifier_failure_does_not_block_transition() {
        let mut session = MissionSession::open(SessionConfig::default(), &defaults(), MemoryStore::new(), FailingNotifier);
        assert!(session.complete_first_mission("A"));
        assert!(session.is_interactable("A", 2));
    }

    #[test]
    fn test_first_mission_completes_once() {
        let mut session = MissionSession::open(SessionConfig::default(), &defaults(), MemoryStore::new(), NoopNotifier);
        assert!(session.apply_verdict(&Verdict::Granted { group_id: "A".into() }));
        assert!(!session.apply_verdict(&Verdict::Granted { group_id: "A".into() }));
        assert!(!session.apply_verdict(&Verdict::Rejected { group_id: "A".into() }));
        assert!(!session.complete_first_mission("Z"));
    }

    #[test]
    fn test_denied_toggle_leaves_state_and_storage_alone() {
        let store = CountingStore::default();
        let mut session = MissionSession::open(SessionConfig::default(), &defaults(), &store, NoopNotifier);
        let writes = *store.writes.borrow();

        assert_eq!(session.toggle("A", 2), Err(Denial::Locked));
        assert_eq!(session.toggle("A", 1), Err(Denial::RequiresPasscode));
        assert_eq!(session.toggle("Z", 2), Err(Denial::Unknown));
        assert_eq!(session.groups(), defaults().as_slice());
        assert_eq!(*store.writes.borrow(), writes);

        session.complete_first_mission("A");
        assert_eq!(session.toggle("A", 2), Ok(()));
        assert_eq!(*store.writes.borrow(), writes + 2);
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::new();
        let config = SessionConfig { storage_key: "other".into() };
        let mut session = MissionSession::open(config, &defaults(), &store, NoopNotifier);
        session.complete_first_mission("A");
        assert!(store.get_item("other").unwrap().is_some());
        assert!(store.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }
}
