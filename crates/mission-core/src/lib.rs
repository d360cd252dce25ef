//! Mission Core
//!
//! Platform-neutral mission progress logic: the group/mission model,
//! reconciliation of persisted progress against the default dataset,
//! the unlock gate, the passcode verification flow and the session that
//! ties them to a key-value store and a celebration notifier.

mod error;
mod model;
mod reconcile;
mod unlock;
mod passcode;
mod notify;
mod kv;
mod session;

pub use error::{MissionError, MissionResult};
pub use model::{find_group, Group, Mission};
pub use reconcile::{decode_groups, reconcile};
pub use unlock::{grant_first_mission, is_interactable, request_toggle, Denial, ToggleOutcome, FIRST_MISSION_ID};
pub use passcode::{Codebook, FlowState, PasscodeEntry, PasscodeFlow, Verdict, DEFAULT_CODE_LENGTH};
pub use notify::{Celebration, Intensity, NoopNotifier, Notifier};
pub use kv::{KeyValueStore, MemoryStore};
pub use session::{MissionSession, SessionConfig, DEFAULT_STORAGE_KEY};
