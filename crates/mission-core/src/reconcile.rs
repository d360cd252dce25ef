//! Progress Reconciliation
//!
//! Merges a persisted snapshot into the current default dataset. The
//! defaults decide which groups and missions exist and in which order;
//! the snapshot only contributes completion flags.

use crate::model::{find_group, Group};

/// Merge persisted progress into the defaults
///
/// - `stored == None` returns the defaults unchanged
/// - groups/missions missing from storage come from the defaults, with
///   missions reset to incomplete
/// - groups/missions present only in storage are dropped
pub fn reconcile(defaults: &[Group], stored: Option<&[Group]>) -> Vec<Group> {
    let Some(stored) = stored else {
        return defaults.to_vec();
    };

    let mut added = 0usize;
    let merged: Vec<Group> = defaults
        .iter()
        .map(|default_group| {
            let Some(stored_group) = find_group(stored, &default_group.id) else {
                added += default_group.missions.len();
                return default_group.clone();
            };

            let mut group = default_group.clone();
            for mission in group.missions.iter_mut() {
                match stored_group.mission(mission.id) {
                    Some(saved) => mission.completed = saved.completed,
                    None => {
                        mission.completed = false;
                        added += 1;
                    }
                }
            }
            group
        })
        .collect();

    let dropped = stored
        .iter()
        .map(|stored_group| match find_group(defaults, &stored_group.id) {
            None => stored_group.missions.len(),
            Some(default_group) => stored_group
                .missions
                .iter()
                .filter(|m| default_group.mission(m.id).is_none())
                .count(),
        })
        .sum::<usize>();

    log::debug!(
        "reconciled {} groups ({} missions added, {} stale missions dropped)",
        merged.len(),
        added,
        dropped
    );
    merged
}

/// Decode a persisted snapshot, treating anything malformed as absent
pub fn decode_groups(raw: &str) -> Option<Vec<Group>> {
    match serde_json::from_str::<Vec<Group>>(raw) {
        Ok(groups) => Some(groups),
        Err(e) => {
            log::warn!("ignoring malformed mission snapshot: {}", e);
            None
        }
    }
}
