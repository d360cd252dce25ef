//! Mission Unlock Policy
//!
//! Mission 1 of each group is the secret mission: it is always
//! interactable, completes only through the passcode flow and stays
//! completed. Every other mission is gated on it and toggles freely once
//! unlocked.

use crate::model::{find_group, Group};

/// The secret mission that gates the rest of its group
pub const FIRST_MISSION_ID: u32 = 1;

/// Why a toggle request was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// Mission 1 of the group is not completed yet
    Locked,
    /// Mission 1 completes through the passcode flow only
    RequiresPasscode,
    /// Mission 1 is already completed and cannot be undone
    Sealed,
    /// No such group or mission
    Unknown,
}

/// Result of a toggle request
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub allowed: bool,
    pub groups: Vec<Group>,
    pub denial: Option<Denial>,
}

impl ToggleOutcome {
    fn denied(groups: &[Group], denial: Denial) -> Self {
        Self { allowed: false, groups: groups.to_vec(), denial: Some(denial) }
    }
}

/// Whether a mission can be seen and acted on
pub fn is_interactable(group: &Group, mission_id: u32) -> bool {
    mission_id == FIRST_MISSION_ID
        || group
            .mission(FIRST_MISSION_ID)
            .map(|m| m.completed)
            .unwrap_or(false)
}

/// Toggle a gated mission, or deny without touching `groups`
pub fn request_toggle(groups: &[Group], group_id: &str, mission_id: u32) -> ToggleOutcome {
    let Some(group) = find_group(groups, group_id) else {
        return ToggleOutcome::denied(groups, Denial::Unknown);
    };
    let Some(mission) = group.mission(mission_id) else {
        return ToggleOutcome::denied(groups, Denial::Unknown);
    };

    if mission_id == FIRST_MISSION_ID {
        let denial = if mission.completed { Denial::Sealed } else { Denial::RequiresPasscode };
        return ToggleOutcome::denied(groups, denial);
    }
    if !is_interactable(group, mission_id) {
        log::debug!("toggle of locked mission {} in group {} ignored", mission_id, group_id);
        return ToggleOutcome::denied(groups, Denial::Locked);
    }

    let groups = set_completed(groups, group_id, mission_id, !mission.completed);
    ToggleOutcome { allowed: true, groups, denial: None }
}

/// Mark the secret mission of `group_id` completed
///
/// Returns `None` for an unknown group or a group without mission 1.
pub fn grant_first_mission(groups: &[Group], group_id: &str) -> Option<Vec<Group>> {
    find_group(groups, group_id)?.mission(FIRST_MISSION_ID)?;
    Some(set_completed(groups, group_id, FIRST_MISSION_ID, true))
}

fn set_completed(groups: &[Group], group_id: &str, mission_id: u32, completed: bool) -> Vec<Group> {
    let mut next = groups.to_vec();
    if let Some(mission) = next
        .iter_mut()
        .find(|g| g.id == group_id)
        .and_then(|g| g.mission_mut(mission_id))
    {
        mission.completed = completed;
    }
    next
}
