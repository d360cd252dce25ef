//! Mission Models
//!
//! Groups and their mission checklists. The same shape is used for the
//! default dataset, the live session state and the persisted snapshot.

use serde::{Deserialize, Serialize};

/// A single checklist item belonging to a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Mission {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), completed: false }
    }
}

/// A team sharing one mission checklist
///
/// Display fields default when missing so that older persisted snapshots
/// still decode; only ids and completion flags matter for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub missions: Vec<Mission>,
    #[serde(default)]
    pub color: String,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            members: Vec::new(),
            missions: Vec::new(),
            color: color.into(),
        }
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mission(mut self, id: u32, text: impl Into<String>) -> Self {
        self.missions.push(Mission::new(id, text));
        self
    }

    /// Find a mission by ID
    pub fn mission(&self, mission_id: u32) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == mission_id)
    }

    pub fn mission_mut(&mut self, mission_id: u32) -> Option<&mut Mission> {
        self.missions.iter_mut().find(|m| m.id == mission_id)
    }

    pub fn completed_count(&self) -> usize {
        self.missions.iter().filter(|m| m.completed).count()
    }

    /// True when the group has missions and every one of them is done
    pub fn all_completed(&self) -> bool {
        !self.missions.is_empty() && self.missions.iter().all(|m| m.completed)
    }

    /// Completion percentage in 0..=100 (0 for an empty checklist)
    pub fn progress_percent(&self) -> u32 {
        if self.missions.is_empty() {
            return 0;
        }
        (self.completed_count() * 100 / self.missions.len()) as u32
    }
}

/// Find a group by ID
pub fn find_group<'a>(groups: &'a [Group], group_id: &str) -> Option<&'a Group> {
    groups.iter().find(|g| g.id == group_id)
}
