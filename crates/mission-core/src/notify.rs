//! Celebration Trigger
//!
//! Fire-and-forget feedback when a mission completes. Implementations
//! talk to whatever animation layer the host has; the session swallows
//! their failures.

use crate::error::MissionResult;

/// How loud a celebration should be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    /// A single mission was completed
    Burst,
    /// The last open mission of the group was completed
    Finale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    pub all_complete: bool,
    pub accent_color: String,
}

impl Celebration {
    pub fn new(all_complete: bool, accent_color: impl Into<String>) -> Self {
        Self { all_complete, accent_color: accent_color.into() }
    }

    pub fn intensity(&self) -> Intensity {
        if self.all_complete {
            Intensity::Finale
        } else {
            Intensity::Burst
        }
    }
}

/// Celebration collaborator
pub trait Notifier {
    fn celebrate(&self, celebration: &Celebration) -> MissionResult<()>;
}

/// Notifier that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn celebrate(&self, _celebration: &Celebration) -> MissionResult<()> {
        Ok(())
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn celebrate(&self, celebration: &Celebration) -> MissionResult<()> {
        (**self).celebrate(celebration)
    }
}
