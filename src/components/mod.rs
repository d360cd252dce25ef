//! UI Components
//!
//! Reusable Leptos components.

mod hero;
mod map_display;
mod group_tab_bar;
mod group_missions;
mod mission_row;
mod passcode_modal;
mod timeline;

pub use hero::Hero;
pub use map_display::MapDisplay;
pub use group_tab_bar::GroupTabBar;
pub use group_missions::GroupMissions;
pub use mission_row::MissionRow;
pub use passcode_modal::PasscodeModal;
pub use timeline::Timeline;
