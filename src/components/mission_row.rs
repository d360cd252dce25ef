//! Mission Row Component
//!
//! A single checklist entry. Locked missions hide their text; the secret
//! mission opens the passcode prompt instead of toggling.

use leptos::prelude::*;
use mission_core::{Mission, FIRST_MISSION_ID};

use crate::context::use_app_context;

/// Text shown in place of a locked mission
const LOCKED_TEXT: &str = "🔒 시크릿 미션을 완료하면 공개됩니다";

#[component]
pub fn MissionRow(group_id: String, mission: Mission, unlocked: bool) -> impl IntoView {
    let ctx = use_app_context();

    let id = mission.id;
    let completed = mission.completed;
    let is_secret = id == FIRST_MISSION_ID;
    let input_id = format!("mission-{}-{}", group_id, id);
    let text = if unlocked { mission.text } else { LOCKED_TEXT.to_string() };

    let row_class = match (completed, unlocked) {
        (true, _) => "mission-row completed",
        (false, true) => "mission-row",
        (false, false) => "mission-row locked",
    };
    let label_class = if unlocked { "mission-text" } else { "mission-text obscured" };

    let activate = move |ev: web_sys::MouseEvent| {
        // rendered state comes from the session, not the DOM checkbox
        ev.prevent_default();
        if unlocked {
            ctx.activate_mission(&group_id, id);
        }
    };

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                id=input_id.clone()
                prop:checked=completed
                disabled=!unlocked || (is_secret && completed)
                on:click=activate
            />
            <label for=input_id class=label_class>
                {is_secret.then(|| view! {
                    <span class="secret-badge">{if completed { "🔓 시크릿 미션" } else { "🔑 시크릿 미션" }}</span>
                })}
                {text}
            </label>
        </div>
    }
}
