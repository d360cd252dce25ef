//! Group Missions Component
//!
//! Mission card for one group: members, progress and the checklist.

use leptos::prelude::*;
use mission_core::is_interactable;

use crate::components::MissionRow;
use crate::store::{store_group, use_app_store};

#[component]
pub fn GroupMissions(#[prop(into)] group_id: String) -> impl IntoView {
    let store = use_app_store();
    let group = Memo::new(move |_| store_group(&store, &group_id));

    move || {
        group.get().map(|g| {
            let total = g.missions.len();
            let done = g.completed_count();
            let percent = g.progress_percent();
            let rows: Vec<_> = g
                .missions
                .iter()
                .map(|m| (m.clone(), is_interactable(&g, m.id)))
                .collect();
            let group_id = g.id.clone();
            let color = g.color.clone();

            view! {
                <article class="mission-card" style=format!("border-top-color: {};", g.color)>
                    <header class="mission-card-header">
                        <div>
                            <h3 class="mission-card-title">{g.name.clone()}</h3>
                            <p class="mission-card-members">"👥 " {g.members.join(", ")}</p>
                        </div>
                        <span class="badge">{format!("{} / {} 완료", done, total)}</span>
                    </header>
                    <div class="progress">
                        <div
                            class="progress-bar"
                            style=format!("width: {}%; background-color: {};", percent, color)
                        ></div>
                    </div>
                    <div class="mission-list-title">"🏆 미션 목록"</div>
                    <div class="mission-list">
                        {rows
                            .into_iter()
                            .map(|(mission, unlocked)| view! {
                                <MissionRow group_id=group_id.clone() mission=mission unlocked=unlocked />
                            })
                            .collect_view()}
                    </div>
                </article>
            }
        })
    }
}
