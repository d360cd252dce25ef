//! Trip Companion App
//!
//! Main application component: hero, map, mission cards and timeline.

use leptos::prelude::*;
use mission_core::{MissionSession, PasscodeFlow};
use reactive_stores::Store;

use crate::celebration::ConfettiNotifier;
use crate::components::{GroupMissions, GroupTabBar, Hero, MapDisplay, PasscodeModal, Timeline};
use crate::config::EventConfig;
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::{store_group, AppState, AppStateStoreFields};

#[component]
pub fn App(config: EventConfig) -> impl IntoView {
    // Reconcile stored progress exactly once per page load
    let session = MissionSession::open(config.session.clone(), &config.groups, LocalStorage, ConfettiNotifier);

    let store = Store::new(AppState::new(
        session.groups().to_vec(),
        config.first_group_id(),
        PasscodeFlow::for_codebook(&config.codebook),
    ));
    provide_context(store);
    let ctx = AppContext::new(store, session, config.clone());
    provide_context(ctx);

    let map = config.map.clone();
    let map_locations = Signal::derive(move || map.locations_for(&store.active_group().read()));
    let marker_color = Signal::derive(move || {
        store_group(&store, &store.active_group().read())
            .map(|g| g.color)
            .unwrap_or_default()
    });
    let group_ids: Vec<String> = config.groups.iter().map(|g| g.id.clone()).collect();

    view! {
        <div class="app-layout">
            <Hero info=config.hero.clone() />

            <main class="main-content">
                <MapDisplay
                    image_url=config.map.image_url.clone()
                    locations=map_locations
                    marker_color=marker_color
                    on_select=move |id: String| log::debug!("marker {} selected", id)
                />

                <section class="missions">
                    <h2 class="section-title">"팀 미션"</h2>

                    // Narrow screens: one group at a time
                    <div class="missions-tabs">
                        <GroupTabBar />
                        {move || {
                            let active = store.active_group().get();
                            view! { <GroupMissions group_id=active /> }
                        }}
                    </div>

                    // Wide screens: all groups side by side
                    <div class="missions-grid">
                        {group_ids
                            .into_iter()
                            .map(|id| view! { <GroupMissions group_id=id /> })
                            .collect_view()}
                    </div>
                </section>

                <Timeline events=config.schedule.clone() event_date=config.event_date />
            </main>

            <PasscodeModal />
        </div>
    }
}
