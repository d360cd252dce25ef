//! Group Tab Bar Component
//!
//! Tab bar for switching between groups on narrow screens.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn GroupTabBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="group-tab-bar">
            <For
                each=move || {
                    store.groups().read().iter().map(|g| (g.id.clone(), g.name.clone())).collect::<Vec<_>>()
                }
                key=|(id, _)| id.clone()
                children=move |(id, name)| {
                    let tab_id = id.clone();
                    let is_active = move || store.active_group().read().as_str() == tab_id;
                    view! {
                        <button
                            class=move || if is_active() { "group-tab active" } else { "group-tab" }
                            on:click=move |_| ctx.select_group(&id)
                        >
                            {name}
                        </button>
                    }
                }
            />
        </div>
    }
}
