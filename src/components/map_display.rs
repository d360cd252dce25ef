//! Map Display Component
//!
//! Map image with percentage-positioned markers for the active group.
//! Clicking a marker toggles its tooltip and reports the selection.

use leptos::prelude::*;

use crate::map::MapLocation;

#[component]
pub fn MapDisplay(
    #[prop(into)] image_url: String,
    #[prop(into)] locations: Signal<Vec<MapLocation>>,
    #[prop(into)] marker_color: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let (active_id, set_active_id) = signal::<Option<String>>(None);

    // a different marker set invalidates the selection
    Effect::new(move |_| {
        locations.track();
        set_active_id.set(None);
    });

    view! {
        <section class="map-card">
            <div class="map-header">
                <h2 style=move || format!("color: {};", marker_color.get())>"📍 지도"</h2>
            </div>
            <div class="map-canvas">
                <img class="map-image" src=image_url alt="Map" />
                <For
                    each=move || locations.get()
                    key=|loc| loc.id.clone()
                    children=move |loc| {
                        let id = loc.id.clone();
                        let is_active = {
                            let id = id.clone();
                            move || active_id.get().as_deref() == Some(id.as_str())
                        };
                        let is_active_style = is_active.clone();
                        let is_active_tip = is_active.clone();
                        let name = loc.name.clone();
                        let link = loc.link.clone();

                        view! {
                            <div
                                class="map-marker"
                                style=loc.position_style()
                                on:click=move |_| {
                                    if is_active() {
                                        set_active_id.set(None);
                                    } else {
                                        set_active_id.set(Some(id.clone()));
                                        on_select.run(id.clone());
                                    }
                                }
                            >
                                <div
                                    class="map-marker-pin"
                                    style=move || {
                                        let color = marker_color.get();
                                        if is_active_style() {
                                            format!("background-color: {}; color: white;", color)
                                        } else {
                                            format!("background-color: white; color: {};", color)
                                        }
                                    }
                                >
                                    "📍"
                                </div>
                                <div
                                    class="map-marker-pulse"
                                    style=move || format!("background-color: {};", marker_color.get())
                                ></div>
                                <Show when=is_active_tip>
                                    <div class="map-tooltip">
                                        <p class="map-tooltip-name">{name.clone()}</p>
                                        {link.clone().map(|href| view! {
                                            <a
                                                class="map-tooltip-link"
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                on:click=|ev| ev.stop_propagation()
                                            >
                                                "지도에서 열기"
                                            </a>
                                        })}
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
