//! Timeline Component
//!
//! Vertical schedule. On the event day the current entry is marked and
//! the marker advances once a minute.

use chrono::NaiveDate;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::schedule::{current_index, local_now, ScheduleEvent};

const REFRESH_MS: u32 = 60_000;

#[component]
pub fn Timeline(events: Vec<ScheduleEvent>, event_date: Option<NaiveDate>) -> impl IntoView {
    let (now, set_now) = signal(local_now());
    if event_date.is_some() {
        Interval::new(REFRESH_MS, move || set_now.set(local_now())).forget();
    }

    let current = {
        let events = events.clone();
        Memo::new(move |_| now.get().and_then(|now| current_index(&events, event_date, now)))
    };

    view! {
        <section class="timeline-card">
            <div class="timeline-header">
                <h2>"🕘 일정표"</h2>
            </div>
            <div class="timeline">
                {events
                    .into_iter()
                    .enumerate()
                    .map(|(index, event)| {
                        let is_now = move || current.get() == Some(index);
                        view! {
                            <div class=move || if is_now() { "timeline-item now" } else { "timeline-item" }>
                                <div class="timeline-dot"></div>
                                <div class="timeline-body">
                                    <span class="timeline-time">{event.time}</span>
                                    <div>
                                        <h3 class="timeline-title">
                                            {event.title}
                                            <Show when=is_now>
                                                <span class="timeline-now">"지금"</span>
                                            </Show>
                                        </h3>
                                        <p class="timeline-description">{event.description}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
