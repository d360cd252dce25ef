//! Hero Banner Component
//!
//! Full-width cover image with the event title, date and location.

use leptos::prelude::*;

use crate::config::HeroInfo;

#[component]
pub fn Hero(info: HeroInfo) -> impl IntoView {
    view! {
        <header class="hero">
            <img class="hero-image" src=info.image_url alt="Trip Location" />
            <div class="hero-shade"></div>
            <div class="hero-content">
                <span class="hero-badge">{info.subtitle}</span>
                <h1 class="hero-title">{info.title}</h1>
                <div class="hero-meta">
                    <span class="hero-meta-item">"📅 " {info.date_label}</span>
                    <span class="hero-meta-item">"📍 " {info.location}</span>
                </div>
            </div>
        </header>
    }
}
