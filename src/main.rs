//! Trip Companion Frontend Entry Point

mod config;
mod map;
mod schedule;
mod context;
mod store;
mod storage;
mod celebration;
mod logging;
mod components;
mod app;

use app::App;
use config::EventConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = EventConfig::builtin();
    log::info!("mounting {} ({} groups)", config.hero.title, config.groups.len());
    mount_to_body(move || view! { <App config=config /> });
}
