//! Status Todo Frontend Entry Point

mod config;
mod logging;
mod store;
mod presentation;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let level = loaded
        .as_ref()
        .map(|config| config.level_filter())
        .unwrap_or(log::LevelFilter::Info);
    logging::init(level);

    let config = loaded.unwrap_or_else(|err| {
        log::warn!("falling back to default config: {}", err);
        config::WidgetConfig::default()
    });
    log::info!("mounting todo widget ({:?})", config.title);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
