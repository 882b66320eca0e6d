//! Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod i18n;
mod logging;
mod models;
mod state;
mod store;

use app::App;
use config::AppConfig;
use i18n::Locale;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let query = window().location().search().unwrap_or_default();
    let (mut config, ignored) = AppConfig::from_query(&query);
    if !AppConfig::has_lang(&query) {
        if let Some(tag) = window().navigator().language() {
            config.locale = Locale::from_tag(&tag);
        }
    }

    logging::init(config.log_level);
    for entry in ignored {
        log::warn!("ignoring config entry {:?}", entry);
    }
    log::info!(
        "starting todo app (lang={}, titles={:?})",
        config.locale.as_tag(),
        config.title_policy
    );

    mount_to_body(move || view! { <App config=config /> });
}
