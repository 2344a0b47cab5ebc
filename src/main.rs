//! Portal de Notícias Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod enhancers;
mod error;
mod favorite;
mod models;
mod platform;
mod scroll;
mod share;
mod store;
mod toast;

use app::App;
use config::PortalConfig;
use leptos::prelude::*;
use log::warn;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match PortalConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (PortalConfig::default(), Some(e)),
    };
    wasm_logger::init(wasm_logger::Config::new(config.log_level()).module_prefix(module_path!()));
    if let Some(e) = config_error {
        warn!("Ignoring #{}: {}", config::CONFIG_ELEMENT_ID, e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
