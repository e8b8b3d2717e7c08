//! Movies Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod feed;
mod logger;
mod models;
mod movie_form;
mod pages;
mod search;
mod sequence;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::error_1(&format!("[main] logger already set: {}", e).into());
    }
    if let Some(e) = config_error {
        log::error!("{}; falling back to defaults", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
