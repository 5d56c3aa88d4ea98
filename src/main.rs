#![allow(warnings)]
//! Stockfarm Site Frontend Entry Point

mod config;
mod models;
mod storage;
mod inventory;
mod stock_view;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::SiteConfig;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos_effects::PageEffects;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::default();
    match rolling_logger::init(config.log_level, config.log_capacity) {
        Ok(logger) => {
            if !logger.expose_on_window(config.log_hook) {
                log::debug!("Log hook window.{} not installed", config.log_hook);
            }
        }
        Err(e) => web_sys::console::warn_1(&format!("[MAIN] Logger not installed: {}", e).into()),
    }

    // Decorations work on the static page and render nothing themselves
    let effects = config.effects;
    mount_to_body(move || view! { <PageEffects config=effects /> });

    let host = document()
        .get_element_by_id(config.mount_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match host {
        Some(host) => mount_to(host, move || view! { <App config=config /> }).forget(),
        None => log::debug!("No #{} element, inventory panel not mounted", config.mount_id),
    }
}
