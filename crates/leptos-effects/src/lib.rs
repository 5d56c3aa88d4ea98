//! Leptos Page Effects
//!
//! Decorative, purely presentational behavior for static marketing pages:
//! scroll reveal, floating hero orbs, button ripples and the grass strip.
//! Every effect silently does nothing when its target element is missing.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod config;
mod environment;
mod reveal;
mod ambient;
mod ripple;
mod grass;

pub use config::EffectsConfig;
pub use environment::{
    create_environment_signals, prefers_reduced_motion, viewport_width, Debouncer,
    EnvironmentSignals, REDUCED_MOTION_QUERY,
};
pub use reveal::{bind_section_reveal, stagger_delays};
pub use ambient::{plan_orbs, render_orbs, OrbSpec};
pub use ripple::{bind_button_ripples, is_activation_key, RippleGeometry};
pub use grass::{apply_grass, grass_mode, GrassMode};

/// Wire up every page effect once.
///
/// Orbs and grass are rebuilt whenever the viewport width (debounced) or the
/// reduced-motion preference changes, including the initial run.
#[component]
pub fn PageEffects(#[prop(optional)] config: EffectsConfig) -> impl IntoView {
    bind_section_reveal(&config);
    bind_button_ripples(&config);

    let env = create_environment_signals(&config);
    Effect::new(move |_| {
        let width = env.viewport_width.get();
        let reduced = env.reduced_motion.get();
        log::debug!("Refreshing decorations: width={}, reduced_motion={}", width, reduced);
        render_orbs(&config, width, reduced);
        apply_grass(&config, width, reduced);
    });
}

pub(crate) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

/// First element matching `selector`, as an `HtmlElement`
pub(crate) fn query_html(selector: &str) -> Option<web_sys::HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}
