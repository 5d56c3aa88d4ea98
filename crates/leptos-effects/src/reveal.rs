//! Scroll Reveal
//!
//! Sections fade in the first time they scroll into view. Children of a
//! stagger container follow one after another.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::EffectsConfig;
use crate::document;

const SECTION_CLASS: &str = "fade-section";
const REVEALED_CLASS: &str = "fade-in";
const STAGGER_IN_CLASS: &str = "in";

/// Delay for each child of a stagger container, in order
pub fn stagger_delays(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count as u32).map(|i| i * step_ms).collect()
}

/// Observe every section and reveal it once it crosses the threshold.
///
/// A section is unobserved right after its reveal, so leaving and
/// re-entering the viewport does nothing.
pub fn bind_section_reveal(config: &EffectsConfig) {
    let Some(doc) = document() else {
        return;
    };
    let Ok(sections) = doc.query_selector_all(config.section_selector) else {
        return;
    };
    if sections.length() == 0 {
        return;
    }

    let config = *config;
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let section = entry.target();
                observer.unobserve(&section);
                reveal_section(&section, &config);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = match IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            log::debug!("IntersectionObserver unavailable ({:?}), revealing sections now", err);
            for i in 0..sections.length() {
                if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    reveal_section(&section, &config);
                }
            }
            return;
        }
    };

    for i in 0..sections.length() {
        if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = section.class_list().add_1(SECTION_CLASS);
            observer.observe(&section);
        }
    }
    on_intersect.forget();
}

fn reveal_section(section: &Element, config: &EffectsConfig) {
    let _ = section.class_list().add_1(REVEALED_CLASS);

    let Ok(Some(container)) = section.query_selector(config.stagger_selector) else {
        return;
    };
    let children = container.children();
    let delays = stagger_delays(children.length() as usize, config.stagger_step_ms);
    for (i, delay) in delays.into_iter().enumerate() {
        if let Some(child) = children.item(i as u32) {
            Timeout::new(delay, move || {
                let _ = child.class_list().add_1(STAGGER_IN_CLASS);
            })
            .forget();
        }
    }
    Timeout::new(config.stagger_container_delay_ms, move || {
        let _ = container.class_list().add_1(STAGGER_IN_CLASS);
    })
    .forget();
}
