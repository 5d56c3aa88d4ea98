//! Viewport and motion-preference signals.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::EffectsConfig;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Reactive view of the page environment
#[derive(Clone, Copy)]
pub struct EnvironmentSignals {
    /// Viewport width in CSS pixels, updated after resizing settles
    pub viewport_width: ReadSignal<f64>,
    /// Whether the user asked for reduced motion
    pub reduced_motion: ReadSignal<bool>,
}

/// Create the signals and bind the window listeners feeding them
pub fn create_environment_signals(config: &EffectsConfig) -> EnvironmentSignals {
    let (viewport_width_read, viewport_width_write) = signal(viewport_width());
    let (reduced_motion_read, reduced_motion_write) = signal(prefers_reduced_motion());

    bind_debounced_resize(config.resize_debounce_ms, viewport_width_write);
    bind_reduced_motion_change(reduced_motion_write);

    EnvironmentSignals {
        viewport_width: viewport_width_read,
        reduced_motion: reduced_motion_read,
    }
}

fn reduced_motion_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

pub fn prefers_reduced_motion() -> bool {
    reduced_motion_query().map_or(false, |mq| mq.matches())
}

/// `innerWidth`, falling back to the root element's client width
pub fn viewport_width() -> f64 {
    let Some(win) = web_sys::window() else {
        return 0.0;
    };
    win.inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .filter(|w| *w > 0.0)
        .or_else(|| {
            win.document()
                .and_then(|doc| doc.document_element())
                .map(|el| el.client_width() as f64)
        })
        .unwrap_or(0.0)
}

/// Holds at most one pending deferred callback.
///
/// Scheduling again drops the previous timeout, which clears it.
#[derive(Clone, Default)]
pub struct Debouncer {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(delay_ms, callback);
        self.pending.borrow_mut().replace(timeout);
    }
}

fn bind_debounced_resize(delay_ms: u32, set_width: WriteSignal<f64>) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let debouncer = Debouncer::default();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        debouncer.schedule(delay_ms, move || set_width.set(viewport_width()));
    });
    let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

fn bind_reduced_motion_change(set_reduced: WriteSignal<bool>) {
    let Some(mq) = reduced_motion_query() else {
        return;
    };
    let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        set_reduced.set(prefers_reduced_motion());
    });
    // Older engines only expose the legacy addListener API
    if mq
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .is_err()
    {
        #[allow(deprecated)]
        let _ = mq.add_listener_with_opt_callback(Some(on_change.as_ref().unchecked_ref()));
    }
    on_change.forget();
}
