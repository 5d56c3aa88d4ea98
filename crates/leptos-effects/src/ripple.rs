//! Button Ripples
//!
//! Pointer presses and keyboard activation on `.btn` elements spawn a
//! short-lived ripple span that removes itself when its animation ends.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, KeyboardEvent, PointerEvent};

use crate::config::EffectsConfig;
use crate::document;

const RIPPLE_CLASS: &str = "ripple";

/// Size and offset of a ripple relative to its host element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Ripple centered on (`x`, `y`), given relative to the host's top-left
    pub fn at_point(width: f64, height: f64, x: f64, y: f64, scale: f64) -> Self {
        let size = width.max(height) * scale;
        Self {
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }

    /// Ripple centered on the host, used for keyboard activation
    pub fn centered(width: f64, height: f64, scale: f64) -> Self {
        Self::at_point(width, height, width / 2.0, height / 2.0, scale)
    }
}

/// Keys (by `KeyboardEvent.code`) that activate a focused button
pub fn is_activation_key(code: &str) -> bool {
    matches!(code, "Space" | "Enter")
}

/// Bind document-level pointerdown and keydown listeners
pub fn bind_button_ripples(config: &EffectsConfig) {
    let Some(doc) = document() else {
        return;
    };
    let config = *config;
    let button_selector = format!(".{}", config.button_class);

    let on_pointerdown = Closure::<dyn FnMut(PointerEvent)>::new(move |ev: PointerEvent| {
        let Some(button) = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&button_selector).ok().flatten())
        else {
            return;
        };
        let rect = button.get_bounding_client_rect();
        let geometry = RippleGeometry::at_point(
            rect.width(),
            rect.height(),
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
            config.ripple_scale,
        );
        spawn_ripple(&button, geometry);
    });
    let passive = AddEventListenerOptions::new();
    passive.set_passive(true);
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "pointerdown",
        on_pointerdown.as_ref().unchecked_ref(),
        &passive,
    );
    on_pointerdown.forget();

    let focus_doc = doc.clone();
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        if !is_activation_key(&ev.code()) {
            return;
        }
        let Some(active) = focus_doc.active_element() else {
            return;
        };
        if !active.class_list().contains(config.button_class) {
            return;
        }
        ev.prevent_default();
        let rect = active.get_bounding_client_rect();
        spawn_ripple(
            &active,
            RippleGeometry::centered(rect.width(), rect.height(), config.ripple_scale),
        );
        if let Some(el) = active.dyn_ref::<HtmlElement>() {
            el.click();
        }
    });
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

fn spawn_ripple(host: &Element, geometry: RippleGeometry) {
    let Some(doc) = host.owner_document() else {
        return;
    };
    let Some(ripple) = doc
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    ripple.set_class_name(RIPPLE_CLASS);
    let size = format!("{}px", geometry.size);
    let style = ripple.style();
    let _ = style.set_property("width", &size);
    let _ = style.set_property("height", &size);
    let _ = style.set_property("left", &format!("{}px", geometry.left));
    let _ = style.set_property("top", &format!("{}px", geometry.top));

    let finished = ripple.clone();
    let on_end = Closure::once_into_js(move || finished.remove());
    let _ = ripple.add_event_listener_with_callback("animationend", on_end.unchecked_ref());
    let _ = host.append_child(&ripple);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_uses_larger_side() {
        let g = RippleGeometry::at_point(200.0, 50.0, 0.0, 0.0, 1.2);
        assert_eq!(g.size, 240.0);
        assert_eq!(g.left, -120.0);
        assert_eq!(g.top, -120.0);
    }

    #[test]
    fn test_point_offsets() {
        let g = RippleGeometry::at_point(100.0, 100.0, 30.0, 70.0, 1.0);
        assert_eq!(g.left, -20.0);
        assert_eq!(g.top, 20.0);
    }

    #[test]
    fn test_centered_ripple() {
        let g = RippleGeometry::centered(100.0, 40.0, 1.2);
        assert_eq!(g.size, 120.0);
        assert_eq!(g.left, -10.0);
        assert_eq!(g.top, -40.0);
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Space"));
        assert!(is_activation_key("Enter"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("KeyA"));
    }
}
