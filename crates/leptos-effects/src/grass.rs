//! Grass Strip
//!
//! Decorative foreground strip along the bottom of the page.

use crate::config::EffectsConfig;
use crate::query_html;

const MINIMAL_CLASS: &str = "minimal";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrassMode {
    /// Reduced motion requested
    Hidden,
    /// Short foreground-only strip for very small screens
    Minimal,
    Full,
}

pub fn grass_mode(width: f64, reduced_motion: bool, config: &EffectsConfig) -> GrassMode {
    if reduced_motion {
        GrassMode::Hidden
    } else if width < config.grass_minimal_width {
        GrassMode::Minimal
    } else {
        GrassMode::Full
    }
}

pub fn apply_grass(config: &EffectsConfig, width: f64, reduced_motion: bool) {
    let Some(wrap) = query_html(config.grass_selector) else {
        return;
    };
    let style = wrap.style();
    match grass_mode(width, reduced_motion, config) {
        GrassMode::Hidden => {
            let _ = style.set_property("display", "none");
        }
        GrassMode::Minimal => {
            let _ = style.set_property("display", "block");
            let _ = style.set_property("height", &format!("{}px", config.grass_minimal_height_px));
            let _ = wrap.class_list().add_1(MINIMAL_CLASS);
        }
        GrassMode::Full => {
            let _ = style.set_property("display", "block");
            let _ = style.remove_property("height");
            let _ = wrap.class_list().remove_1(MINIMAL_CLASS);
        }
    }
}
