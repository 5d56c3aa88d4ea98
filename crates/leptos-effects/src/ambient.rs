//! Hero Orbs
//!
//! Floating translucent circles behind the hero section. The whole set is
//! thrown away and rebuilt on every refresh.

use wasm_bindgen::JsCast;

use crate::config::EffectsConfig;
use crate::query_html;

const ORB_CLASS: &str = "orb";
const ORB_MAX_PX: u32 = 180;

/// One planned orb, all values already randomized
#[derive(Clone, Debug, PartialEq)]
pub struct OrbSpec {
    pub size_px: u32,
    pub left_pct: f64,
    pub top_pct: f64,
    pub color: &'static str,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

impl OrbSpec {
    pub fn animation(&self) -> String {
        format!(
            "floaty {}s ease-in-out {}s infinite alternate",
            self.duration_s, self.delay_s
        )
    }
}

/// Plan the orbs for a viewport `width`.
///
/// `rng` must yield values in `[0, 1)`. `count` overrides the
/// width-dependent default.
pub fn plan_orbs(
    width: f64,
    count: Option<usize>,
    config: &EffectsConfig,
    rng: &mut impl FnMut() -> f64,
) -> Vec<OrbSpec> {
    let narrow = width < config.narrow_width;
    let count = count.unwrap_or(if narrow {
        config.narrow_orb_count
    } else {
        config.wide_orb_count
    });

    (0..count)
        .map(|i| {
            let size_px = if narrow {
                40 + (rng() * 100.0).round() as u32
            } else {
                80 + (rng() * 220.0).round() as u32
            };
            let color = match config.orb_palette.len() {
                0 => "transparent",
                len => config.orb_palette[i % len],
            };
            OrbSpec {
                size_px,
                left_pct: rng() * 100.0,
                top_pct: rng() * 100.0,
                color,
                duration_s: 8.0 + rng() * 12.0,
                delay_s: rng() * 5.0,
                opacity: 0.06 + rng() * 0.20,
            }
        })
        .collect()
}

/// Rebuild the orbs inside the hero container.
///
/// With reduced motion the container is emptied and hidden instead.
pub fn render_orbs(config: &EffectsConfig, width: f64, reduced_motion: bool) {
    let Some(container) = query_html(config.hero_selector) else {
        return;
    };
    container.set_inner_html("");
    let style = container.style();
    if reduced_motion {
        let _ = style.set_property("opacity", "0.0");
        return;
    }
    let _ = style.remove_property("opacity");

    let Some(doc) = container.owner_document() else {
        return;
    };
    let mut rng = js_sys::Math::random;
    for orb in plan_orbs(width, None, config, &mut rng) {
        let Some(el) = doc
            .create_element("span")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        el.set_class_name(ORB_CLASS);
        let size = format!("{}px", orb.size_px);
        let max = format!("{}px", ORB_MAX_PX);
        let orb_style = el.style();
        let _ = orb_style.set_property("width", &size);
        let _ = orb_style.set_property("height", &size);
        let _ = orb_style.set_property("left", &format!("{}%", orb.left_pct));
        let _ = orb_style.set_property("top", &format!("{}%", orb.top_pct));
        let _ = orb_style.set_property("background", orb.color);
        let _ = orb_style.set_property("animation", &orb.animation());
        let _ = orb_style.set_property("opacity", &orb.opacity.to_string());
        let _ = orb_style.set_property("max-width", &max);
        let _ = orb_style.set_property("max-height", &max);
        let _ = container.append_child(&el);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn test_narrow_viewport_gets_fewer_smaller_orbs() {
        let config = EffectsConfig::default();
        let orbs = plan_orbs(480.0, None, &config, &mut fixed(1.0));
        assert_eq!(orbs.len(), 4);
        assert!(orbs.iter().all(|o| o.size_px == 140));

        let orbs = plan_orbs(480.0, None, &config, &mut fixed(0.0));
        assert!(orbs.iter().all(|o| o.size_px == 40));
    }

    #[test]
    fn test_wide_viewport_size_bounds() {
        let config = EffectsConfig::default();
        let orbs = plan_orbs(1280.0, None, &config, &mut fixed(0.0));
        assert_eq!(orbs.len(), 7);
        assert!(orbs.iter().all(|o| o.size_px == 80));

        let orbs = plan_orbs(1280.0, None, &config, &mut fixed(0.999));
        assert!(orbs.iter().all(|o| o.size_px == 300));
    }

    #[test]
    fn test_explicit_count_and_palette_cycle() {
        let config = EffectsConfig::default();
        let orbs = plan_orbs(1280.0, Some(5), &config, &mut fixed(0.5));
        assert_eq!(orbs.len(), 5);
        assert_eq!(orbs[0].color, config.orb_palette[0]);
        assert_eq!(orbs[3].color, config.orb_palette[0]);
        assert_eq!(orbs[4].color, config.orb_palette[1]);
    }

    #[test]
    fn test_randomized_ranges() {
        let config = EffectsConfig::default();
        let orb = &plan_orbs(1280.0, Some(1), &config, &mut fixed(0.5))[0];
        assert_eq!(orb.left_pct, 50.0);
        assert_eq!(orb.top_pct, 50.0);
        assert_eq!(orb.duration_s, 14.0);
        assert_eq!(orb.delay_s, 2.5);
        assert!((orb.opacity - 0.16).abs() < 1e-9);
        assert_eq!(orb.animation(), "floaty 14s ease-in-out 2.5s infinite alternate");
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let config = EffectsConfig::default();
        assert_eq!(plan_orbs(600.0, None, &config, &mut fixed(0.0)).len(), 7);
        assert_eq!(plan_orbs(599.0, None, &config, &mut fixed(0.0)).len(), 4);
    }
}
