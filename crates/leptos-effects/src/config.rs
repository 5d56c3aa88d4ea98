//! Effect tuning knobs.

/// Selectors, timings and breakpoints used by the page effects
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectsConfig {
    /// Elements observed for the fade-in reveal
    pub section_selector: &'static str,
    /// Visible ratio at which a section counts as revealed
    pub reveal_threshold: f64,
    /// Containers whose children reveal one after another
    pub stagger_selector: &'static str,
    pub stagger_step_ms: u32,
    pub stagger_container_delay_ms: u32,
    pub resize_debounce_ms: u32,

    pub hero_selector: &'static str,
    /// Viewports narrower than this get fewer, smaller orbs
    pub narrow_width: f64,
    pub narrow_orb_count: usize,
    pub wide_orb_count: usize,
    pub orb_palette: &'static [&'static str],

    /// Class (without the dot) marking elements that get ripples
    pub button_class: &'static str,
    pub ripple_scale: f64,

    pub grass_selector: &'static str,
    pub grass_minimal_width: f64,
    pub grass_minimal_height_px: u32,
}

const ORB_PALETTE: &[&str] = &[
    "rgba(0,255,0,0.18)",
    "rgba(255,255,0,0.12)",
    "rgba(0,200,120,0.12)",
];

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            section_selector: "section",
            reveal_threshold: 0.18,
            stagger_selector: ".service-cards, .stagger",
            stagger_step_ms: 120,
            stagger_container_delay_ms: 50,
            resize_debounce_ms: 350,
            hero_selector: ".hero-animation",
            narrow_width: 600.0,
            narrow_orb_count: 4,
            wide_orb_count: 7,
            orb_palette: ORB_PALETTE,
            button_class: "btn",
            ripple_scale: 1.2,
            grass_selector: ".grass-wrap",
            grass_minimal_width: 520.0,
            grass_minimal_height_px: 120,
        }
    }
}
