//! Site Configuration
//!
//! Compile-time defaults for storage, mounting and logging.

use leptos_effects::EffectsConfig;
use log::LevelFilter;

/// localStorage key holding the inventory JSON array
pub const INVENTORY_KEY: &str = "sf_inventory_v1";

#[derive(Clone, Copy, Debug)]
pub struct SiteConfig {
    pub inventory_key: &'static str,
    /// Element the inventory panel is mounted into
    pub mount_id: &'static str,
    pub log_level: LevelFilter,
    /// Records kept by the rolling logger
    pub log_capacity: usize,
    /// `window` function returning the buffered log lines
    pub log_hook: &'static str,
    pub effects: EffectsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            inventory_key: INVENTORY_KEY,
            mount_id: "inventory",
            log_level: LevelFilter::Info,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
            log_hook: "stockfarmLogs",
            effects: EffectsConfig::default(),
        }
    }
}
