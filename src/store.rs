//! Page State Store
//!
//! Holds the inventory exactly as it was last loaded from storage. The
//! stock list reads it; only `SiteContext::render` writes it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::InventoryItem;

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Inventory as last loaded from storage
    pub inventory: Vec<InventoryItem>,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Replace the rendered inventory wholesale
pub fn store_replace_inventory(store: &PageStore, items: Vec<InventoryItem>) {
    *store.inventory().write() = items;
}

/// Tracked read of the rendered inventory
pub fn store_inventory(store: &PageStore) -> Vec<InventoryItem> {
    store.inventory().get()
}
