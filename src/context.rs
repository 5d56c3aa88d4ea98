//! Site Context
//!
//! Connects the inventory store to the page state. Provided via the Leptos
//! Context API to the stock components.

use crate::inventory::InventoryStore;
use crate::stock_view::{stock_rows, StockRow};
use crate::storage::{BrowserStorage, KeyValueStore};
use crate::store::{store_inventory, store_replace_inventory, PageStore};

/// Context as provided on the page, backed by localStorage
pub type BrowserSiteContext = SiteContext<BrowserStorage>;

/// Every action reloads from storage and re-renders all rows afterwards
#[derive(Clone, Copy)]
pub struct SiteContext<S> {
    page: PageStore,
    inventory: InventoryStore<S>,
}

impl<S: KeyValueStore + Copy> SiteContext<S> {
    pub fn new(page: PageStore, inventory: InventoryStore<S>) -> Self {
        Self { page, inventory }
    }

    /// Reload from storage and re-render every row
    pub fn render(&self) {
        let items = self.inventory.load();
        log::debug!("Rendering {} inventory rows", items.len());
        store_replace_inventory(&self.page, items);
    }

    pub fn toggle(&self, index: usize) {
        if let Some(in_stock) = self.inventory.toggle(index) {
            log::info!("Inventory row {} now in_stock={}", index, in_stock);
        }
        self.render();
    }

    /// Add an item. Blank names change nothing and skip the re-render.
    pub fn append(&self, name: &str) -> bool {
        let added = self.inventory.append(name);
        if added {
            self.render();
        }
        added
    }

    /// Rows for the current render (tracked)
    pub fn rows(&self) -> Vec<StockRow> {
        stock_rows(&store_inventory(&self.page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InventoryItem;
    use crate::stock_view::StockStatus;
    use crate::storage::{KeyValueStore, MemoryStorage};
    use crate::store::PageState;
    use leptos::prelude::*;
    use reactive_stores::Store;

    const KEY: &str = "sf_inventory_v1";

    fn leaked_storage() -> &'static MemoryStorage {
        Box::leak(Box::new(MemoryStorage::new()))
    }

    fn with_context(storage: &'static MemoryStorage, test: impl FnOnce(SiteContext<&'static MemoryStorage>)) {
        let owner = Owner::new();
        owner.with(|| {
            let page = Store::new(PageState::default());
            test(SiteContext::new(page, InventoryStore::new(storage, KEY)));
        });
    }

    fn names(rows: &[StockRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_nothing_shown_before_first_render() {
        with_context(leaked_storage(), |ctx| {
            assert!(ctx.rows().is_empty());
        });
    }

    #[test]
    fn test_render_replaces_rows_wholesale() {
        let storage = leaked_storage();
        with_context(storage, |ctx| {
            ctx.render();
            assert_eq!(ctx.rows().len(), 5);

            storage
                .set_item(KEY, r#"[{"name":"Goats","inStock":false}]"#)
                .unwrap();
            ctx.render();

            let rows = ctx.rows();
            assert_eq!(names(&rows), vec!["Goats"]);
            assert_eq!(rows[0].status, StockStatus::OutOfStock);
        });
    }

    #[test]
    fn test_first_visit_then_toggle_yams() {
        let storage = leaked_storage();
        with_context(storage, |ctx| {
            ctx.render();
            let rows = ctx.rows();
            assert_eq!(rows.len(), 5);
            let in_stock: Vec<&str> = rows
                .iter()
                .filter(|r| r.status == StockStatus::InStock)
                .map(|r| r.name.as_str())
                .collect();
            assert_eq!(in_stock, vec!["Yams", "Peppers"]);

            ctx.toggle(0);

            let rows = ctx.rows();
            assert_eq!(rows[0].name, "Yams");
            assert_eq!(rows[0].status.label(), "Out of Stock");
            assert_eq!(rows[0].status.toggle_label(), "Mark In");
            assert_eq!(rows[0].aria_pressed(), "false");

            let persisted: Vec<InventoryItem> =
                serde_json::from_str(&storage.raw(KEY).unwrap()).unwrap();
            assert!(!persisted[0].in_stock);
        });
    }

    #[test]
    fn test_append_re_renders_and_blank_does_not() {
        let storage = leaked_storage();
        with_context(storage, |ctx| {
            assert!(!ctx.append("   "));
            assert!(ctx.rows().is_empty());
            assert_eq!(storage.raw(KEY), None);

            assert!(ctx.append(" Maize "));
            let rows = ctx.rows();
            assert_eq!(rows.len(), 6);
            assert_eq!(rows[5].name, "Maize");
            assert_eq!(rows[5].status, StockStatus::InStock);
        });
    }

    #[test]
    fn test_failed_write_shows_last_persisted_state() {
        let storage = leaked_storage();
        with_context(storage, |ctx| {
            ctx.render();
            storage.fail_writes(true);

            ctx.toggle(0);
            assert!(ctx.append("Cassava"));

            let rows = ctx.rows();
            assert_eq!(rows.len(), 5);
            assert_eq!(rows[0].status, StockStatus::InStock);
            assert_eq!(storage.raw(KEY), None);
        });
    }
}
