//! Stockfarm Inventory App
//!
//! Root component of the inventory panel: add form above the stock list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{StockForm, StockList};
use crate::config::SiteConfig;
use crate::context::SiteContext;
use crate::inventory::InventoryStore;
use crate::storage::BrowserStorage;
use crate::store::PageState;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let page = Store::new(PageState::default());
    let ctx = SiteContext::new(page, InventoryStore::new(BrowserStorage, config.inventory_key));

    // Provide context to all children
    provide_context(ctx);

    // Initial render from storage
    ctx.render();

    view! {
        <div class="inventory-panel">
            <StockForm />
            <StockList />
        </div>
    }
}
