//! Stock Form Component
//!
//! Single text field for adding a new in-stock item.

use leptos::html;
use leptos::prelude::*;

use crate::context::BrowserSiteContext;

#[component]
pub fn StockForm() -> impl IntoView {
    let ctx = use_context::<BrowserSiteContext>().expect("SiteContext should be provided");
    let input_ref = NodeRef::<html::Input>::new();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else { return };
        let name = input.value();
        if name.trim().is_empty() {
            return;
        }
        ctx.append(&name);
        input.set_value("");
        let _ = input.focus();
    };

    view! {
        <form id="stockForm" class="stock-form" on:submit=add_item>
            <input
                id="stockName"
                type="text"
                placeholder="Add stock item..."
                aria-label="Item name"
                autocomplete="off"
                node_ref=input_ref
            />
            <button type="submit" class="btn">"Add"</button>
        </form>
    }
}
