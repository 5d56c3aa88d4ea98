//! Stock Item Row Component
//!
//! Name, status badge and the in/out toggle for one inventory entry.

use leptos::prelude::*;

use crate::context::BrowserSiteContext;
use crate::stock_view::{is_toggle_key, StockRow};

#[component]
pub fn StockItemRow(row: StockRow) -> impl IntoView {
    let ctx = use_context::<BrowserSiteContext>().expect("SiteContext should be provided");

    let index = row.index;
    let status = row.status;

    // Handle the key ourselves so the browser doesn't also synthesize a click
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_toggle_key(&ev.key()) {
            ev.prevent_default();
            ctx.toggle(index);
        }
    };

    view! {
        <li class="stock-item">
            <div class="meta">
                <h4>{row.name.clone()}</h4>
                <span class=status.badge_class()>{status.label()}</span>
            </div>
            <div class="controls">
                <button
                    type="button"
                    class="toggle-btn"
                    aria-pressed=row.aria_pressed()
                    on:click=move |_| ctx.toggle(index)
                    on:keydown=on_keydown
                >
                    {status.toggle_label()}
                </button>
            </div>
        </li>
    }
}
