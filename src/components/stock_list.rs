//! Stock List Component

use leptos::prelude::*;

use crate::components::StockItemRow;
use crate::context::BrowserSiteContext;

/// Every row is rebuilt whenever the inventory is re-rendered
#[component]
pub fn StockList() -> impl IntoView {
    let ctx = use_context::<BrowserSiteContext>().expect("SiteContext should be provided");

    view! {
        <ul id="stockList" class="stock-list">
            {move || {
                ctx.rows()
                    .into_iter()
                    .map(|row| view! { <StockItemRow row=row /> })
                    .collect_view()
            }}
        </ul>
    }
}
