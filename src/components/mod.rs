//! UI Components
//!
//! Leptos components for the inventory panel.

mod stock_form;
mod stock_list;
mod stock_item_row;

pub use stock_form::StockForm;
pub use stock_list::StockList;
pub use stock_item_row::StockItemRow;
