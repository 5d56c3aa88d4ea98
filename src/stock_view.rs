//! Stock List View Model
//!
//! Turns the inventory into display rows for the stock list.

use crate::models::InventoryItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn from_flag(in_stock: bool) -> Self {
        if in_stock {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "badge in",
            StockStatus::OutOfStock => "badge out",
        }
    }

    /// Label of the control, naming what it will do next
    pub fn toggle_label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "Mark Out",
            StockStatus::OutOfStock => "Mark In",
        }
    }
}

/// One rendered row; `index` is the item's position in storage
#[derive(Clone, Debug, PartialEq)]
pub struct StockRow {
    pub index: usize,
    pub name: String,
    pub status: StockStatus,
}

impl StockRow {
    /// Value for the toggle's `aria-pressed`
    pub fn aria_pressed(&self) -> &'static str {
        match self.status {
            StockStatus::InStock => "true",
            StockStatus::OutOfStock => "false",
        }
    }
}

pub fn stock_rows(items: &[InventoryItem]) -> Vec<StockRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| StockRow {
            index,
            name: item.name.clone(),
            status: StockStatus::from_flag(item.in_stock),
        })
        .collect()
}

/// Keys (by `KeyboardEvent.key`) that operate a focused toggle
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryStore;
    use crate::storage::MemoryStorage;

    const KEY: &str = "sf_inventory_v1";

    #[test]
    fn test_rows_keep_order_and_duplicates() {
        let items = vec![
            InventoryItem::new("Maize", true),
            InventoryItem::new("Maize", false),
        ];
        let rows = stock_rows(&items);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[0].status, StockStatus::InStock);
        assert_eq!(rows[1].status, StockStatus::OutOfStock);
    }

    #[test]
    fn test_labels_follow_status() {
        let row = &stock_rows(&[InventoryItem::new("Yams", true)])[0];
        assert_eq!(row.status.label(), "In Stock");
        assert_eq!(row.status.badge_class(), "badge in");
        assert_eq!(row.status.toggle_label(), "Mark Out");
        assert_eq!(row.aria_pressed(), "true");

        let row = &stock_rows(&[InventoryItem::new("Yams", false)])[0];
        assert_eq!(row.status.label(), "Out of Stock");
        assert_eq!(row.status.badge_class(), "badge out");
        assert_eq!(row.status.toggle_label(), "Mark In");
        assert_eq!(row.aria_pressed(), "false");
    }

    #[test]
    fn test_toggle_keys() {
        assert!(is_toggle_key("Enter"));
        assert!(is_toggle_key(" "));
        assert!(!is_toggle_key("Escape"));
    }

    #[test]
    fn test_first_visit_then_toggle_first_row() {
        let storage = MemoryStorage::new();
        let store = InventoryStore::new(&storage, KEY);

        let rows = stock_rows(&store.load());
        assert_eq!(rows.len(), 5);
        let in_stock: Vec<&str> = rows
            .iter()
            .filter(|r| r.status == StockStatus::InStock)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(in_stock, vec!["Yams", "Peppers"]);
        assert_eq!(rows.iter().filter(|r| r.status == StockStatus::OutOfStock).count(), 3);

        store.toggle(rows[0].index);

        let rows = stock_rows(&store.load());
        assert_eq!(rows[0].name, "Yams");
        assert_eq!(rows[0].status.label(), "Out of Stock");
        assert_eq!(rows[0].status.toggle_label(), "Mark In");

        let persisted: Vec<InventoryItem> =
            serde_json::from_str(&storage.raw(KEY).unwrap()).unwrap();
        assert!(!persisted[0].in_stock);
    }
}
