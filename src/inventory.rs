//! Inventory Store
//!
//! Read-modify-write access to the persisted stock list. Every operation
//! reloads the whole list from storage and writes the whole list back.
//! Failures never reach the caller: reads fall back to the seed inventory
//! and writes are logged and dropped.

use crate::models::{default_inventory, InventoryItem};
use crate::storage::{KeyValueStore, StorageError};

type InventoryResult<T> = Result<T, InventoryError>;

#[derive(Debug)]
enum InventoryError {
    Storage(StorageError),
    Json(serde_json::Error),
    /// Valid JSON, but not an array
    NotASequence,
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::Storage(err) => write!(f, "{}", err),
            InventoryError::Json(err) => write!(f, "Invalid inventory JSON: {}", err),
            InventoryError::NotASequence => write!(f, "Stored inventory is not a list"),
        }
    }
}

impl From<StorageError> for InventoryError {
    fn from(err: StorageError) -> Self {
        InventoryError::Storage(err)
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Json(err)
    }
}

/// Stock list persisted as a JSON array under a single key
#[derive(Clone, Copy, Debug)]
pub struct InventoryStore<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStore> InventoryStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    /// Current inventory, or a fresh seed inventory when nothing usable is stored
    pub fn load(&self) -> Vec<InventoryItem> {
        match self.read() {
            Ok(Some(items)) => items,
            Ok(None) => {
                log::debug!("No inventory under '{}', using defaults", self.key);
                default_inventory()
            }
            Err(err) => {
                log::warn!("Failed to load inventory, using defaults: {}", err);
                default_inventory()
            }
        }
    }

    fn read(&self) -> InventoryResult<Option<Vec<InventoryItem>>> {
        let raw = match self.storage.get_item(self.key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };
        match serde_json::from_str::<serde_json::Value>(&raw)? {
            serde_json::Value::Array(elements) => Ok(Some(
                elements.into_iter().map(InventoryItem::from_stored).collect(),
            )),
            _ => Err(InventoryError::NotASequence),
        }
    }

    /// Persist the whole list. Returns `false` (after logging) if the write failed;
    /// whatever the page shows is then ahead of storage.
    pub fn save(&self, items: &[InventoryItem]) -> bool {
        match self.write(items) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to save inventory: {}", err);
                false
            }
        }
    }

    fn write(&self, items: &[InventoryItem]) -> InventoryResult<()> {
        let raw = serde_json::to_string(items)?;
        self.storage.set_item(self.key, &raw)?;
        Ok(())
    }

    /// Flip the stock flag at `index`. Returns the new flag, or `None` when
    /// the index is out of range (nothing is written then).
    pub fn toggle(&self, index: usize) -> Option<bool> {
        let mut items = self.load();
        let len = items.len();
        let Some(item) = items.get_mut(index) else {
            log::warn!("Ignoring toggle of inventory row {} (only {} rows)", index, len);
            return None;
        };
        item.in_stock = !item.in_stock;
        let in_stock = item.in_stock;
        self.save(&items);
        Some(in_stock)
    }

    /// Append a new in-stock item. Blank names are ignored and return `false`.
    pub fn append(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let mut items = self.load();
        items.push(InventoryItem::new(name, true));
        self.save(&items);
        true
    }
}
