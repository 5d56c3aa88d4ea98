//! Frontend Models
//!
//! Inventory data as persisted in localStorage.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A named stock entry. Its identity is its position in the list.
///
/// Stored entries may have been written by hand or by older pages, so
/// decoding never fails on a field: a missing or non-string name becomes
/// text, and `inStock` follows JavaScript truthiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(rename = "inStock", default, deserialize_with = "truthy")]
    pub in_stock: bool,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, in_stock: bool) -> Self {
        Self {
            name: name.into(),
            in_stock,
        }
    }

    /// Decode one stored list element. Anything that is not an object
    /// reads as an unnamed, out-of-stock entry.
    pub fn from_stored(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|_| Self::new("", false))
    }
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Seed stock shown until something is saved
const DEFAULT_INVENTORY: &[(&str, bool)] = &[
    ("Yams", true),
    ("Peppers", true),
    ("Fish Fingerlings", false),
    ("Broiler Chicks", false),
    ("Snail Rearing (stock)", false),
];

/// Build a new copy of the seed inventory
pub fn default_inventory() -> Vec<InventoryItem> {
    DEFAULT_INVENTORY
        .iter()
        .map(|(name, in_stock)| InventoryItem::new(*name, *in_stock))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inventory() {
        let items = default_inventory();
        assert_eq!(items.len(), 5);
        let in_stock: Vec<&str> = items.iter().filter(|i| i.in_stock).map(|i| i.name.as_str()).collect();
        assert_eq!(in_stock, vec!["Yams", "Peppers"]);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&InventoryItem::new("Maize", true)).unwrap();
        assert_eq!(json, r#"{"name":"Maize","inStock":true}"#);
    }

    #[test]
    fn test_missing_stock_flag_reads_false() {
        let item: InventoryItem = serde_json::from_str(r#"{"name":"Cassava"}"#).unwrap();
        assert_eq!(item, InventoryItem::new("Cassava", false));
    }

    #[test]
    fn test_stock_flag_follows_js_truthiness() {
        let cases = [
            ("null", false),
            ("0", false),
            ("0.0", false),
            (r#""""#, false),
            ("false", false),
            (r#""no""#, true),
            ("1", true),
            ("[]", true),
            ("{}", true),
        ];
        for (flag, expected) in cases {
            let raw = format!(r#"{{"name":"Maize","inStock":{}}}"#, flag);
            let item: InventoryItem = serde_json::from_str(&raw).unwrap();
            assert_eq!(item.in_stock, expected, "inStock {}", flag);
        }
    }

    #[test]
    fn test_odd_names_and_elements_still_decode() {
        let item: InventoryItem = serde_json::from_str(r#"{"name":42,"inStock":true}"#).unwrap();
        assert_eq!(item, InventoryItem::new("42", true));

        let item: InventoryItem = serde_json::from_str(r#"{"inStock":true}"#).unwrap();
        assert_eq!(item, InventoryItem::new("", true));

        assert_eq!(InventoryItem::from_stored(serde_json::json!(7)), InventoryItem::new("", false));
    }
}
