//! Frontend Models
//!
//! Data structures matching the items API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
///
/// The API may hand out numeric or string ids; both are kept exactly as
/// received so they round-trip into request paths unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Num(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Item {
    #[cfg(test)]
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Editable fields of this item
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }
}

/// Title and body of an item that has no server id yet, or of a pending edit.
/// This is also the request payload for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub body: String,
}

impl ItemDraft {
    #[cfg(test)]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Same fields as the committed item
    pub fn matches(&self, item: &Item) -> bool {
        self.title == item.title && self.body == item.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_accepts_numbers_and_strings() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id":1,"title":"Milk","body":"buy"},{"id":"a1b2","title":"Eggs","body":"dozen"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].id, ItemId::Num(1));
        assert_eq!(items[1].id, ItemId::Text("a1b2".into()));
        assert_eq!(items[0].id.to_string(), "1");
        assert_eq!(items[1].id.to_string(), "a1b2");
    }

    #[test]
    fn test_missing_body_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id":3,"title":"Bread"}"#).unwrap();
        assert_eq!(item.body, "");
    }

    #[test]
    fn test_draft_payload_has_no_id() {
        let json = serde_json::to_value(ItemDraft::new("Eggs", "dozen")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Eggs", "body": "dozen"}));
    }

    #[test]
    fn test_draft_matches() {
        let item = Item::new(1, "Milk", "buy");
        assert!(item.draft().matches(&item));
        assert!(!ItemDraft::new("Milk", "buy more").matches(&item));
    }
}
