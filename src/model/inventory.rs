//! Inventory items and their stock levels.
//!
//! `InventoryItem` implements [`ActorEntity`](crate::framework::ActorEntity) (see
//! [`inventory_actor`](crate::inventory_actor)), so the inventory is a plain
//! [`ResourceActor<InventoryItem>`](crate::framework::ResourceActor).

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for inventory items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InventoryId(pub String);

impl From<u32> for InventoryId {
    fn from(id: u32) -> Self {
        Self(format!("item_{id}"))
    }
}

impl Display for InventoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryId,
    pub name: String,
    pub stock: u32,
    pub min_stock: u32,
    pub provider: String,
}

/// How an item's stock compares to its configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockLevel {
    Low,
    AtMinimum,
    Healthy,
}

impl StockLevel {
    pub fn classify(stock: u32, min_stock: u32) -> Self {
        match stock.cmp(&min_stock) {
            std::cmp::Ordering::Less => StockLevel::Low,
            std::cmp::Ordering::Equal => StockLevel::AtMinimum,
            std::cmp::Ordering::Greater => StockLevel::Healthy,
        }
    }
}

impl InventoryItem {
    pub fn level(&self) -> StockLevel {
        StockLevel::classify(self.stock, self.min_stock)
    }

    /// Whether `typed` names this item: both sides trimmed, case ignored.
    pub fn confirms_deletion(&self, typed: &str) -> bool {
        typed.trim().to_lowercase() == self.name.trim().to_lowercase()
    }
}

/// Payload for adding an item to the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCreate {
    pub name: String,
    pub stock: u32,
    pub min_stock: u32,
    pub provider: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpdate {
    pub name: Option<String>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub provider: Option<String>,
}

/// Which items a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InventoryFilter {
    #[default]
    All,
    Level(StockLevel),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salsa() -> InventoryItem {
        InventoryItem {
            id: InventoryId::from(1),
            name: "Salsa Verde".into(),
            stock: 3,
            min_stock: 5,
            provider: "La Huerta".into(),
        }
    }

    #[test]
    fn test_stock_level_boundaries() {
        assert_eq!(StockLevel::classify(2, 3), StockLevel::Low);
        assert_eq!(StockLevel::classify(3, 3), StockLevel::AtMinimum);
        assert_eq!(StockLevel::classify(4, 3), StockLevel::Healthy);
        assert_eq!(StockLevel::classify(0, 0), StockLevel::AtMinimum);
        assert_eq!(salsa().level(), StockLevel::Low);
    }

    #[test]
    fn test_deletion_confirmation_ignores_case_and_padding() {
        let item = salsa();
        assert!(item.confirms_deletion("salsa verde"));
        assert!(item.confirms_deletion("  SALSA VERDE "));
        assert!(!item.confirms_deletion("salsa"));
        assert!(!item.confirms_deletion(""));
    }
}
