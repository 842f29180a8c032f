//! Stock is changed through a plain update, so the inventory has no custom actions.

#[derive(Debug, Clone)]
pub enum InventoryAction {}
