//! # Order Draft
//!
//! The order being composed on the order form, or an existing in-progress order loaded back
//! for editing. Table and address are kept as typed text and only checked in
//! [`OrderDraft::build`], so switching the order type back and forth never loses input.
//!
//! The draft is plain serde data, so a form can stash it and restore it after a reload.

use crate::model::{Extra, LineItem, Order, OrderCreate, OrderId, OrderKind, OrderType, Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Why a draft cannot be submitted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("client name is required")]
    MissingClient,
    #[error("an order needs at least one item")]
    NoItems,
    #[error("dine-in orders need a table number")]
    MissingTable,
    #[error("takeout orders need an address")]
    MissingAddress,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub client: String,
    pub kind: OrderKind,
    pub table: String,
    pub address: String,
    items: Vec<LineItem>,
    /// Extras picked for a product before it is added to the order.
    pending_extras: HashMap<ProductId, Vec<Extra>>,
    editing: Option<OrderId>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft pre-filled from `order`. Submitting it patches that order instead of creating
    /// a new one.
    pub fn from_order(order: &Order) -> Self {
        Self {
            client: order.client.clone(),
            kind: order.order_type.kind(),
            table: order.order_type.table().map(|t| t.to_string()).unwrap_or_default(),
            address: order.order_type.address().unwrap_or_default().to_string(),
            items: order.line_items.clone(),
            pending_extras: HashMap::new(),
            editing: Some(order.id.clone()),
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn editing(&self) -> Option<&OrderId> {
        self.editing.as_ref()
    }

    /// Sum of the line items as they stand. The store computes the authoritative total.
    pub fn subtotal(&self) -> f64 {
        crate::model::line_items_total(&self.items)
    }

    /// Appends `item`. The same product may appear any number of times.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes the item at `index`. Out of range does nothing.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Selects `extra` for the next `product` added, or deselects it if already selected.
    pub fn toggle_extra(&mut self, product: &ProductId, extra: Extra) {
        let selected = self.pending_extras.entry(product.clone()).or_default();
        match selected.iter().position(|e| e.name == extra.name) {
            Some(pos) => {
                selected.remove(pos);
            }
            None => selected.push(extra),
        }
    }

    pub fn pending_extras(&self, product: &ProductId) -> &[Extra] {
        self.pending_extras
            .get(product)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Adds `product` with its pending extras and resets that selection.
    pub fn add_product(&mut self, product: &Product) {
        let extras = self.pending_extras.remove(&product.id).unwrap_or_default();
        self.add_item(product.line_item(extras));
    }

    /// Back to an empty form, no longer editing anything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the draft into a create payload. Client and address are trimmed.
    pub fn build(&self) -> Result<OrderCreate, ValidationError> {
        let client = self.client.trim();
        if client.is_empty() {
            return Err(ValidationError::MissingClient);
        }
        if self.items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        let order_type = match self.kind {
            OrderKind::DineIn => {
                let table = self
                    .table
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ValidationError::MissingTable)?;
                OrderType::DineIn { table }
            }
            OrderKind::Takeout => {
                let address = self.address.trim();
                if address.is_empty() {
                    return Err(ValidationError::MissingAddress);
                }
                OrderType::Takeout {
                    address: address.to_string(),
                }
            }
            OrderKind::Pickup => OrderType::Pickup,
        };

        Ok(OrderCreate {
            client: client.to_string(),
            order_type,
            line_items: self.items.clone(),
        })
    }
}
