//! Orders and their line items.
//!
//! `Order` implements [`ActorEntity`](crate::framework::ActorEntity) (see
//! [`order_actor`](crate::order_actor)), so the Order Store is a plain
//! [`ResourceActor<Order>`](crate::framework::ResourceActor).
//!
//! The store owns `id`, `created_at` and `total`: clients never set them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::ProductId;

/// Payment method that keeps a paid order out of the earnings total.
pub const COURTESY_PAYMENT: &str = "courtesy";

/// Type-safe identifier for Orders. Opaque to everything but the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(format!("order_{id}"))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the order goes. Table and address live inside the variant that needs them, so an
/// order can never carry both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OrderType {
    DineIn { table: u32 },
    Takeout { address: String },
    Pickup,
}

impl OrderType {
    pub fn kind(&self) -> OrderKind {
        match self {
            OrderType::DineIn { .. } => OrderKind::DineIn,
            OrderType::Takeout { .. } => OrderKind::Takeout,
            OrderType::Pickup => OrderKind::Pickup,
        }
    }

    pub fn table(&self) -> Option<u32> {
        match self {
            OrderType::DineIn { table } => Some(*table),
            _ => None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            OrderType::Takeout { address } => Some(address),
            _ => None,
        }
    }
}

/// The order type without its payload, as picked on the order form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderKind {
    #[default]
    DineIn,
    Takeout,
    Pickup,
}

impl Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderKind::DineIn => "dine-in",
            OrderKind::Takeout => "takeout",
            OrderKind::Pickup => "pickup",
        })
    }
}

/// Where an order sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    InProgress,
    PendingPayment,
    Paid,
}

impl OrderStatus {
    /// The only status this one may move to, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::InProgress => Some(OrderStatus::PendingPayment),
            OrderStatus::PendingPayment => Some(OrderStatus::Paid),
            OrderStatus::Paid => None,
        }
    }

    /// Forward, single-step transitions only.
    pub fn can_advance_to(self, target: OrderStatus) -> bool {
        self.next() == Some(target)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::InProgress => "in-progress",
            OrderStatus::PendingPayment => "pending-payment",
            OrderStatus::Paid => "paid",
        })
    }
}

/// Optional add-on to a product, priced independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub name: String,
    pub price: f64,
}

impl Extra {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// One product instance within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: f64,
    /// Unique by name.
    pub extras: Vec<Extra>,
}

impl LineItem {
    pub fn new(product_id: ProductId, name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            product_id,
            name: name.into(),
            unit_price,
            extras: Vec::new(),
        }
    }

    /// Adds `extra` unless one with the same name is already selected.
    pub fn with_extra(mut self, extra: Extra) -> Self {
        if !self.extras.iter().any(|e| e.name == extra.name) {
            self.extras.push(extra);
        }
        self
    }

    pub fn price(&self) -> f64 {
        self.unit_price + self.extras.iter().map(|e| e.price).sum::<f64>()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub client: String,
    pub order_type: OrderType,
    pub line_items: Vec<LineItem>,
    pub status: OrderStatus,
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total: f64,
}

impl Order {
    /// Builds an in-progress order stamped `created_at`, with its total computed from
    /// `line_items`.
    pub fn new(
        id: OrderId,
        client: impl Into<String>,
        order_type: OrderType,
        line_items: Vec<LineItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total = line_items_total(&line_items);
        Self {
            id,
            client: client.into(),
            order_type,
            line_items,
            status: OrderStatus::InProgress,
            payment_method: None,
            created_at,
            total,
        }
    }

    /// Paid with the courtesy method (trimmed, case-insensitive). No method is not courtesy.
    pub fn is_courtesy(&self) -> bool {
        self.payment_method
            .as_deref()
            .is_some_and(|m| m.trim().eq_ignore_ascii_case(COURTESY_PAYMENT))
    }
}

pub fn line_items_total(line_items: &[LineItem]) -> f64 {
    line_items.iter().map(LineItem::price).sum()
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub client: String,
    pub order_type: OrderType,
    pub line_items: Vec<LineItem>,
}

/// Edit of an in-progress order. Every present field replaces the stored one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub client: Option<String>,
    pub order_type: Option<OrderType>,
    pub line_items: Option<Vec<LineItem>>,
}

impl From<OrderCreate> for OrderPatch {
    fn from(create: OrderCreate) -> Self {
        Self {
            client: Some(create.client),
            order_type: Some(create.order_type),
            line_items: Some(create.line_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paid(method: Option<&str>) -> Order {
        let mut order = Order::new(
            OrderId::from(1),
            "Ana",
            OrderType::Pickup,
            vec![LineItem::new(ProductId::from(1), "Taco", 3.0)],
            Utc::now(),
        );
        order.status = OrderStatus::Paid;
        order.payment_method = method.map(str::to_string);
        order
    }

    #[test]
    fn test_courtesy_is_trimmed_and_case_insensitive() {
        assert!(paid(Some("courtesy")).is_courtesy());
        assert!(paid(Some("  Courtesy ")).is_courtesy());
        assert!(paid(Some("COURTESY")).is_courtesy());
        assert!(!paid(Some("cash")).is_courtesy());
        assert!(!paid(None).is_courtesy());
    }

    #[test]
    fn test_only_single_forward_steps_are_allowed() {
        use OrderStatus::*;
        assert!(InProgress.can_advance_to(PendingPayment));
        assert!(PendingPayment.can_advance_to(Paid));
        assert!(!InProgress.can_advance_to(Paid));
        assert!(!PendingPayment.can_advance_to(InProgress));
        assert!(!Paid.can_advance_to(PendingPayment));
        assert!(!Paid.can_advance_to(Paid));
    }

    #[test]
    fn test_total_includes_extras_and_duplicates() {
        let burger = LineItem::new(ProductId::from(1), "Burger", 8.5)
            .with_extra(Extra::new("Cheese", 1.0))
            .with_extra(Extra::new("Cheese", 1.0))
            .with_extra(Extra::new("Bacon", 1.5));
        assert_eq!(burger.extras.len(), 2);
        let items = vec![burger.clone(), burger];
        assert_eq!(line_items_total(&items), 22.0);
    }

    #[test]
    fn test_order_type_serializes_with_tag() {
        let json = serde_json::to_value(OrderType::DineIn { table: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "dine-in", "table": 4 }));
        let pickup: OrderType = serde_json::from_value(serde_json::json!({ "type": "pickup" })).unwrap();
        assert_eq!(pickup, OrderType::Pickup);
    }
}
