//! [`ActorEntity`] implementation for [`Order`].
//!
//! The store side of every order rule lives here: `created_at` is stamped once, `total` is
//! always derived from the line items, edits are limited to in-progress orders and status
//! only moves forward one step at a time.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{line_items_total, LineItem, Order, OrderCreate, OrderId, OrderPatch, OrderStatus};
use async_trait::async_trait;
use chrono::Utc;

fn validate_contents(client: &str, line_items: &[LineItem]) -> Result<(), OrderError> {
    if client.trim().is_empty() {
        return Err(OrderError::ValidationError("client name is required".into()));
    }
    if line_items.is_empty() {
        return Err(OrderError::ValidationError(
            "an order needs at least one line item".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderPatch;
    type Filter = OrderStatus;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        validate_contents(&params.client, &params.line_items)?;
        Ok(Order::new(
            id,
            params.client.trim(),
            params.order_type,
            params.line_items,
            Utc::now(),
        ))
    }

    fn matches(&self, status: &OrderStatus) -> bool {
        self.status == *status
    }

    /// Applies an [`OrderPatch`] and recomputes `total`.
    ///
    /// `created_at` and `status` are never touched here.
    async fn on_update(&mut self, patch: OrderPatch, _ctx: &()) -> Result<(), Self::Error> {
        if self.status != OrderStatus::InProgress {
            return Err(OrderError::NotEditable {
                id: self.id.to_string(),
                status: self.status,
            });
        }
        if let Some(client) = patch.client {
            self.client = client.trim().to_string();
        }
        if let Some(order_type) = patch.order_type {
            self.order_type = order_type;
        }
        if let Some(line_items) = patch.line_items {
            self.line_items = line_items;
        }
        validate_contents(&self.client, &self.line_items)?;
        self.total = line_items_total(&self.line_items);
        Ok(())
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<Order, Self::Error> {
        match action {
            OrderAction::SetStatus {
                status,
                payment_method,
            } => {
                if !self.status.can_advance_to(status) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: status,
                    });
                }
                self.status = status;
                if status == OrderStatus::Paid {
                    self.payment_method = payment_method;
                }
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Extra, OrderType, ProductId};

    fn create(client: &str, items: Vec<LineItem>) -> OrderCreate {
        OrderCreate {
            client: client.into(),
            order_type: OrderType::DineIn { table: 3 },
            line_items: items,
        }
    }

    fn taco() -> LineItem {
        LineItem::new(ProductId::from(1), "Taco", 2.5).with_extra(Extra::new("Salsa", 0.5))
    }

    #[test]
    fn test_create_computes_total_and_starts_in_progress() {
        let order = Order::from_create_params(OrderId::from(1), create(" Ana ", vec![taco(), taco()]))
            .unwrap();
        assert_eq!(order.client, "Ana");
        assert_eq!(order.total, 6.0);
        assert_eq!(order.status, OrderStatus::InProgress);
        assert!(order.payment_method.is_none());
    }

    #[test]
    fn test_create_rejects_blank_client_and_empty_items() {
        assert!(matches!(
            Order::from_create_params(OrderId::from(1), create("  ", vec![taco()])),
            Err(OrderError::ValidationError(_))
        ));
        assert!(matches!(
            Order::from_create_params(OrderId::from(1), create("Ana", vec![])),
            Err(OrderError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_patch_recomputes_total_but_keeps_created_at() {
        let mut order = Order::from_create_params(OrderId::from(1), create("Ana", vec![taco()])).unwrap();
        let created_at = order.created_at;

        let patch = OrderPatch {
            line_items: Some(vec![taco(), taco(), taco()]),
            order_type: Some(OrderType::Takeout {
                address: "Main St 1".into(),
            }),
            ..Default::default()
        };
        order.on_update(patch, &()).await.unwrap();

        assert_eq!(order.total, 9.0);
        assert_eq!(order.created_at, created_at);
        assert_eq!(order.order_type.address(), Some("Main St 1"));
        assert_eq!(order.order_type.table(), None);
    }

    #[tokio::test]
    async fn test_patch_rejected_once_ready() {
        let mut order = Order::from_create_params(OrderId::from(1), create("Ana", vec![taco()])).unwrap();
        order.status = OrderStatus::PendingPayment;
        let result = order
            .on_update(
                OrderPatch {
                    client: Some("Bea".into()),
                    ..Default::default()
                },
                &(),
            )
            .await;
        assert!(matches!(result, Err(OrderError::NotEditable { .. })));
    }

    #[tokio::test]
    async fn test_status_moves_forward_one_step() {
        let mut order = Order::from_create_params(OrderId::from(1), create("Ana", vec![taco()])).unwrap();

        let skip = order
            .handle_action(
                OrderAction::SetStatus {
                    status: OrderStatus::Paid,
                    payment_method: Some("cash".into()),
                },
                &(),
            )
            .await;
        assert_eq!(
            skip,
            Err(OrderError::InvalidTransition {
                from: OrderStatus::InProgress,
                to: OrderStatus::Paid,
            })
        );

        let ready = order
            .handle_action(
                OrderAction::SetStatus {
                    status: OrderStatus::PendingPayment,
                    payment_method: Some("ignored".into()),
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(ready.status, OrderStatus::PendingPayment);
        assert!(ready.payment_method.is_none());

        let paid = order
            .handle_action(
                OrderAction::SetStatus {
                    status: OrderStatus::Paid,
                    payment_method: Some("courtesy".into()),
                },
                &(),
            )
            .await
            .unwrap();
        assert!(paid.is_courtesy());

        let back = order
            .handle_action(
                OrderAction::SetStatus {
                    status: OrderStatus::PendingPayment,
                    payment_method: None,
                },
                &(),
            )
            .await;
        assert!(matches!(back, Err(OrderError::InvalidTransition { .. })));
    }
}
