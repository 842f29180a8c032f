//! # Order Lifecycle Tracker
//!
//! Holds every order the front of house currently knows about, keyed by [`OrderId`], and
//! issues the lifecycle commands against the Order Store.
//!
//! ## One source of truth
//!
//! Orders are fetched per status, but stored once. [`OrderLifecycleTracker::refresh`] replaces
//! exactly the entries of the refreshed status, so the in-progress, pending-payment and paid
//! views are always disjoint filters over the same map.
//!
//! ## Commands
//!
//! | Command | Local guard | On success |
//! |---------|-------------|------------|
//! | [`advance_order`](OrderLifecycleTracker::advance_order) | single forward step | source and target statuses re-fetched |
//! | [`mark_paid`](OrderLifecycleTracker::mark_paid) | order is pending payment | as above |
//! | [`delete_order`](OrderLifecycleTracker::delete_order) | typed confirmation | order dropped, earnings adjusted |
//! | [`submit_draft`](OrderLifecycleTracker::submit_draft) | draft validation | draft cleared, in-progress re-fetched |
//!
//! A rejected guard never reaches the store. A failed store call leaves local state as it was
//! and is returned as [`TrackerError::Store`]. Nothing is retried.

use crate::clients::OrderClient;
use crate::model::{Catalog, Order, OrderId, OrderStatus, OrderType};
use crate::settings::{Settings, ThresholdSettings};
use crate::tracker::aggregates::{compute_daily_aggregates, created_on, DailyAggregates};
use crate::tracker::draft::OrderDraft;
use crate::tracker::error::TrackerError;
use crate::tracker::urgency::{classify_urgency_at, format_elapsed_at, Urgency};
use chrono::{DateTime, Local, Utc};
use std::collections::HashMap;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// What a delete confirmation must read, ignoring case.
pub const DELETE_CONFIRMATION: &str = "DELETE";

/// Everything an in-progress card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCard {
    pub id: OrderId,
    pub client: String,
    pub order_type: OrderType,
    pub lines: Vec<String>,
    pub total: f64,
    pub urgency: Urgency,
    pub elapsed: String,
}

pub struct OrderLifecycleTracker {
    client: OrderClient,
    settings: watch::Receiver<Settings>,
    orders: HashMap<OrderId, Order>,
    aggregates: DailyAggregates,
    catalog: Catalog,
}

impl OrderLifecycleTracker {
    pub fn new(client: OrderClient, settings: watch::Receiver<Settings>) -> Self {
        Self {
            client,
            settings,
            orders: HashMap::new(),
            aggregates: DailyAggregates::default(),
            catalog: Catalog::default(),
        }
    }

    /// Replaces the catalog used to describe line items.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        debug!(products = catalog.len(), "Catalog replaced");
        self.catalog = catalog;
    }

    /// The thresholds as currently published.
    pub fn thresholds(&self) -> ThresholdSettings {
        self.settings.borrow().thresholds
    }

    pub fn aggregates(&self) -> DailyAggregates {
        self.aggregates
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Known orders in `status`, oldest first.
    pub fn orders_with(&self, status: OrderStatus) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.values().filter(|o| o.status == status).collect();
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        orders
    }

    pub fn in_progress(&self) -> Vec<&Order> {
        self.orders_with(OrderStatus::InProgress)
    }

    pub fn pending_payment(&self) -> Vec<&Order> {
        self.orders_with(OrderStatus::PendingPayment)
    }

    pub fn paid(&self) -> Vec<&Order> {
        self.orders_with(OrderStatus::Paid)
    }

    /// Re-fetches every order in `status` from the store.
    ///
    /// On failure the previously known orders of that status are kept.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self, status: OrderStatus) -> Result<(), TrackerError> {
        let fetched = self.client.list_orders(status).await.map_err(|e| {
            warn!(error = %e, "Refresh failed");
            e
        })?;

        self.orders.retain(|_, order| order.status != status);
        debug!(size = fetched.len(), "Orders refreshed");
        self.orders
            .extend(fetched.into_iter().map(|order| (order.id.clone(), order)));

        if status == OrderStatus::Paid {
            self.recompute_aggregates();
        }
        Ok(())
    }

    /// Refreshes every status, even after one of them fails, and returns the first error.
    pub async fn refresh_all(&mut self) -> Result<(), TrackerError> {
        let mut first_error = None;
        for status in [OrderStatus::InProgress, OrderStatus::PendingPayment, OrderStatus::Paid] {
            if let Err(e) = self.refresh(status).await {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn recompute_aggregates(&mut self) {
        let today = Local::now().date_naive();
        self.aggregates = compute_daily_aggregates(self.orders_with(OrderStatus::Paid), today);
    }

    /// Moves an order one step forward: in-progress to pending-payment, or pending-payment to
    /// paid (without a payment method; see [`mark_paid`](Self::mark_paid)).
    pub async fn advance_order(&mut self, id: &OrderId, target: OrderStatus) -> Result<(), TrackerError> {
        self.transition(id, target, None).await
    }

    /// Marks a pending-payment order as paid with `payment_method`.
    pub async fn mark_paid(&mut self, id: &OrderId, payment_method: impl Into<String>) -> Result<(), TrackerError> {
        self.transition(id, OrderStatus::Paid, Some(payment_method.into()))
            .await
    }

    #[instrument(skip(self, payment_method), fields(order_id = %id))]
    async fn transition(
        &mut self,
        id: &OrderId,
        target: OrderStatus,
        payment_method: Option<String>,
    ) -> Result<(), TrackerError> {
        let from = self
            .orders
            .get(id)
            .map(|order| order.status)
            .ok_or_else(|| TrackerError::UnknownOrder(id.clone()))?;

        if !from.can_advance_to(target) {
            debug!(%from, to = %target, "Transition rejected locally");
            return Err(TrackerError::InvalidTransition { from, to: target });
        }

        let result = match payment_method {
            Some(method) => self.client.set_paid(id.clone(), Some(method)).await,
            None => self.client.set_order_status(id.clone(), target).await,
        };
        if let Err(e) = result {
            warn!(error = %e, %from, to = %target, "Status change failed");
            return Err(e.into());
        }

        info!(%from, to = %target, "Order advanced");
        self.orders.remove(id);
        self.refresh_after_command(from).await;
        self.refresh_after_command(target).await;
        Ok(())
    }

    /// The command already succeeded, so a failed follow-up fetch is only logged.
    async fn refresh_after_command(&mut self, status: OrderStatus) {
        if self.refresh(status).await.is_err() {
            warn!(%status, "Orders may be stale until the next refresh");
        }
    }

    /// Deletes an order in any status once `confirmation` matches [`DELETE_CONFIRMATION`]
    /// (case-insensitive, untrimmed).
    ///
    /// Deleting a paid, non-courtesy order from today takes its total off `earnings` right
    /// away. `courtesy_total` is left alone until the next paid refresh.
    #[instrument(skip(self, confirmation), fields(order_id = %id))]
    pub async fn delete_order(&mut self, id: &OrderId, confirmation: &str) -> Result<(), TrackerError> {
        if !confirmation.eq_ignore_ascii_case(DELETE_CONFIRMATION) {
            debug!("Delete confirmation mismatch");
            return Err(TrackerError::ConfirmationMismatch);
        }
        if !self.orders.contains_key(id) {
            return Err(TrackerError::UnknownOrder(id.clone()));
        }

        if let Err(e) = self.client.delete_order(id.clone()).await {
            warn!(error = %e, "Delete failed");
            return Err(e.into());
        }

        if let Some(order) = self.orders.remove(id) {
            let today = Local::now().date_naive();
            if order.status == OrderStatus::Paid && !order.is_courtesy() && created_on(&order, today, &Local) {
                self.aggregates.earnings -= order.total;
            }
            info!(status = %order.status, "Order deleted");
        }
        Ok(())
    }

    /// Creates the order described by `draft`, or patches the order it was loaded from.
    ///
    /// Validation failures never reach the store. On success the draft is cleared.
    #[instrument(skip(self, draft))]
    pub async fn submit_draft(&mut self, draft: &mut OrderDraft) -> Result<Order, TrackerError> {
        let payload = draft.build()?;

        let result = match draft.editing() {
            Some(id) => self.client.update_order(id.clone(), payload.into()).await,
            None => self.client.create_order(payload).await,
        };
        let order = result.map_err(|e| {
            warn!(error = %e, "Submit failed");
            TrackerError::from(e)
        })?;

        info!(order_id = %order.id, total = order.total, "Order submitted");
        draft.clear();
        self.refresh_after_command(OrderStatus::InProgress).await;
        Ok(order)
    }

    /// Loads an in-progress order into a draft for editing.
    pub fn edit_order(&self, id: &OrderId) -> Result<OrderDraft, TrackerError> {
        let order = self
            .orders
            .get(id)
            .ok_or_else(|| TrackerError::UnknownOrder(id.clone()))?;
        if order.status != OrderStatus::InProgress {
            return Err(TrackerError::NotEditable {
                id: id.clone(),
                status: order.status,
            });
        }
        Ok(OrderDraft::from_order(order))
    }

    /// Urgency of `order` against the latest published thresholds.
    pub fn urgency_at(&self, order: &Order, now: DateTime<Utc>) -> Urgency {
        classify_urgency_at(order.created_at, now, &self.thresholds())
    }

    /// Cards for the in-progress column, oldest first, evaluated at `now`.
    pub fn in_progress_cards(&self, now: DateTime<Utc>) -> Vec<OrderCard> {
        let thresholds = self.thresholds();
        self.in_progress()
            .into_iter()
            .map(|order| OrderCard {
                id: order.id.clone(),
                client: order.client.clone(),
                order_type: order.order_type.clone(),
                lines: order.line_items.iter().map(|item| self.catalog.describe(item)).collect(),
                total: order.total,
                urgency: classify_urgency_at(order.created_at, now, &thresholds),
                elapsed: format_elapsed_at(order.created_at, now),
            })
            .collect()
    }
}
