//! # Order Client
//!
//! The Order Store as the tracker sees it: list by status, create, patch, change status,
//! delete. Each call is one request with no retry.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderPatch, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(client = %params.client))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, total = order.total, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner.list(status).await.map_err(Self::map_error)
    }

    /// Moves an order to `status` without recording a payment method.
    #[instrument(skip(self))]
    pub async fn set_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        self.send_status(id, status, None).await
    }

    /// Marks a pending-payment order as paid with `payment_method`.
    #[instrument(skip(self))]
    pub async fn set_paid(&self, id: OrderId, payment_method: Option<String>) -> Result<Order, OrderError> {
        self.send_status(id, OrderStatus::Paid, payment_method).await
    }

    async fn send_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        payment_method: Option<String>,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(
                id,
                OrderAction::SetStatus {
                    status,
                    payment_method,
                },
            )
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, patch: OrderPatch) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }

    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Store-side [`OrderError`]s come back as themselves; everything else is a
    /// communication failure.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
