//! # Inventory Client
//!
//! High-level API for the Inventory store. Deleting an item takes the item's name typed back
//! as confirmation; a mismatch never reaches the store.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryCreate, InventoryFilter, InventoryId, InventoryItem, InventoryUpdate, StockLevel};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Inventory store.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, params: InventoryCreate) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self, filter: InventoryFilter) -> Result<Vec<InventoryItem>, InventoryError> {
        debug!("Sending request");
        self.inner.list(filter).await.map_err(Self::map_error)
    }

    /// Items whose stock is below their minimum.
    pub async fn low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        self.list_items(InventoryFilter::Level(StockLevel::Low)).await
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: InventoryId,
        update: InventoryUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Deletes `item` once `confirmation` matches its name (trimmed, case-insensitive).
    #[instrument(skip(self, item, confirmation), fields(item_id = %item.id))]
    pub async fn delete_item(&self, item: &InventoryItem, confirmation: &str) -> Result<(), InventoryError> {
        if !item.confirms_deletion(confirmation) {
            debug!("Delete confirmation mismatch");
            return Err(InventoryError::ConfirmationMismatch);
        }
        self.delete(item.id.clone()).await.map_err(|e| {
            warn!(error = %e, "Delete failed");
            e
        })?;
        info!(name = %item.name, "Inventory item deleted");
        Ok(())
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<InventoryError>() {
                Ok(err) => *err,
                Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
            },
            other => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
