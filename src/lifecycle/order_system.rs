use crate::clients::{InventoryClient, OrderClient, ProductClient};
use crate::settings::SettingsHandle;
use crate::tracker::OrderLifecycleTracker;
use crate::{inventory_actor, order_actor, product_actor};
use tokio::task::JoinHandle;
use tracing::info;

/// Spawns the Order Store, the Product Catalog and the Inventory store and wires their
/// clients.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    pub inventory_client: InventoryClient,
    pub settings: SettingsHandle,
    handles: Vec<JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the stores with default settings. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_settings(SettingsHandle::default())
    }

    pub fn with_settings(settings: SettingsHandle) -> Self {
        let (order_actor, order_client) = order_actor::new();
        let (product_actor, product_client) = product_actor::new();
        let (inventory_actor, inventory_client) = inventory_actor::new();

        let order_handle = tokio::spawn(order_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let inventory_handle = tokio::spawn(inventory_actor.run(()));
        info!("Order system started");

        Self {
            order_client: OrderClient::new(order_client),
            product_client: ProductClient::new(product_client),
            inventory_client: InventoryClient::new(inventory_client),
            settings,
            handles: vec![order_handle, product_handle, inventory_handle],
        }
    }

    /// A tracker on this system's Order Store, subscribed to its settings.
    pub fn tracker(&self) -> OrderLifecycleTracker {
        OrderLifecycleTracker::new(self.order_client.clone(), self.settings.subscribe())
    }

    /// Drops the system's clients and waits for every store to finish.
    ///
    /// Trackers created from this system hold client clones; drop them first or the Order
    /// Store keeps running.
    pub async fn shutdown(self) {
        drop(self.order_client);
        drop(self.product_client);
        drop(self.inventory_client);
        for handle in self.handles {
            let _ = handle.await;
        }
        info!("Order system shut down");
    }
}
