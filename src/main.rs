//! # Order Tracker demo
//!
//! Runs one service day in fast-forward against in-process stores:
//! 1. Loads [`Settings`](order_tracker::settings::Settings) (optional JSON path as first argument).
//! 2. Fills the menu and the inventory, reports low stock, and submits two orders through
//!    [`OrderDraft`].
//! 3. Moves them through the board and prints cards and today's totals.

use order_tracker::lifecycle::{setup_tracing, OrderSystem, RefreshTicker, REFRESH_PERIOD};
use order_tracker::model::{Extra, InventoryCreate, OrderKind, OrderStatus, ProductCreate};
use order_tracker::settings::SettingsHandle;
use order_tracker::tracker::{OrderDraft, DELETE_CONFIRMATION};
use std::path::PathBuf;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = SettingsHandle::load(settings_path.as_deref()).map_err(|e| e.to_string())?;
    info!(name = %settings.current().branding.restaurant_name, "Starting order board");

    let system = OrderSystem::with_settings(settings);

    let span = tracing::info_span!("menu_setup");
    let (burger, soda) = async {
        let burger = system
            .product_client
            .create_product(ProductCreate {
                name: "Burger".to_string(),
                price: 8.5,
                category: "mains".to_string(),
                extras: vec![Extra::new("Cheese", 1.0), Extra::new("Bacon", 1.5)],
            })
            .await?;
        let soda = system
            .product_client
            .create_product(ProductCreate {
                name: "Soda".to_string(),
                price: 2.0,
                category: "drinks".to_string(),
                extras: Vec::new(),
            })
            .await?;
        Ok::<_, order_tracker::product_actor::ProductError>((burger, soda))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let supplies = [("Buns", 12, 20), ("Cheese slices", 40, 25)];
    for (name, stock, min_stock) in supplies {
        if let Err(e) = system
            .inventory_client
            .create_item(InventoryCreate {
                name: name.to_string(),
                stock,
                min_stock,
                provider: "Central Market".to_string(),
            })
            .await
        {
            error!(error = %e, "Inventory item rejected");
        }
    }
    match system.inventory_client.low_stock().await {
        Ok(low) => info!(items = ?low.iter().map(|i| &i.name).collect::<Vec<_>>(), "Low stock"),
        Err(e) => error!(error = %e, "Inventory listing failed"),
    }

    let mut tracker = system.tracker();
    tracker.set_catalog(system.product_client.snapshot().await.map_err(|e| e.to_string())?);

    let mut draft = OrderDraft::new();
    draft.client = "Ana".to_string();
    draft.kind = OrderKind::DineIn;
    draft.table = "4".to_string();
    draft.toggle_extra(&burger.id, Extra::new("Cheese", 1.0));
    draft.add_product(&burger);
    draft.add_product(&soda);
    let first = tracker.submit_draft(&mut draft).await.map_err(|e| e.to_string())?;

    draft.client = "Luis".to_string();
    draft.kind = OrderKind::Pickup;
    draft.add_product(&soda);
    let second = tracker.submit_draft(&mut draft).await.map_err(|e| e.to_string())?;

    let ticker = RefreshTicker::start(REFRESH_PERIOD);
    let mut ticks = ticker.subscribe();
    for _ in 0..2 {
        if ticks.changed().await.is_err() {
            break;
        }
        for card in tracker.in_progress_cards(chrono::Utc::now()) {
            info!(
                client = %card.client,
                urgency = %card.urgency,
                elapsed = %card.elapsed,
                lines = ?card.lines,
                "Card"
            );
        }
    }
    ticker.stop().await;

    let span = tracing::info_span!("checkout");
    let result = async {
        tracker.advance_order(&first.id, OrderStatus::PendingPayment).await?;
        tracker.mark_paid(&first.id, "cash").await?;
        tracker.advance_order(&second.id, OrderStatus::PendingPayment).await?;
        tracker.mark_paid(&second.id, "courtesy").await?;
        tracker.refresh_all().await
    }
    .instrument(span)
    .await;

    if let Err(e) = result {
        error!(error = %e, "Checkout failed");
    }

    let totals = tracker.aggregates();
    info!(earnings = totals.earnings, courtesy = totals.courtesy_total, "Today so far");

    if let Err(e) = tracker.delete_order(&first.id, DELETE_CONFIRMATION).await {
        error!(error = %e, "Delete failed");
    }
    info!(earnings = tracker.aggregates().earnings, "After delete");

    drop(tracker);
    system.shutdown().await;

    info!("Application completed successfully");
    Ok(())
}
