//! [`ActorEntity`] implementation for [`InventoryItem`].

use super::actions::InventoryAction;
use super::error::InventoryError;
use crate::framework::ActorEntity;
use crate::model::{InventoryCreate, InventoryFilter, InventoryId, InventoryItem, InventoryUpdate};
use async_trait::async_trait;

fn check_name(name: String) -> Result<String, InventoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::ValidationError("item name is required".into()));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = InventoryId;
    type Create = InventoryCreate;
    type Update = InventoryUpdate;
    type Filter = InventoryFilter;
    type Action = InventoryAction;
    type ActionResult = ();
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(id: InventoryId, params: InventoryCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: check_name(params.name)?,
            stock: params.stock,
            min_stock: params.min_stock,
            provider: params.provider.trim().to_string(),
        })
    }

    fn matches(&self, filter: &InventoryFilter) -> bool {
        match filter {
            InventoryFilter::All => true,
            InventoryFilter::Level(level) => self.level() == *level,
        }
    }

    async fn on_update(&mut self, update: InventoryUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = check_name(name)?;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(min_stock) = update.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(provider) = update.provider {
            self.provider = provider.trim().to_string();
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: InventoryAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockLevel;

    fn params(name: &str, stock: u32, min_stock: u32) -> InventoryCreate {
        InventoryCreate {
            name: name.into(),
            stock,
            min_stock,
            provider: " La Huerta ".into(),
        }
    }

    #[test]
    fn test_create_trims_and_requires_name() {
        let item = InventoryItem::from_create_params(InventoryId::from(1), params(" Tortillas ", 40, 20)).unwrap();
        assert_eq!(item.name, "Tortillas");
        assert_eq!(item.provider, "La Huerta");
        assert!(matches!(
            InventoryItem::from_create_params(InventoryId::from(2), params("  ", 1, 1)),
            Err(InventoryError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_update_moves_item_between_levels() {
        let mut item = InventoryItem::from_create_params(InventoryId::from(1), params("Limes", 10, 5)).unwrap();
        assert!(item.matches(&InventoryFilter::Level(StockLevel::Healthy)));

        item.on_update(
            InventoryUpdate {
                stock: Some(2),
                ..Default::default()
            },
            &(),
        )
        .await
        .unwrap();

        assert!(item.matches(&InventoryFilter::Level(StockLevel::Low)));
        assert!(item.matches(&InventoryFilter::All));
        assert_eq!(item.name, "Limes");
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let mut item = InventoryItem::from_create_params(InventoryId::from(1), params("Limes", 10, 5)).unwrap();
        let result = item
            .on_update(
                InventoryUpdate {
                    name: Some(" ".into()),
                    ..Default::default()
                },
                &(),
            )
            .await;
        assert!(matches!(result, Err(InventoryError::ValidationError(_))));
    }
}
