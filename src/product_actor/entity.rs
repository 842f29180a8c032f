//! [`ActorEntity`] implementation for [`Product`].

use super::actions::ProductAction;
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Extra, Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use async_trait::async_trait;

fn check_price(price: f64) -> Result<f64, ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ProductError::InvalidPrice(price))
    }
}

fn check_extras(extras: Vec<Extra>) -> Result<Vec<Extra>, ProductError> {
    for (i, extra) in extras.iter().enumerate() {
        check_price(extra.price)?;
        if extras[..i].iter().any(|e| e.name == extra.name) {
            return Err(ProductError::ValidationError(format!(
                "duplicate extra: {}",
                extra.name
            )));
        }
    }
    Ok(extras)
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Action = ProductAction;
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError("product name is required".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            price: check_price(params.price)?,
            category: params.category,
            extras: check_extras(params.extras)?,
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::All => true,
            ProductFilter::Category(category) => &self.category == category,
        }
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(extras) = update.extras {
            self.extras = check_extras(extras)?;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ProductAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
