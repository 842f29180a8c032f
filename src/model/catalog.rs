//! Menu products and the catalog snapshot used to render line items.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

use crate::model::{Extra, LineItem};

/// Shown in place of a line item's product once it has left the catalog.
pub const REMOVED_PRODUCT: &str = "Removed product";
/// Shown in place of a selected extra once its product no longer offers it.
pub const REMOVED_EXTRA: &str = "Removed extra";

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(format!("product_{id}"))
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub extras: Vec<Extra>,
}

impl Product {
    pub fn extra(&self, name: &str) -> Option<&Extra> {
        self.extras.iter().find(|e| e.name == name)
    }

    /// A fresh line item for this product carrying `extras`.
    pub fn line_item(&self, extras: impl IntoIterator<Item = Extra>) -> LineItem {
        extras.into_iter().fold(
            LineItem::new(self.id.clone(), self.name.clone(), self.price),
            LineItem::with_extra,
        )
    }
}

/// Payload for adding a product to the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub extras: Option<Vec<Extra>>,
}

/// Which products a listing returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProductFilter {
    #[default]
    All,
    Category(String),
}

/// Point-in-time copy of the menu, keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Renders one line item as `"<product> x1 - Extras: a, b"`.
    ///
    /// A product missing from the catalog renders as [`REMOVED_PRODUCT`] and every extra it
    /// carried as [`REMOVED_EXTRA`]. An extra the product no longer offers renders as
    /// [`REMOVED_EXTRA`] too.
    pub fn describe(&self, item: &LineItem) -> String {
        let product = self.product(&item.product_id);
        let name = product.map_or(REMOVED_PRODUCT, |p| p.name.as_str());
        let mut line = format!("{name} x1");

        if !item.extras.is_empty() {
            let extras: Vec<&str> = item
                .extras
                .iter()
                .map(|extra| match product.and_then(|p| p.extra(&extra.name)) {
                    Some(known) => known.name.as_str(),
                    None => REMOVED_EXTRA,
                })
                .collect();
            line.push_str(" - Extras: ");
            line.push_str(&extras.join(", "));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> Product {
        Product {
            id: ProductId::from(1),
            name: "Burger".into(),
            price: 8.0,
            category: "mains".into(),
            extras: vec![Extra::new("Cheese", 1.0), Extra::new("Bacon", 1.5)],
        }
    }

    #[test]
    fn test_describe_known_product_and_extras() {
        let catalog = Catalog::new([burger()]);
        let item = burger().line_item([Extra::new("Cheese", 1.0)]);
        assert_eq!(catalog.describe(&item), "Burger x1 - Extras: Cheese");
    }

    #[test]
    fn test_describe_without_extras_has_no_suffix() {
        let catalog = Catalog::new([burger()]);
        let item = burger().line_item([]);
        assert_eq!(catalog.describe(&item), "Burger x1");
    }

    #[test]
    fn test_describe_removed_product_uses_placeholders() {
        let catalog = Catalog::default();
        let item = burger().line_item([Extra::new("Bacon", 1.5)]);
        assert_eq!(
            catalog.describe(&item),
            format!("{REMOVED_PRODUCT} x1 - Extras: {REMOVED_EXTRA}")
        );
    }

    #[test]
    fn test_describe_removed_extra_only() {
        let mut current = burger();
        current.extras.retain(|e| e.name != "Bacon");
        let catalog = Catalog::new([current]);
        let item = burger().line_item([Extra::new("Cheese", 1.0), Extra::new("Bacon", 1.5)]);
        assert_eq!(
            catalog.describe(&item),
            format!("Burger x1 - Extras: Cheese, {REMOVED_EXTRA}")
        );
    }
}
