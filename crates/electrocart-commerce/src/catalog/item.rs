//! Catalog item types.

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Highest rating an item can carry.
pub const MAX_RATING: f64 = 5.0;

/// A purchasable item in the catalog.
///
/// Items are defined by the catalog and never created by shoppers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image reference (URL or asset key).
    pub image: String,
    /// Category label (case-sensitive).
    pub category: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Units in stock.
    pub stock: u32,
}

impl Item {
    /// Create an item with no image, a zero rating and no stock.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.into(),
            rating: 0.0,
            stock: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Check if at least one unit is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock badge for this item given the low-stock threshold.
    pub fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        match self.stock {
            0 => StockStatus::OutOfStock,
            n if n < low_stock_threshold => StockStatus::OnlyLeft(n),
            _ => StockStatus::InStock,
        }
    }

    /// Number of filled stars when rendering the rating (rounded down).
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }
}

/// Stock badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// Plenty in stock; no badge.
    InStock,
    /// Low stock: "Only N left".
    OnlyLeft(u32),
    /// Nothing left to sell.
    OutOfStock,
}

impl StockStatus {
    /// Badge label, if any.
    pub fn badge(&self) -> Option<String> {
        match self {
            StockStatus::InStock => None,
            StockStatus::OnlyLeft(n) => Some(format!("Only {} left", n)),
            StockStatus::OutOfStock => Some("Out of Stock".to_string()),
        }
    }
}

/// An item as written in a catalog document.
///
/// Prices are plain decimals here; the document's currency is applied when
/// the record becomes an [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
}

impl ItemRecord {
    /// Convert into an item priced in `currency`.
    ///
    /// Returns an error if the price is not finite or too large to hold in
    /// minor units.
    pub fn into_item(self, currency: Currency) -> Result<Item, CommerceError> {
        let price = Money::try_from_decimal(self.price, currency).ok_or_else(|| {
            CommerceError::InvalidPrice {
                item_id: self.id.to_string(),
                price: self.price.to_string(),
            }
        })?;
        Ok(Item {
            id: self.id,
            name: self.name,
            description: self.description,
            price,
            image: self.image,
            category: self.category,
            rating: self.rating,
            stock: self.stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item::new("1", "Studio Headphones", "Audio", Money::new(29999, Currency::USD))
            .with_description("Noise cancelling over-ear headphones")
            .with_rating(4.8)
            .with_stock(15)
    }

    #[test]
    fn test_item_builder() {
        let item = item();
        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.category, "Audio");
        assert_eq!(item.stock, 15);
        assert!(item.is_in_stock());
    }

    #[test]
    fn test_stock_status() {
        let item = item();
        assert_eq!(item.stock_status(10), StockStatus::InStock);
        assert_eq!(item.clone().with_stock(3).stock_status(10), StockStatus::OnlyLeft(3));
        assert_eq!(item.clone().with_stock(0).stock_status(10), StockStatus::OutOfStock);
        // Threshold is exclusive.
        assert_eq!(item.with_stock(10).stock_status(10), StockStatus::InStock);
    }

    #[test]
    fn test_stock_badge() {
        assert_eq!(StockStatus::InStock.badge(), None);
        assert_eq!(StockStatus::OnlyLeft(2).badge().as_deref(), Some("Only 2 left"));
        assert_eq!(StockStatus::OutOfStock.badge().as_deref(), Some("Out of Stock"));
    }

    #[test]
    fn test_full_stars() {
        assert_eq!(item().full_stars(), 4);
        assert_eq!(item().with_rating(5.0).full_stars(), 5);
        assert_eq!(item().with_rating(0.4).full_stars(), 0);
    }

    #[test]
    fn test_record_into_item() {
        let record: ItemRecord = serde_json::from_str(
            r#"{"id":"7","name":"Smart Watch","price":199.99,"category":"Wearables","stock":4}"#,
        )
        .unwrap();
        let item = record.into_item(Currency::USD).unwrap();
        assert_eq!(item.price, Money::new(19999, Currency::USD));
        assert_eq!(item.description, "");
        assert_eq!(item.rating, 0.0);
    }

    #[test]
    fn test_record_with_nan_price_is_rejected() {
        let record = ItemRecord {
            id: ItemId::new("9"),
            name: "Broken Listing".to_string(),
            description: String::new(),
            price: f64::NAN,
            image: String::new(),
            category: "Audio".to_string(),
            rating: 0.0,
            stock: 1,
        };
        assert!(matches!(
            record.into_item(Currency::USD),
            Err(CommerceError::InvalidPrice { .. })
        ));
    }
}
