//! The in-memory catalog store.

use crate::cart::PriceLookup;
use crate::catalog::item::{Item, ItemRecord, MAX_RATING};
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use crate::search::{Filter, FilterCriteria};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::slice;

/// The fixed list of purchasable items for a session.
///
/// A catalog is validated once at construction and never mutated afterwards,
/// so it can be shared freely behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    currency: Currency,
    items: Vec<Item>,
}

/// A catalog as written in a JSON or TOML document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    /// ISO currency code applied to every price.
    #[serde(default = "default_currency_code")]
    pub currency: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

fn default_currency_code() -> String {
    Currency::USD.code().to_string()
}

impl Catalog {
    /// Build a catalog, validating every item.
    ///
    /// Returns an error if:
    /// - Two items share an id
    /// - A price is negative or in another currency
    /// - A rating lies outside 0.0..=5.0
    pub fn new(currency: Currency, items: Vec<Item>) -> Result<Self, CommerceError> {
        validate_items(currency, &items)?;

        tracing::info!(
            items = items.len(),
            currency = currency.code(),
            "catalog loaded"
        );
        Ok(Self { currency, items })
    }

    /// A catalog with no items.
    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Build a catalog from a parsed document.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CommerceError> {
        let currency = Currency::from_code(&document.currency)
            .ok_or_else(|| CommerceError::UnknownCurrency(document.currency.clone()))?;
        let items = document
            .items
            .into_iter()
            .map(|record| record.into_item(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(currency, items)
    }

    /// Parse a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Parse a TOML catalog document (`[[items]]` tables).
    pub fn from_toml(source: &str) -> Result<Self, CommerceError> {
        let document: CatalogDocument = toml::from_str(source)?;
        Self::from_document(document)
    }

    /// Currency of every price in the catalog.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Distinct category labels in first-seen order.
    pub fn list_categories(&self) -> Vec<&str> {
        self.count_by_category().into_keys().collect()
    }

    /// Number of items per category, keyed in first-seen order.
    ///
    /// Only categories that actually occur are present.
    pub fn count_by_category(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for item in &self.items {
            *counts.entry(item.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Items matching an optional category and an optional search text.
    ///
    /// The iterator is lazy and preserves catalog order. Call again for a
    /// fresh pass.
    pub fn filter(&self, category: Option<&str>, search_text: Option<&str>) -> FilteredItems<'_> {
        self.filter_by(FilterCriteria::from_parts(category, search_text))
    }

    /// Items matching prepared criteria.
    pub fn filter_by(&self, criteria: FilterCriteria) -> FilteredItems<'_> {
        FilteredItems {
            items: self.items.iter(),
            filters: criteria.filters(),
        }
    }
}

fn validate_items(currency: Currency, items: &[Item]) -> Result<(), CommerceError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(&item.id) {
            return Err(CommerceError::DuplicateItem(item.id.to_string()));
        }
        if item.price.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: item.price.currency.code().to_string(),
            });
        }
        if item.price.is_negative() {
            return Err(CommerceError::InvalidPrice {
                item_id: item.id.to_string(),
                price: item.price.display(),
            });
        }
        if !(0.0..=MAX_RATING).contains(&item.rating) {
            return Err(CommerceError::InvalidRating {
                item_id: item.id.to_string(),
                rating: item.rating,
            });
        }
    }
    Ok(())
}

impl PriceLookup for Catalog {
    fn unit_price(&self, id: &ItemId) -> Option<Money> {
        self.get(id).map(|item| item.price)
    }

    fn currency(&self) -> Currency {
        self.currency
    }
}

/// Lazy iterator over the catalog items that satisfy some criteria.
///
/// The criteria are turned into filters once, when the iterator is built.
#[derive(Debug, Clone)]
pub struct FilteredItems<'a> {
    items: slice::Iter<'a, Item>,
    filters: Vec<Filter>,
}

impl FilteredItems<'_> {
    /// The filters this iterator applies, category first.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }
}

impl<'a> Iterator for FilteredItems<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let filters = &self.filters;
        self.items
            .find(|item| filters.iter().all(|filter| filter.matches(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn catalog() -> Catalog {
        Catalog::new(
            Currency::USD,
            vec![
                Item::new("1", "Pro Headphones", "Audio", usd(29999))
                    .with_description("Studio monitoring"),
                Item::new("2", "4K Camera", "Video", usd(89999))
                    .with_description("Professional cinema camera"),
                Item::new("3", "Mini Speaker", "Audio", usd(4999))
                    .with_description("Pocket sized"),
                Item::new("4", "Smart Watch", "Wearables", usd(19999)),
            ],
        )
        .unwrap()
    }

    fn ids<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<&'a str> {
        items.map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_list_categories_first_seen_order() {
        assert_eq!(catalog().list_categories(), vec!["Audio", "Video", "Wearables"]);
    }

    #[test]
    fn test_count_by_category() {
        let catalog = catalog();
        let counts = catalog.count_by_category();
        assert_eq!(counts.get("Audio"), Some(&2));
        assert_eq!(counts.get("Video"), Some(&1));
        assert_eq!(counts.get("Gaming"), None);
        assert_eq!(counts.values().sum::<usize>(), catalog.len());
    }

    #[test]
    fn test_filter_without_criteria_returns_everything_in_order() {
        let catalog = catalog();
        assert_eq!(ids(catalog.filter(None, None)), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(catalog.filter(None, Some(""))), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = catalog();
        assert_eq!(ids(catalog.filter(Some("Audio"), None)), vec!["1", "3"]);
        assert!(catalog.filter(Some("audio"), None).next().is_none());
    }

    #[test]
    fn test_filter_by_category_and_text() {
        let catalog = catalog();
        assert_eq!(ids(catalog.filter(Some("Audio"), Some("pro"))), vec!["1"]);
        // "pro" also hits the camera's description, outside the category.
        assert_eq!(ids(catalog.filter(None, Some("PRO"))), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_is_restartable() {
        let catalog = catalog();
        let matches = catalog.filter(Some("Audio"), None);
        let first: Vec<_> = matches.clone().collect();
        let second: Vec<_> = matches.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_prepares_filters_from_criteria() {
        let catalog = catalog();
        let matches = catalog.filter(Some("Audio"), Some("pro"));
        assert_eq!(
            matches.filters(),
            &[Filter::category("Audio"), Filter::text("pro")]
        );
        assert!(catalog.filter(None, Some("")).filters().is_empty());
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        assert!(catalog().filter(Some("Gaming"), Some("x")).next().is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(
            Currency::USD,
            vec![
                Item::new("1", "A", "Audio", usd(100)),
                Item::new("1", "B", "Audio", usd(200)),
            ],
        );
        assert!(matches!(result, Err(CommerceError::DuplicateItem(id)) if id == "1"));
    }

    #[test]
    fn test_rejects_bad_price_and_rating() {
        let negative = Catalog::new(Currency::USD, vec![Item::new("1", "A", "Audio", usd(-1))]);
        assert!(matches!(negative, Err(CommerceError::InvalidPrice { .. })));

        let foreign = Catalog::new(
            Currency::USD,
            vec![Item::new("1", "A", "Audio", Money::new(100, Currency::EUR))],
        );
        assert!(matches!(foreign, Err(CommerceError::CurrencyMismatch { .. })));

        let rating = Catalog::new(
            Currency::USD,
            vec![Item::new("1", "A", "Audio", usd(100)).with_rating(5.5)],
        );
        assert!(matches!(rating, Err(CommerceError::InvalidRating { .. })));
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"{
                "currency": "USD",
                "items": [
                    {"id": "1", "name": "Earbuds", "price": 79.99, "category": "Audio", "rating": 4.5, "stock": 8},
                    {"id": "2", "name": "Drone", "price": 499.0, "category": "Video"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.unit_price(&ItemId::new("1")), Some(usd(7999)));
        assert_eq!(catalog.unit_price(&ItemId::new("missing")), None);
    }

    #[test]
    fn test_from_toml() {
        let catalog = Catalog::from_toml(
            r#"
            currency = "EUR"

            [[items]]
            id = "1"
            name = "Soundbar"
            price = 149.5
            category = "Audio"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.currency(), Currency::EUR);
        assert_eq!(
            catalog.get(&ItemId::new("1")).map(|item| item.price),
            Some(Money::new(14950, Currency::EUR))
        );
    }

    #[test]
    fn test_rejects_non_finite_price() {
        let nan = Catalog::from_toml(
            r#"
            [[items]]
            id = "1"
            name = "Glitched Cable"
            price = nan
            category = "Accessories"
            "#,
        );
        assert!(matches!(nan, Err(CommerceError::InvalidPrice { item_id, .. }) if item_id == "1"));

        let inf = Catalog::from_toml(
            r#"
            [[items]]
            id = "2"
            name = "Endless Charger"
            price = inf
            category = "Accessories"
            "#,
        );
        assert!(matches!(inf, Err(CommerceError::InvalidPrice { .. })));

        let huge = Catalog::from_json(
            r#"{"items": [{"id": "3", "name": "Gold Router", "price": 1e30, "category": "Networking"}]}"#,
        );
        assert!(matches!(huge, Err(CommerceError::InvalidPrice { item_id, .. }) if item_id == "3"));
    }

    #[test]
    fn test_unknown_currency() {
        let result = Catalog::from_json(r#"{"currency": "XYZ", "items": []}"#);
        assert!(matches!(result, Err(CommerceError::UnknownCurrency(code)) if code == "XYZ"));
    }
}
