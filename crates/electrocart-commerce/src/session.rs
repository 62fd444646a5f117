//! Per-shopper session state.
//!
//! A [`Session`] is the single owned object a presentation layer holds: the
//! shared catalog, the shopper's cart and the current filter criteria. It
//! turns user intents (pick a category, type a search, press a cart button)
//! into store calls and derives the values views render.

use crate::cart::{CartEvent, CartLine, CartStore};
use crate::catalog::{Catalog, FilteredItems, Item, StockStatus};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::{ItemId, SubscriptionId};
use crate::money::Money;
use crate::search::FilterCriteria;
use serde::Serialize;
use std::sync::Arc;

/// State for one shopper's visit.
#[derive(Debug)]
pub struct Session {
    catalog: Arc<Catalog>,
    cart: CartStore,
    criteria: FilterCriteria,
    config: StoreConfig,
}

impl Session {
    /// Start a session with default settings in the catalog's currency.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let config = StoreConfig {
            currency: catalog.currency(),
            ..StoreConfig::default()
        };
        Self {
            catalog,
            cart: CartStore::new(),
            criteria: FilterCriteria::new(),
            config,
        }
    }

    /// Start a session with explicit settings.
    ///
    /// Fails if the catalog is priced in a different currency than the
    /// config expects.
    pub fn with_config(catalog: Arc<Catalog>, config: StoreConfig) -> Result<Self, CommerceError> {
        if catalog.currency() != config.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: config.currency.code().to_string(),
                got: catalog.currency().code().to_string(),
            });
        }
        Ok(Self {
            catalog,
            cart: CartStore::new(),
            criteria: FilterCriteria::new(),
            config,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Browsing
    // ------------------------------------------------------------------

    /// Select a category, or `None` for all products.
    pub fn select_category(&mut self, category: Option<&str>) {
        self.criteria.category = category.map(str::to_string);
    }

    /// Replace the search term. An empty term clears the search.
    pub fn set_search_term(&mut self, term: &str) {
        self.criteria = std::mem::take(&mut self.criteria).with_search(term);
    }

    /// Drop both the category and the search term.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::new();
    }

    /// Catalog items matching the current criteria, in catalog order.
    pub fn visible_items(&self) -> FilteredItems<'_> {
        self.catalog.filter_by(self.criteria.clone())
    }

    /// Store name and cart badge for the page header.
    pub fn header(&self) -> HeaderView<'_> {
        HeaderView {
            store_name: &self.config.store_name,
            cart_count: self.total_item_count(),
        }
    }

    /// Heading and result count for the product grid.
    pub fn results_summary(&self) -> ResultsSummary {
        let heading = self
            .criteria
            .category
            .clone()
            .unwrap_or_else(|| self.config.default_heading.clone());
        ResultsSummary {
            heading,
            noun: self.config.product_noun.clone(),
            count: self.visible_items().count(),
            search_term: self.criteria.search.clone(),
        }
    }

    /// Sidebar entries: the "all" entry, then each category in first-seen
    /// order.
    pub fn category_entries(&self) -> Vec<CategoryEntry> {
        let counts = self.catalog.count_by_category();
        let selected = self.criteria.category.as_deref();

        let mut entries = Vec::with_capacity(counts.len() + 1);
        entries.push(CategoryEntry {
            label: self.config.all_categories_label.clone(),
            category: None,
            count: counts.values().sum(),
            selected: selected.is_none(),
        });
        entries.extend(counts.into_iter().map(|(category, count)| CategoryEntry {
            label: category.to_string(),
            category: Some(category.to_string()),
            count,
            selected: selected == Some(category),
        }));
        entries
    }

    /// Render state for one product card.
    pub fn product_card<'a>(&self, item: &'a Item) -> ProductCard<'a> {
        let in_cart = self.cart.is_in_cart(&item.id);
        ProductCard {
            item,
            stock: item.stock_status(self.config.low_stock_threshold),
            full_stars: item.full_stars(),
            in_cart,
            can_add: item.is_in_stock() && !in_cart,
        }
    }

    /// Cards for every visible item.
    pub fn product_cards(&self) -> Vec<ProductCard<'_>> {
        self.visible_items()
            .map(|item| self.product_card(item))
            .collect()
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add a catalog item to the cart. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, item_id: &ItemId) {
        match self.catalog.get(item_id) {
            Some(item) => self.cart.add_item(item),
            None => tracing::trace!(%item_id, "add ignored, item not in catalog"),
        }
    }

    pub fn remove_from_cart(&mut self, item_id: &ItemId) {
        self.cart.remove_item(item_id);
    }

    pub fn update_quantity(&mut self, item_id: &ItemId, quantity: i64) {
        self.cart.set_quantity(item_id, quantity);
    }

    pub fn adjust_quantity(&mut self, item_id: &ItemId, delta: i64) {
        self.cart.adjust_quantity(item_id, delta);
    }

    /// Empty the cart, e.g. once checkout has taken over.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Cart total priced against the session catalog.
    pub fn total_price(&self) -> Money {
        self.cart.total_price(self.catalog.as_ref())
    }

    pub fn total_item_count(&self) -> i64 {
        self.cart.total_item_count()
    }

    /// Drawer contents: lines joined with their catalog items.
    pub fn cart_view(&self) -> CartView<'_> {
        let lines = self
            .cart
            .lines()
            .iter()
            .filter_map(|line| {
                let item = self.catalog.get(line.item_id())?;
                Some(CartLineView {
                    item,
                    quantity: line.quantity(),
                    subtotal: line.subtotal(item.price),
                    can_decrement: line.quantity() > 1,
                })
            })
            .collect();

        CartView {
            lines,
            total_items: self.total_item_count(),
            total_price: self.total_price(),
        }
    }

    /// Register an observer for cart changes.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&CartEvent, &[CartLine]) + 'static,
    ) -> SubscriptionId {
        self.cart.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.cart.unsubscribe(id)
    }
}

/// Page header contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView<'a> {
    pub store_name: &'a str,
    /// Badge on the cart button: total units in the cart.
    pub cart_count: i64,
}

/// Heading and count shown above the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    /// Selected category or the default heading.
    pub heading: String,
    /// Singular noun for the counted items.
    pub noun: String,
    /// Number of matching items.
    pub count: usize,
    /// Active search term, if any.
    pub search_term: Option<String>,
}

impl ResultsSummary {
    /// E.g. `3 premium products matching "pro"`.
    pub fn label(&self) -> String {
        let plural = if self.count == 1 { "" } else { "s" };
        let mut label = format!("{} {}{}", self.count, self.noun, plural);
        if let Some(term) = &self.search_term {
            label.push_str(&format!(" matching \"{}\"", term));
        }
        label
    }

    /// Whether the "No products found" state applies.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// One row of the category sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    /// Text on the button.
    pub label: String,
    /// Category to select, `None` for the "all" entry.
    pub category: Option<String>,
    /// Badge count.
    pub count: usize,
    /// Whether this entry is the current selection.
    pub selected: bool,
}

/// Render state for a product card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard<'a> {
    pub item: &'a Item,
    pub stock: StockStatus,
    pub full_stars: u8,
    pub in_cart: bool,
    /// The add button is enabled only for in-stock items not yet in the cart.
    pub can_add: bool,
}

/// Cart drawer contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView<'a> {
    pub lines: Vec<CartLineView<'a>>,
    pub total_items: i64,
    pub total_price: Money,
}

impl CartView<'_> {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One drawer row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView<'a> {
    pub item: &'a Item,
    pub quantity: i64,
    pub subtotal: Money,
    pub can_decrement: bool,
}
