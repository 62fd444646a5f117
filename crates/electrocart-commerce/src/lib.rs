//! Catalog, cart and session state for the ElectroCart storefront.
//!
//! Everything here is synchronous, in-memory bookkeeping for a single
//! shopper:
//!
//! - **Catalog**: the fixed item list, category listing and counts, lazy
//!   category/text filtering
//! - **Cart**: lines with quantities, derived totals, change notifications
//! - **Session**: the owned state a view layer holds (catalog handle, cart,
//!   current filter criteria) and the derived values it renders
//!
//! Only catalog construction and configuration loading can fail; every store
//! operation is total.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use electrocart_commerce::prelude::*;
//!
//! let catalog = Catalog::new(
//!     Currency::USD,
//!     vec![
//!         Item::new("a", "Studio Monitors", "Audio", Money::new(1000, Currency::USD)),
//!         Item::new("b", "Action Camera", "Video", Money::new(2500, Currency::USD)),
//!     ],
//! )?;
//!
//! let mut session = Session::new(Arc::new(catalog));
//! session.add_to_cart(&ItemId::new("a"));
//! session.add_to_cart(&ItemId::new("b"));
//! session.update_quantity(&ItemId::new("a"), 3);
//!
//! assert_eq!(session.total_item_count(), 4);
//! assert_eq!(session.total_price().display(), "$55.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod session;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use session::Session;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogDocument, Item, ItemRecord, StockStatus};

    // Cart
    pub use crate::cart::{CartEvent, CartLine, CartPricing, CartStore, LinePricing, PriceLookup};

    // Search
    pub use crate::search::{Filter, FilterCriteria};

    // Session
    pub use crate::session::{
        CartLineView, CartView, CategoryEntry, HeaderView, ProductCard, ResultsSummary,
        Session,
    };
}
