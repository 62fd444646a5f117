//! Product catalog module.
//!
//! Contains the item type and the read-only catalog store.

mod item;
mod store;

pub use item::{Item, ItemRecord, StockStatus, MAX_RATING};
pub use store::{Catalog, CatalogDocument, FilteredItems};
