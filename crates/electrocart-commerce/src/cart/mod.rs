//! Shopping cart module.
//!
//! Contains the cart store, its lines, change events and pricing.

mod events;
mod line;
mod pricing;
mod store;

pub use events::{CartEvent, CartObserver};
pub use line::CartLine;
pub use pricing::{CartPricing, LinePricing, PriceLookup};
pub use store::CartStore;
