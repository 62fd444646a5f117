//! Search module.
//!
//! Category and free-text filtering over the catalog.

mod criteria;
mod filter;

pub use criteria::FilterCriteria;
pub use filter::Filter;
