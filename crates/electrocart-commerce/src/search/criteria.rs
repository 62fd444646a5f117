//! Filter criteria builder.

use crate::catalog::Item;
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// The shopper's current category selection and search term.
///
/// `None` means "no constraint"; an empty search term is normalised to
/// `None` so it never narrows the results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected category, or `None` for all products.
    pub category: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match every item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from optional borrowed inputs.
    pub fn from_parts(category: Option<&str>, search_text: Option<&str>) -> Self {
        let mut criteria = Self::new();
        if let Some(category) = category {
            criteria = criteria.with_category(category);
        }
        if let Some(search) = search_text {
            criteria = criteria.with_search(search);
        }
        criteria
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the search term. Empty terms clear the search.
    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.search = if q.is_empty() { None } else { Some(q) };
        self
    }

    /// Whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    /// The active filters, category first.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(2);
        if let Some(category) = &self.category {
            filters.push(Filter::Category(category.clone()));
        }
        if let Some(search) = &self.search {
            filters.push(Filter::Text(search.clone()));
        }
        filters
    }

    /// Check an item against every active filter.
    pub fn matches(&self, item: &Item) -> bool {
        self.filters().iter().all(|filter| filter.matches(item))
    }
}
