//! Search filter types.

use crate::catalog::Item;
use serde::{Deserialize, Serialize};

/// A single predicate over catalog items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Exact, case-sensitive category match.
    Category(String),
    /// Case-insensitive substring of the name or the description.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(label: impl Into<String>) -> Self {
        Filter::Category(label.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether `item` satisfies this filter.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::Category(label) => item.category == *label,
            Filter::Text(query) => text_matches(item, query),
        }
    }
}

/// Case-insensitive substring test over name and description.
fn text_matches(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_folded(&item.name, &needle) || contains_folded(&item.description, &needle)
}

/// `needle` must already be lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
