//! Storefront configuration.

use crate::error::CommerceError;
use crate::money::Currency;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation settings for a storefront session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in the header.
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Currency the catalog is expected to be priced in.
    #[serde(default)]
    pub currency: Currency,

    /// Items with fewer units than this show an "Only N left" badge.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Singular noun used in the result count, e.g. "3 premium products".
    #[serde(default = "default_product_noun")]
    pub product_noun: String,

    /// Heading shown when no category is selected.
    #[serde(default = "default_heading")]
    pub default_heading: String,

    /// Label of the sidebar entry that clears the category.
    #[serde(default = "default_all_label")]
    pub all_categories_label: String,
}

fn default_store_name() -> String {
    "ElectroCart Pro".to_string()
}

fn default_low_stock_threshold() -> u32 {
    10
}

fn default_product_noun() -> String {
    "premium product".to_string()
}

fn default_heading() -> String {
    "Featured Electronics".to_string()
}

fn default_all_label() -> String {
    "All Products".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            currency: Currency::default(),
            low_stock_threshold: default_low_stock_threshold(),
            product_noun: default_product_noun(),
            default_heading: default_heading(),
            all_categories_label: default_all_label(),
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a JSON document. Missing keys take their defaults.
    pub fn from_json(source: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load config from a file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        tracing::debug!(path = %path.display(), "store config loaded");
        Ok(config)
    }
}
