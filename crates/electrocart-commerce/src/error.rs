//! Commerce error types.
//!
//! Only catalog construction and configuration loading can fail. Cart,
//! search and session operations are total and never return these.

use thiserror::Error;

/// Errors raised while building a catalog or loading configuration.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Two catalog items share an identifier.
    #[error("Duplicate item id in catalog: {0}")]
    DuplicateItem(String),

    /// An item price is negative, not a number, or too large to represent.
    #[error("Invalid price for {item_id}: {price}")]
    InvalidPrice { item_id: String, price: String },

    /// An item rating lies outside 0.0..=5.0.
    #[error("Invalid rating for {item_id}: {rating}")]
    InvalidRating { item_id: String, rating: f64 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Unrecognised currency code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
