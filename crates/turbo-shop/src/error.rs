//! Commerce error types.

use thiserror::Error;
use turbo_money::MoneyError;

/// Errors that can occur in shop operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Money construction or arithmetic failed.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Variant not found.
    #[error("Variant not found: {0}")]
    VariantNotFound(String),

    /// Product code already used in the catalog.
    #[error("Duplicate product code: {0}")]
    DuplicateProductCode(String),

    /// Value outside a field's allowed choices.
    #[error("Invalid {field}: '{value}'")]
    InvalidChoice { field: &'static str, value: String },

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Configured model path is malformed.
    #[error("Invalid model path '{path}' in setting {key}")]
    InvalidModelPath { key: &'static str, path: String },

    /// Configured model path names no registered implementation.
    #[error("Unable to resolve '{path}' configured by setting {key}")]
    UnresolvedModel { key: &'static str, path: String },

    /// Settings could not be parsed.
    #[error("Settings error: {0}")]
    Settings(String),

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
        CommerceError::Settings(e.to_string())
    }
}
