//! Startup resolution of the configured cart models.
//!
//! Implementations are registered under fully-qualified names such as
//! `default::Cart`. Settings name the implementation to use; resolution
//! fails with an error naming the setting when the name is malformed or
//! unknown.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::cart::models::{CartItemModel, CartModel, CartModels, DefaultCart, DefaultCartItem};
use crate::error::CommerceError;
use crate::settings::ShopSettings;

/// Setting that selects the cart model.
pub const CART_MODEL_KEY: &str = "shop.cart_model";

/// Setting that selects the cart item model.
pub const CART_ITEM_MODEL_KEY: &str = "shop.cart_item_model";

/// Cart model used when the setting is absent.
pub const DEFAULT_CART_MODEL: &str = "default::Cart";

/// Cart item model used when the setting is absent.
pub const DEFAULT_CART_ITEM_MODEL: &str = "default::CartItem";

/// Named cart and cart item implementations.
#[derive(Debug, Default, Clone)]
pub struct ModelRegistry {
    carts: BTreeMap<String, Arc<dyn CartModel>>,
    cart_items: BTreeMap<String, Arc<dyn CartItemModel>>,
}

impl ModelRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in models.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .carts
            .insert(DEFAULT_CART_MODEL.to_string(), Arc::new(DefaultCart));
        registry
            .cart_items
            .insert(DEFAULT_CART_ITEM_MODEL.to_string(), Arc::new(DefaultCartItem));
        registry
    }

    /// Register a cart model under a fully-qualified name.
    pub fn register_cart<M: CartModel + 'static>(
        &mut self,
        path: &str,
        model: M,
    ) -> Result<&mut Self, CommerceError> {
        validate_path(CART_MODEL_KEY, path)?;
        self.carts.insert(path.to_string(), Arc::new(model));
        Ok(self)
    }

    /// Register a cart item model under a fully-qualified name.
    pub fn register_cart_item<M: CartItemModel + 'static>(
        &mut self,
        path: &str,
        model: M,
    ) -> Result<&mut Self, CommerceError> {
        validate_path(CART_ITEM_MODEL_KEY, path)?;
        self.cart_items.insert(path.to_string(), Arc::new(model));
        Ok(self)
    }

    /// Registered cart model names.
    pub fn cart_paths(&self) -> impl Iterator<Item = &str> {
        self.carts.keys().map(String::as_str)
    }

    /// Registered cart item model names.
    pub fn cart_item_paths(&self) -> impl Iterator<Item = &str> {
        self.cart_items.keys().map(String::as_str)
    }

    /// Resolve the configured models, falling back to the defaults for
    /// absent settings.
    pub fn resolve(&self, settings: &ShopSettings) -> Result<CartModels, CommerceError> {
        let cart_path = configured_path(
            CART_MODEL_KEY,
            settings.shop.cart_model.as_deref(),
            DEFAULT_CART_MODEL,
        );
        let cart = lookup(&self.carts, CART_MODEL_KEY, cart_path)?;

        let cart_item_path = configured_path(
            CART_ITEM_MODEL_KEY,
            settings.shop.cart_item_model.as_deref(),
            DEFAULT_CART_ITEM_MODEL,
        );
        let cart_item = lookup(&self.cart_items, CART_ITEM_MODEL_KEY, cart_item_path)?;

        tracing::info!(
            cart_model = cart_path,
            cart_item_model = cart_item_path,
            "resolved cart models"
        );
        Ok(CartModels::new(cart_path, cart, cart_item_path, cart_item))
    }
}

fn configured_path<'a>(key: &str, configured: Option<&'a str>, default: &'a str) -> &'a str {
    match configured {
        Some(path) => path.trim(),
        None => {
            tracing::debug!(setting = key, default, "setting absent, using default model");
            default
        }
    }
}

fn lookup<T: ?Sized>(
    models: &BTreeMap<String, Arc<T>>,
    key: &'static str,
    path: &str,
) -> Result<Arc<T>, CommerceError> {
    validate_path(key, path)?;
    models
        .get(path)
        .cloned()
        .ok_or_else(|| CommerceError::UnresolvedModel {
            key,
            path: path.to_string(),
        })
}

/// A path is two or more `::`-separated identifiers.
fn validate_path(key: &'static str, path: &str) -> Result<(), CommerceError> {
    let segments: Vec<&str> = path.split("::").collect();
    let well_formed = segments.len() >= 2
        && segments.iter().all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if well_formed {
        Ok(())
    } else {
        Err(CommerceError::InvalidModelPath {
            key,
            path: path.to_string(),
        })
    }
}
