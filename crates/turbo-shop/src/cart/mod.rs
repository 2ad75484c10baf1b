//! Shopping cart module.
//!
//! Contains the cart, its pluggable pricing models and the registry the
//! models are resolved from.

mod cart;
mod models;
mod pricing;
mod registry;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
pub use models::{CartItemModel, CartModel, CartModels, DefaultCart, DefaultCartItem};
pub use pricing::{CartPricing, ExtraRow, LineItemPricing};
pub use registry::{
    ModelRegistry, CART_ITEM_MODEL_KEY, CART_MODEL_KEY, DEFAULT_CART_ITEM_MODEL,
    DEFAULT_CART_MODEL,
};
