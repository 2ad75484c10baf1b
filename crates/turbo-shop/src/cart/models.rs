//! Cart and cart item model capabilities.
//!
//! A model decides how a cart (or one of its items) is priced. The
//! implementations in use are chosen once at startup through the
//! [`ModelRegistry`](crate::cart::ModelRegistry) and passed around as
//! [`CartModels`].

use std::fmt;
use std::sync::Arc;

use turbo_money::Money;

use crate::cart::pricing::{ExtraRow, LineItemPricing};
use crate::cart::registry::{DEFAULT_CART_ITEM_MODEL, DEFAULT_CART_MODEL};
use crate::cart::{Cart, CartItem};
use crate::error::CommerceError;

/// Pricing behaviour of a single cart item.
pub trait CartItemModel: fmt::Debug + Send + Sync {
    /// Price of the item before extras.
    fn line_subtotal(&self, item: &CartItem) -> Result<Money, CommerceError> {
        Ok(item.unit_price.checked_mul(item.quantity)?)
    }

    /// Extra rows applied to the item (e.g. bulk discounts).
    fn extra_rows(&self, _item: &CartItem, _line_subtotal: &Money) -> Result<Vec<ExtraRow>, CommerceError> {
        Ok(Vec::new())
    }
}

/// Pricing behaviour of a whole cart.
pub trait CartModel: fmt::Debug + Send + Sync {
    /// Cart subtotal from the priced lines.
    ///
    /// Unpriced lines add nothing, following the NaN addition rule.
    fn subtotal(&self, cart: &Cart, lines: &[LineItemPricing]) -> Result<Money, CommerceError> {
        Ok(Money::sum(lines.iter().map(|l| &l.line_total), cart.currency)?)
    }

    /// Extra rows applied to the cart (e.g. shipping, taxes).
    fn extra_rows(&self, _cart: &Cart, _subtotal: &Money) -> Result<Vec<ExtraRow>, CommerceError> {
        Ok(Vec::new())
    }
}

/// The built-in cart: sum of line totals, no extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCart;

impl CartModel for DefaultCart {}

/// The built-in cart item: unit price times quantity, no extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCartItem;

impl CartItemModel for DefaultCartItem {}

/// The resolved cart and cart item implementations.
#[derive(Debug, Clone)]
pub struct CartModels {
    cart_path: String,
    cart: Arc<dyn CartModel>,
    cart_item_path: String,
    cart_item: Arc<dyn CartItemModel>,
}

impl CartModels {
    pub fn new(
        cart_path: impl Into<String>,
        cart: Arc<dyn CartModel>,
        cart_item_path: impl Into<String>,
        cart_item: Arc<dyn CartItemModel>,
    ) -> Self {
        Self {
            cart_path: cart_path.into(),
            cart,
            cart_item_path: cart_item_path.into(),
            cart_item,
        }
    }

    /// The built-in pair, without consulting any configuration.
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_CART_MODEL,
            Arc::new(DefaultCart),
            DEFAULT_CART_ITEM_MODEL,
            Arc::new(DefaultCartItem),
        )
    }

    /// Registered name of the cart model.
    pub fn cart_path(&self) -> &str {
        &self.cart_path
    }

    /// Registered name of the cart item model.
    pub fn cart_item_path(&self) -> &str {
        &self.cart_item_path
    }

    pub fn cart(&self) -> &dyn CartModel {
        self.cart.as_ref()
    }

    pub fn cart_item(&self) -> &dyn CartItemModel {
        self.cart_item.as_ref()
    }
}

impl fmt::Display for CartModels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.cart_path, self.cart_item_path)
    }
}
