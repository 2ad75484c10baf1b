//! Cart models shipped with the CLI, selectable from the settings file.

use turbo_money::{Decimal, Money};
use turbo_shop::cart::{Cart, CartItem, CartItemModel, CartModel, ExtraRow, ModelRegistry};
use turbo_shop::CommerceError;

/// Lines of at least this many units get the bulk discount.
const BULK_QUANTITY: i64 = 10;

/// Flat shipping charged below the free shipping threshold.
const SHIPPING_FEE: Decimal = Decimal::from_parts(490, 0, 0, false, 2);

const FREE_SHIPPING_FROM: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// 10% off lines of [`BULK_QUANTITY`] or more units.
#[derive(Debug, Default)]
pub struct BulkDiscountCartItem;

impl CartItemModel for BulkDiscountCartItem {
    fn extra_rows(&self, item: &CartItem, line_subtotal: &Money) -> Result<Vec<ExtraRow>, CommerceError> {
        if item.quantity < BULK_QUANTITY || line_subtotal.is_nan() || line_subtotal.is_zero() {
            return Ok(Vec::new());
        }
        let discount = line_subtotal.checked_div(10)?;
        Ok(vec![ExtraRow::new("Bulk discount (10%)", -discount)])
    }
}

/// Flat shipping fee, waived from a subtotal threshold on.
#[derive(Debug, Default)]
pub struct ShippingCart;

impl CartModel for ShippingCart {
    fn extra_rows(&self, cart: &Cart, subtotal: &Money) -> Result<Vec<ExtraRow>, CommerceError> {
        if cart.is_empty() || *subtotal >= Money::from_decimal(FREE_SHIPPING_FROM, cart.currency) {
            return Ok(Vec::new());
        }
        Ok(vec![ExtraRow::new(
            "Shipping",
            Money::from_decimal(SHIPPING_FEE, cart.currency),
        )])
    }
}

/// Built-in models plus the ones shipped with the CLI.
pub fn registry() -> Result<ModelRegistry, CommerceError> {
    let mut registry = ModelRegistry::with_defaults();
    registry
        .register_cart("shop::ShippingCart", ShippingCart)?
        .register_cart_item("shop::BulkDiscountCartItem", BulkDiscountCartItem)?;
    Ok(registry)
}
