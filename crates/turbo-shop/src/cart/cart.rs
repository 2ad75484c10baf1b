//! Cart and cart item types.

use serde::{Deserialize, Serialize};
use turbo_money::{Currency, Money, MoneyError};

use crate::cart::models::CartModels;
use crate::cart::pricing::{apply_extras, CartPricing, LineItemPricing};
use crate::catalog::{PriceRequest, Product, ProductExtra};
use crate::error::CommerceError;
use crate::ids::{current_timestamp, CartId, CartItemId, CustomerId};

/// Maximum quantity allowed per cart item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Session ID for anonymous carts.
    pub session_id: String,
    /// Customer for authenticated carts.
    pub customer: Option<CustomerId>,
    /// Items in the cart.
    pub items: Vec<CartItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new cart for a session.
    pub fn new(session_id: impl Into<String>, currency: Currency) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            session_id: session_id.into(),
            customer: None,
            items: Vec::new(),
            currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a cart for an authenticated customer.
    pub fn for_customer(session_id: impl Into<String>, customer: CustomerId, currency: Currency) -> Self {
        let mut cart = Self::new(session_id, currency);
        cart.customer = Some(customer);
        cart
    }

    /// The price request products are priced with for this cart.
    pub fn price_request(&self) -> PriceRequest {
        PriceRequest {
            customer: self.customer.clone(),
        }
    }

    /// Add a product to the cart.
    ///
    /// The sellable unit comes from the product's markedness for `extra`.
    /// Adding a unit already in the cart increases its quantity.
    ///
    /// Returns an error if:
    /// - Quantity is not positive or would exceed MAX_QUANTITY_PER_ITEM
    /// - The product has no sellable unit for `extra`
    /// - The price is in a different currency than the cart
    pub fn add_product(
        &mut self,
        product: &dyn Product,
        extra: ProductExtra,
        quantity: i64,
    ) -> Result<CartItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let sellable = product.get_product_markedness(&extra)?;
        let unit_price = sellable.get_price(&self.price_request());
        if !unit_price.currency().is_compatible(&self.currency) {
            tracing::warn!(
                cart = %self.id,
                product_code = sellable.product_code(),
                price_currency = unit_price.get_currency(),
                cart_currency = self.currency.code(),
                "rejected product priced in another currency"
            );
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.get_currency().to_string(),
            }
            .into());
        }

        let code = sellable.product_code();
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_code == code) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::QuantityExceedsLimit(i64::MAX, MAX_QUANTITY_PER_ITEM))?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            existing.unit_price = unit_price;
            let id = existing.id.clone();
            self.updated_at = current_timestamp();
            return Ok(id);
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = CartItem {
            id: CartItemId::generate(),
            product_code: code.to_string(),
            product_name: sellable.product_name().to_string(),
            quantity,
            unit_price,
            extra,
        };
        let id = item.id.clone();
        self.items.push(item);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Update item quantity.
    ///
    /// If quantity is <= 0, removes the item.
    pub fn update_quantity(&mut self, item_id: &CartItemId, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(item_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == item_id) {
            item.quantity = quantity;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, item_id: &CartItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get an item by ID.
    pub fn get_item(&self, item_id: &CartItemId) -> Result<&CartItem, CommerceError> {
        self.items
            .iter()
            .find(|i| &i.id == item_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(item_id.to_string()))
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Price the cart with the resolved models.
    pub fn pricing(&self, models: &CartModels) -> Result<CartPricing, CommerceError> {
        let item_model = models.cart_item();
        let lines = self
            .items
            .iter()
            .map(|item| {
                let line_subtotal = item_model.line_subtotal(item)?;
                let extra_rows = item_model.extra_rows(item, &line_subtotal)?;
                let line_total = apply_extras(line_subtotal, &extra_rows)?;
                Ok(LineItemPricing {
                    item_id: item.id.clone(),
                    product_code: item.product_code.clone(),
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    line_subtotal,
                    extra_rows,
                    line_total,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let cart_model = models.cart();
        let subtotal = cart_model.subtotal(self, &lines)?;
        let extra_rows = cart_model.extra_rows(self, &subtotal)?;
        let total = apply_extras(subtotal, &extra_rows)?;

        Ok(CartPricing {
            lines,
            subtotal,
            extra_rows,
            total,
        })
    }
}

/// An item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unique cart item identifier.
    pub id: CartItemId,
    /// Code of the sellable unit.
    pub product_code: String,
    /// Product name (denormalized for display).
    pub product_name: String,
    pub quantity: i64,
    /// Unit price at the time the item was last added.
    pub unit_price: Money,
    /// Extra data the item was added with.
    pub extra: ProductExtra,
}
