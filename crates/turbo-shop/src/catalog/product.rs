//! The product capability shared by every catalog variant.

use std::fmt;

use serde::{Deserialize, Serialize};
use turbo_money::Money;

use crate::error::CommerceError;
use crate::ids::CustomerId;

/// Context a price is looked up in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    /// Customer asking for the price, if known.
    pub customer: Option<CustomerId>,
}

impl PriceRequest {
    /// Price request for an anonymous visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Price request on behalf of a customer.
    pub fn for_customer(customer: CustomerId) -> Self {
        Self {
            customer: Some(customer),
        }
    }
}

/// Extra data submitted with an "add to cart" action, used to pick the
/// sellable unit of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductExtra {
    /// Product code of the chosen variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
}

impl ProductExtra {
    /// Extra data selecting a variant by product code.
    pub fn with_product_code(code: impl Into<String>) -> Self {
        Self {
            product_code: Some(code.into()),
        }
    }
}

/// A product in the catalog.
///
/// Each variant decides how it is priced and what its sellable unit is.
/// Directly sellable products return themselves from
/// [`get_product_markedness`](Product::get_product_markedness); products
/// that wrap variants return the chosen variant.
pub trait Product: fmt::Debug + Send + Sync {
    /// Product code identifying this product.
    fn product_code(&self) -> &str;

    /// Display name.
    fn product_name(&self) -> &str;

    /// Short variant name, e.g. "smartcard".
    fn kind(&self) -> &'static str;

    /// Every product code this product owns, including nested variants.
    fn product_codes(&self) -> Vec<&str> {
        vec![self.product_code()]
    }

    /// Price for the given request.
    fn get_price(&self, request: &PriceRequest) -> Money;

    /// The sellable unit for the given extra data.
    fn get_product_markedness(&self, extra: &ProductExtra) -> Result<&dyn Product, CommerceError>;

    /// JSON snapshot of the product's fields, used for revisions.
    fn snapshot(&self) -> Result<serde_json::Value, CommerceError>;
}

/// URL-friendly slug from a product name.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("SanDisk Extreme PRO 64 GB"), "sandisk-extreme-pro-64-gb");
        assert_eq!(slugify("  micro SDHC / Class 10 "), "micro-sdhc-class-10");
    }

    #[test]
    fn test_product_extra_serde() {
        let extra: ProductExtra = serde_json::from_str("{}").unwrap();
        assert_eq!(extra, ProductExtra::default());
        let extra = ProductExtra::with_product_code("S6-32");
        assert_eq!(
            serde_json::to_string(&extra).unwrap(),
            r#"{"product_code":"S6-32"}"#
        );
    }
}
