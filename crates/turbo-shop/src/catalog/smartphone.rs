//! Smart phones: a model wrapping sellable storage variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use turbo_money::{Currency, Decimal, Money};

use crate::catalog::product::{slugify, PriceRequest, Product, ProductExtra};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Operating system shipped with a phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Android,
    Ios,
    Other,
}

impl OperatingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Android => "android",
            OperatingSystem::Ios => "ios",
            OperatingSystem::Other => "other",
        }
    }
}

impl FromStr for OperatingSystem {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "android" => Ok(OperatingSystem::Android),
            "ios" => Ok(OperatingSystem::Ios),
            "other" => Ok(OperatingSystem::Other),
            _ => Err(CommerceError::InvalidChoice {
                field: "operating system",
                value: s.to_string(),
            }),
        }
    }
}

/// A sellable storage configuration of a phone model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartPhoneVariant {
    /// Product code (unique across the catalog).
    pub product_code: String,
    /// Display name, e.g. "Galaxy S6 (64 GB)".
    pub product_name: String,
    /// Net price for this variant.
    pub unit_price: Money,
    /// Internal storage in GB.
    pub storage: u32,
}

impl Product for SmartPhoneVariant {
    fn product_code(&self) -> &str {
        &self.product_code
    }

    fn product_name(&self) -> &str {
        &self.product_name
    }

    fn kind(&self) -> &'static str {
        "smartphone-variant"
    }

    fn get_price(&self, _request: &PriceRequest) -> Money {
        self.unit_price
    }

    fn get_product_markedness(&self, _extra: &ProductExtra) -> Result<&dyn Product, CommerceError> {
        Ok(self)
    }

    fn snapshot(&self) -> Result<serde_json::Value, CommerceError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A phone model. Customers buy one of its variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartPhoneModel {
    /// Unique product identifier.
    pub id: ProductId,
    /// Model name.
    pub product_name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Model code (unique across the catalog).
    pub product_code: String,
    pub manufacturer: String,
    pub operating_system: OperatingSystem,
    /// Screen diagonal in inches.
    pub screen_size: Decimal,
    /// Currency all variant prices are in.
    pub currency: Currency,
    pub variants: Vec<SmartPhoneVariant>,
}

impl SmartPhoneModel {
    /// Create a model without variants.
    pub fn new(
        product_name: impl Into<String>,
        product_code: impl Into<String>,
        manufacturer: impl Into<String>,
        operating_system: OperatingSystem,
        screen_size: Decimal,
        currency: Currency,
    ) -> Self {
        let product_name = product_name.into();
        Self {
            id: ProductId::generate(),
            slug: slugify(&product_name),
            product_name,
            product_code: product_code.into(),
            manufacturer: manufacturer.into(),
            operating_system,
            screen_size,
            currency,
            variants: Vec::new(),
        }
    }

    /// Add a storage variant.
    ///
    /// The price must be in the model's currency and the code must not
    /// collide with the model or another variant.
    pub fn add_variant(
        &mut self,
        product_code: impl Into<String>,
        unit_price: Money,
        storage: u32,
    ) -> Result<&SmartPhoneVariant, CommerceError> {
        let product_code = product_code.into();
        if !unit_price.currency().is_compatible(&self.currency) {
            return Err(turbo_money::MoneyError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.get_currency().to_string(),
            }
            .into());
        }
        if self.product_codes().contains(&product_code.as_str()) {
            return Err(CommerceError::DuplicateProductCode(product_code));
        }

        let index = self.variants.len();
        self.variants.push(SmartPhoneVariant {
            product_name: format!("{} ({} GB)", self.product_name, storage),
            product_code,
            unit_price,
            storage,
        });
        Ok(&self.variants[index])
    }

    /// Find a variant by product code.
    pub fn variant(&self, product_code: &str) -> Option<&SmartPhoneVariant> {
        self.variants.iter().find(|v| v.product_code == product_code)
    }
}

impl Product for SmartPhoneModel {
    fn product_code(&self) -> &str {
        &self.product_code
    }

    fn product_name(&self) -> &str {
        &self.product_name
    }

    fn kind(&self) -> &'static str {
        "smartphone"
    }

    fn product_codes(&self) -> Vec<&str> {
        std::iter::once(self.product_code.as_str())
            .chain(self.variants.iter().map(|v| v.product_code.as_str()))
            .collect()
    }

    /// Lowest variant price; NaN when there are no priced variants.
    fn get_price(&self, _request: &PriceRequest) -> Money {
        self.variants
            .iter()
            .map(|v| v.unit_price)
            .filter(|price| !price.is_nan())
            .fold(Money::nan(self.currency), |lowest, price| {
                if lowest.is_nan() || price < lowest {
                    price
                } else {
                    lowest
                }
            })
    }

    /// The variant named by `extra.product_code`.
    fn get_product_markedness(&self, extra: &ProductExtra) -> Result<&dyn Product, CommerceError> {
        let code = extra.product_code.as_deref().ok_or_else(|| {
            CommerceError::VariantNotFound(format!("{}: no variant selected", self.product_code))
        })?;
        self.variant(code)
            .map(|v| v as &dyn Product)
            .ok_or_else(|| CommerceError::VariantNotFound(code.to_string()))
    }

    fn snapshot(&self) -> Result<serde_json::Value, CommerceError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl fmt::Display for SmartPhoneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.product_name)
    }
}
