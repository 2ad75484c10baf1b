//! Smart cards: memory cards sold as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use turbo_money::Money;

use crate::catalog::product::{slugify, PriceRequest, Product, ProductExtra};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Card form factor and standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[serde(rename = "SD")]
    Sd,
    #[serde(rename = "micro SD")]
    MicroSd,
    #[serde(rename = "SDXC")]
    Sdxc,
    #[serde(rename = "micro SDXC")]
    MicroSdxc,
    #[serde(rename = "SDHC")]
    Sdhc,
    #[serde(rename = "micro SDHC")]
    MicroSdhc,
    #[serde(rename = "SDHC II")]
    SdhcII,
    #[serde(rename = "micro SDHC II")]
    MicroSdhcII,
}

impl CardType {
    pub const ALL: [CardType; 8] = [
        CardType::Sd,
        CardType::MicroSd,
        CardType::Sdxc,
        CardType::MicroSdxc,
        CardType::Sdhc,
        CardType::MicroSdhc,
        CardType::SdhcII,
        CardType::MicroSdhcII,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Sd => "SD",
            CardType::MicroSd => "micro SD",
            CardType::Sdxc => "SDXC",
            CardType::MicroSdxc => "micro SDXC",
            CardType::Sdhc => "SDHC",
            CardType::MicroSdhc => "micro SDHC",
            CardType::SdhcII => "SDHC II",
            CardType::MicroSdhcII => "micro SDHC II",
        }
    }
}

impl FromStr for CardType {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| CommerceError::InvalidChoice {
                field: "card type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transfer speed class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Speed {
    #[serde(rename = "4")]
    Mbps4,
    #[serde(rename = "20")]
    Mbps20,
    #[serde(rename = "30")]
    Mbps30,
    #[serde(rename = "40")]
    Mbps40,
    #[serde(rename = "48")]
    Mbps48,
    #[serde(rename = "80")]
    Mbps80,
    #[serde(rename = "95")]
    Mbps95,
    #[serde(rename = "280")]
    Mbps280,
}

impl Speed {
    pub const ALL: [Speed; 8] = [
        Speed::Mbps4,
        Speed::Mbps20,
        Speed::Mbps30,
        Speed::Mbps40,
        Speed::Mbps48,
        Speed::Mbps80,
        Speed::Mbps95,
        Speed::Mbps280,
    ];

    /// Megabytes per second.
    pub fn megabytes_per_second(&self) -> u32 {
        match self {
            Speed::Mbps4 => 4,
            Speed::Mbps20 => 20,
            Speed::Mbps30 => 30,
            Speed::Mbps40 => 40,
            Speed::Mbps48 => 48,
            Speed::Mbps80 => 80,
            Speed::Mbps95 => 95,
            Speed::Mbps280 => 280,
        }
    }

    /// Human label, e.g. "80 MB/s".
    pub fn label(&self) -> String {
        format!("{} MB/s", self.megabytes_per_second())
    }
}

impl FromStr for Speed {
    type Err = CommerceError;

    /// Accepts the stored value ("80") or the label ("80 MB/s").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.trim().trim_end_matches("MB/s").trim();
        Speed::ALL
            .into_iter()
            .find(|speed| speed.megabytes_per_second().to_string() == number)
            .ok_or_else(|| CommerceError::InvalidChoice {
                field: "transfer speed",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A smart card. It is its own sellable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartCard {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub product_name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Net price for this product.
    pub unit_price: Money,
    pub card_type: CardType,
    pub speed: Speed,
    /// Product code (unique across the catalog).
    pub product_code: String,
    /// Storage capacity in GB.
    pub storage: u32,
}

impl SmartCard {
    /// Decimal places kept for smart card unit prices.
    pub const UNIT_PRICE_DECIMAL_PLACES: u32 = 3;

    /// Create a new smart card.
    pub fn new(
        product_name: impl Into<String>,
        product_code: impl Into<String>,
        unit_price: Money,
        card_type: CardType,
        speed: Speed,
        storage: u32,
    ) -> Result<Self, CommerceError> {
        let product_name = product_name.into();
        let product_code = product_code.into();
        if product_code.trim().is_empty() {
            return Err(CommerceError::InvalidChoice {
                field: "product code",
                value: product_code,
            });
        }
        Ok(Self {
            id: ProductId::generate(),
            slug: slugify(&product_name),
            product_name,
            unit_price: unit_price.with_decimal_places(Self::UNIT_PRICE_DECIMAL_PLACES)?,
            card_type,
            speed,
            product_code,
            storage,
        })
    }
}

impl Product for SmartCard {
    fn product_code(&self) -> &str {
        &self.product_code
    }

    fn product_name(&self) -> &str {
        &self.product_name
    }

    fn kind(&self) -> &'static str {
        "smartcard"
    }

    fn get_price(&self, _request: &PriceRequest) -> Money {
        self.unit_price
    }

    /// Smart cards have no markedness: they are the product.
    fn get_product_markedness(&self, _extra: &ProductExtra) -> Result<&dyn Product, CommerceError> {
        Ok(self)
    }

    fn snapshot(&self) -> Result<serde_json::Value, CommerceError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl fmt::Display for SmartCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.product_name)
    }
}
