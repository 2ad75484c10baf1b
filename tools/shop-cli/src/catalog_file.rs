//! Catalog files used by `shop quote`.
//!
//! ```toml
//! [[smartcard]]
//! name = "SanDisk Extreme"
//! code = "SD-64"
//! price = "19.90"
//! card_type = "micro SDXC"
//! speed = "80"
//! storage = 64
//!
//! [[smartphone]]
//! name = "Galaxy S6"
//! code = "GS6"
//! manufacturer = "Samsung"
//! operating_system = "android"
//! screen_size = "5.1"
//!
//! [[smartphone.variants]]
//! code = "GS6-32"
//! price = "499"
//! storage = 32
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use turbo_money::{Decimal, MoneyMaker};
use turbo_shop::catalog::{Catalog, SmartCard, SmartPhoneModel};

/// Catalog file contents.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub smartcard: Vec<SmartCardEntry>,

    #[serde(default)]
    pub smartphone: Vec<SmartPhoneEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SmartCardEntry {
    pub name: String,
    pub code: String,
    /// Unit price in the shop currency, absent for "no price".
    pub price: Option<String>,
    pub card_type: String,
    pub speed: String,
    #[serde(default)]
    pub storage: u32,
}

#[derive(Debug, Deserialize)]
pub struct SmartPhoneEntry {
    pub name: String,
    pub code: String,
    pub manufacturer: String,
    #[serde(default = "default_operating_system")]
    pub operating_system: String,
    pub screen_size: String,
    #[serde(default)]
    pub variants: Vec<VariantEntry>,
}

#[derive(Debug, Deserialize)]
pub struct VariantEntry {
    pub code: String,
    pub price: Option<String>,
    pub storage: u32,
}

fn default_operating_system() -> String {
    "other".to_string()
}

impl CatalogFile {
    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build a catalog with prices in the factory's currency.
    pub fn into_catalog(self, money: &MoneyMaker) -> Result<Catalog> {
        let mut catalog = Catalog::new();

        for entry in self.smartcard {
            let card = SmartCard::new(
                entry.name,
                entry.code.as_str(),
                money.make(entry.price.as_deref())?,
                entry.card_type.parse()?,
                entry.speed.parse()?,
                entry.storage,
            )
            .with_context(|| format!("Invalid smart card {}", entry.code))?;
            catalog.insert(card)?;
        }

        for entry in self.smartphone {
            let screen_size: Decimal = entry
                .screen_size
                .trim()
                .parse()
                .with_context(|| format!("Invalid screen size for {}", entry.code))?;
            let mut phone = SmartPhoneModel::new(
                entry.name,
                entry.code.as_str(),
                entry.manufacturer,
                entry.operating_system.parse()?,
                screen_size,
                money.currency(),
            );
            for variant in entry.variants {
                phone
                    .add_variant(
                        variant.code.as_str(),
                        money.make(variant.price.as_deref())?,
                        variant.storage,
                    )
                    .with_context(|| format!("Invalid variant {} of {}", variant.code, entry.code))?;
            }
            catalog.insert(phone)?;
        }

        tracing::debug!(products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}
