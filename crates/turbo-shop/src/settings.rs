//! Shop settings.
//!
//! Settings are read once at startup. The `[shop]` section picks the cart
//! currency and the cart model implementations, the `[money]` section
//! controls how amounts are rendered.

use serde::{Deserialize, Serialize};
use turbo_money::format::{DEFAULT_NAN_PLACEHOLDER, DEFAULT_TEMPLATE};
use turbo_money::{MoneyFormat, MoneyMaker, NumberFormat};

use crate::error::CommerceError;

/// Shop settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopSettings {
    /// Currency and model selection.
    #[serde(default)]
    pub shop: ShopSection,

    /// Money rendering.
    #[serde(default)]
    pub money: MoneySection,
}

impl ShopSettings {
    /// Parse settings from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse settings from JSON.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        serde_json::from_str(content).map_err(|e| CommerceError::Settings(e.to_string()))
    }

    /// Money factory for the configured currency.
    pub fn money_maker(&self) -> Result<MoneyMaker, CommerceError> {
        Ok(MoneyMaker::new(&self.shop.currency)?)
    }

    /// Money format built from the `[money]` section.
    pub fn money_format(&self) -> Result<MoneyFormat, CommerceError> {
        let number = NumberFormat {
            decimal_separator: self.money.decimal_separator.clone(),
            group_separator: self.money.group_separator.clone(),
        };
        if number.decimal_separator.is_empty() {
            return Err(CommerceError::Settings(
                "money.decimal_separator must not be empty".to_string(),
            ));
        }
        Ok(MoneyFormat::new(self.money.format.as_str())?
            .with_nan_placeholder(self.money.nan_placeholder.as_str())
            .with_number_format(number))
    }
}

/// The `[shop]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSection {
    /// ISO 4217 code carts are priced in.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Cart model name (`shop.cart_model`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_model: Option<String>,

    /// Cart item model name (`shop.cart_item_model`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_item_model: Option<String>,
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            cart_model: None,
            cart_item_model: None,
        }
    }
}

fn default_currency() -> String {
    turbo_money::currency::DEFAULT_CURRENCY.to_string()
}

/// The `[money]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneySection {
    /// Template with `{symbol}`, `{code}` and `{amount}` placeholders.
    #[serde(default = "default_format")]
    pub format: String,

    /// Shown in place of the amount when there is no price.
    #[serde(default = "default_nan_placeholder")]
    pub nan_placeholder: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Thousands separator, no grouping when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_separator: Option<String>,
}

impl Default for MoneySection {
    fn default() -> Self {
        Self {
            format: default_format(),
            nan_placeholder: default_nan_placeholder(),
            decimal_separator: default_decimal_separator(),
            group_separator: None,
        }
    }
}

fn default_format() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_nan_placeholder() -> String {
    DEFAULT_NAN_PLACEHOLDER.to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_money::MoneyError;

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = ShopSettings::from_toml_str("").unwrap();
        assert_eq!(settings, ShopSettings::default());
        assert_eq!(settings.shop.currency, "EUR");
        assert!(settings.shop.cart_model.is_none());
        assert_eq!(settings.money_maker().unwrap().get_currency(), "EUR");
    }

    #[test]
    fn test_parse_toml() {
        let settings = ShopSettings::from_toml_str(
            r#"
            [shop]
            currency = "chf"
            cart_model = "myshop::Cart"

            [money]
            format = "{amount} {code}"
            group_separator = "'"
            "#,
        )
        .unwrap();

        assert_eq!(settings.shop.cart_model.as_deref(), Some("myshop::Cart"));
        assert!(settings.shop.cart_item_model.is_none());

        let maker = settings.money_maker().unwrap();
        assert_eq!(maker.get_currency(), "CHF");
        let format = settings.money_format().unwrap();
        let rendered = maker.make("1234.5").unwrap().render(&format).unwrap();
        assert_eq!(rendered, "1'234.50 CHF");
    }

    #[test]
    fn test_parse_json() {
        let settings =
            ShopSettings::from_json_str(r#"{"shop": {"currency": "JPY"}}"#).unwrap();
        assert_eq!(settings.money_maker().unwrap().decimal_places(), 0);
        assert_eq!(settings.money.format, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(
            ShopSettings::from_toml_str("[shop]\ncurrency = 5"),
            Err(CommerceError::Settings(_))
        ));

        let mut settings = ShopSettings::default();
        settings.shop.currency = "ZZZ".to_string();
        assert!(matches!(
            settings.money_maker(),
            Err(CommerceError::Money(MoneyError::UnsupportedCurrency(_)))
        ));

        let mut settings = ShopSettings::default();
        settings.money.format = "{symbol}".to_string();
        assert!(matches!(
            settings.money_format(),
            Err(CommerceError::Money(MoneyError::InvalidFormat(_)))
        ));
    }
}
