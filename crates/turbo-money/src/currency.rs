//! Currency descriptors.
//!
//! A [`Currency`] is a runtime descriptor (code, symbol, minor-unit count)
//! looked up from a static ISO 4217 table. Money values carry one and
//! compare currencies by code.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::MoneyError;

/// Currency code used when nothing else is configured.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Minor-unit count for currencies without a standard one.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Largest minor-unit count a decimal amount can carry.
pub const MAX_DECIMAL_PLACES: u32 = 28;

// code, numeric, minor units, name, symbol
const CURRENCIES: &[(&str, u16, Option<u32>, &str, &str)] = &[
    ("AUD", 36, Some(2), "Australian Dollar", "A$"),
    ("BGN", 975, Some(2), "Bulgarian Lev", "лв"),
    ("BHD", 48, Some(3), "Bahraini Dinar", "BD"),
    ("BRL", 986, Some(2), "Brazilian Real", "R$"),
    ("CAD", 124, Some(2), "Canadian Dollar", "CA$"),
    ("CHF", 756, Some(2), "Swiss Franc", "CHF"),
    ("CLF", 990, Some(4), "Unidad de Fomento", "UF"),
    ("CNY", 156, Some(2), "Yuan Renminbi", "\u{00a5}"),
    ("CZK", 203, Some(2), "Czech Koruna", "Kč"),
    ("DKK", 208, Some(2), "Danish Krone", "kr."),
    ("EUR", 978, Some(2), "Euro", "\u{20ac}"),
    ("GBP", 826, Some(2), "Pound Sterling", "\u{00a3}"),
    ("HKD", 344, Some(2), "Hong Kong Dollar", "HK$"),
    ("HUF", 348, Some(2), "Forint", "Ft"),
    ("ILS", 376, Some(2), "New Israeli Sheqel", "\u{20aa}"),
    ("INR", 356, Some(2), "Indian Rupee", "\u{20b9}"),
    ("ISK", 352, Some(0), "Iceland Krona", "kr"),
    ("JPY", 392, Some(0), "Yen", "\u{00a5}"),
    ("KRW", 410, Some(0), "Won", "\u{20a9}"),
    ("KWD", 414, Some(3), "Kuwaiti Dinar", "KD"),
    ("MXN", 484, Some(2), "Mexican Peso", "MX$"),
    ("NOK", 578, Some(2), "Norwegian Krone", "kr"),
    ("NZD", 554, Some(2), "New Zealand Dollar", "NZ$"),
    ("PLN", 985, Some(2), "Zloty", "zł"),
    ("RON", 946, Some(2), "Romanian Leu", "lei"),
    ("RUB", 643, Some(2), "Russian Ruble", "\u{20bd}"),
    ("SEK", 752, Some(2), "Swedish Krona", "kr"),
    ("SGD", 702, Some(2), "Singapore Dollar", "S$"),
    ("THB", 764, Some(2), "Baht", "\u{0e3f}"),
    ("TND", 788, Some(3), "Tunisian Dinar", "DT"),
    ("TRY", 949, Some(2), "Turkish Lira", "\u{20ba}"),
    ("USD", 840, Some(2), "US Dollar", "$"),
    ("XAG", 961, None, "Silver", "XAG"),
    ("XAU", 959, None, "Gold", "XAU"),
    ("XXX", 999, None, "No currency", "XXX"),
    ("ZAR", 710, Some(2), "Rand", "R"),
];

/// A currency descriptor.
///
/// Serialized as its code; deserializing looks the code up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Currency {
    code: &'static str,
    numeric: u16,
    name: &'static str,
    symbol: &'static str,
    decimal_places: u32,
}

impl Currency {
    /// Look up a currency by its ISO code (case-insensitive).
    ///
    /// ```
    /// use turbo_money::Currency;
    /// let yen = Currency::from_code("jpy").unwrap();
    /// assert_eq!(yen.code(), "JPY");
    /// assert_eq!(yen.decimal_places(), 0);
    /// assert!(Currency::from_code("ABC").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self, MoneyError> {
        let wanted = code.trim().to_uppercase();
        let (code, numeric, places, name, symbol) = CURRENCIES
            .iter()
            .find(|(c, ..)| *c == wanted)
            .copied()
            .ok_or_else(|| MoneyError::UnsupportedCurrency(code.to_string()))?;

        let decimal_places = places.unwrap_or_else(|| {
            tracing::debug!(
                currency = code,
                places = DEFAULT_DECIMAL_PLACES,
                "currency has no standard minor unit, using default"
            );
            DEFAULT_DECIMAL_PLACES
        });

        Ok(Self {
            code,
            numeric,
            name,
            symbol,
            decimal_places,
        })
    }

    /// The default currency (EUR).
    pub fn default_currency() -> Self {
        // The table always contains the default code.
        Self {
            code: DEFAULT_CURRENCY,
            numeric: 978,
            name: "Euro",
            symbol: "\u{20ac}",
            decimal_places: 2,
        }
    }

    /// Get the currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the ISO numeric code.
    pub fn numeric(&self) -> u16 {
        self.numeric
    }

    /// Get the English currency name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the currency symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Same currency with a custom number of decimal places.
    ///
    /// Used for price fields that store more precision than the currency's
    /// standard minor unit.
    pub fn with_decimal_places(mut self, places: u32) -> Result<Self, MoneyError> {
        if places > MAX_DECIMAL_PLACES {
            return Err(MoneyError::InvalidValue(format!(
                "{} decimal places exceeds maximum of {}",
                places, MAX_DECIMAL_PLACES
            )));
        }
        self.decimal_places = places;
        Ok(self)
    }

    /// True when both descriptors name the same currency.
    pub fn is_compatible(&self, other: &Currency) -> bool {
        self.code == other.code
    }

    /// Iterate over every supported currency.
    pub fn all() -> impl Iterator<Item = Currency> {
        CURRENCIES
            .iter()
            .filter_map(|(code, ..)| Currency::from_code(code).ok())
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::default_currency()
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code.to_string()
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::from_code(&code).map_err(de::Error::custom)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_from_code() {
        let eur = Currency::from_code("EUR").unwrap();
        assert_eq!(eur.code(), "EUR");
        assert_eq!(eur.symbol(), "\u{20ac}");
        assert_eq!(eur.decimal_places(), 2);
        assert_eq!(Currency::from_code("eur").unwrap(), eur);
    }

    #[test]
    fn test_unknown_currency() {
        assert_eq!(
            Currency::from_code("ABC"),
            Err(MoneyError::UnsupportedCurrency("ABC".to_string()))
        );
    }

    #[test]
    fn test_currency_without_decimal_places() {
        assert_eq!(Currency::from_code("JPY").unwrap().decimal_places(), 0);
        assert_eq!(Currency::from_code("KWD").unwrap().decimal_places(), 3);
    }

    #[test]
    fn test_currency_without_standard_precision_uses_default() {
        let gold = Currency::from_code("XAU").unwrap();
        assert_eq!(gold.decimal_places(), DEFAULT_DECIMAL_PLACES);
    }

    #[test]
    fn test_default_currency_matches_table() {
        assert_eq!(
            Currency::default_currency(),
            Currency::from_code(DEFAULT_CURRENCY).unwrap()
        );
    }

    #[test]
    fn test_with_decimal_places() {
        let eur = Currency::default().with_decimal_places(3).unwrap();
        assert_eq!(eur.decimal_places(), 3);
        assert!(eur.is_compatible(&Currency::default()));
        assert!(Currency::default().with_decimal_places(29).is_err());
    }

    #[test]
    fn test_currency_serde() {
        let usd = Currency::from_code("USD").unwrap();
        let json = serde_json::to_string(&usd).unwrap();
        assert_eq!(json, "\"USD\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, usd);
        assert!(serde_json::from_str::<Currency>("\"ABC\"").is_err());
    }

    #[test]
    fn test_currency_deserializes_from_owned_input() {
        #[derive(Deserialize)]
        struct Priced {
            currency: Currency,
        }

        let json = String::from(r#"{"currency": "chf"}"#);
        let priced: Priced = serde_json::from_str(&json).unwrap();
        drop(json);
        assert_eq!(priced.currency.code(), "CHF");

        let value = serde_json::json!({ "currency": "JPY" });
        let priced: Priced = serde_json::from_value(value).unwrap();
        assert_eq!(priced.currency.decimal_places(), 0);

        let err = serde_json::from_str::<Currency>("\"ABC\"").unwrap_err();
        assert!(err.to_string().contains("ABC"));
    }

    #[test]
    fn test_all_currencies_resolve() {
        assert_eq!(Currency::all().count(), CURRENCIES.len());
    }
}
