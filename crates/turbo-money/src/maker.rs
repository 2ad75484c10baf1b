//! Money factory bound to one currency.

use crate::amount::MoneyInput;
use crate::currency::{Currency, DEFAULT_CURRENCY};
use crate::error::MoneyError;
use crate::money::Money;

/// Produces [`Money`] values for a single currency.
///
/// The currency code is validated once, when the maker is created:
///
/// ```
/// use turbo_money::MoneyMaker;
/// assert!(MoneyMaker::new("ABC").is_err());
///
/// let euros = MoneyMaker::new("EUR").unwrap();
/// assert!(euros.nan().is_nan());
/// assert_eq!(euros.make("1.23").unwrap().as_integer().unwrap(), 123);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyMaker {
    currency: Currency,
}

impl MoneyMaker {
    /// Create a maker for a currency code.
    pub fn new(code: &str) -> Result<Self, MoneyError> {
        Ok(Self {
            currency: Currency::from_code(code)?,
        })
    }

    /// Create a maker for an already-resolved currency.
    pub fn for_currency(currency: Currency) -> Self {
        Self { currency }
    }

    /// Same maker with a custom number of decimal places.
    pub fn with_decimal_places(self, places: u32) -> Result<Self, MoneyError> {
        Ok(Self {
            currency: self.currency.with_decimal_places(places)?,
        })
    }

    /// The bound currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The bound currency code.
    pub fn get_currency(&self) -> &'static str {
        self.currency.code()
    }

    /// Number of decimal places of the bound currency.
    pub fn decimal_places(&self) -> u32 {
        self.currency.decimal_places()
    }

    /// Create a value. See [`Money::new`] for accepted inputs.
    pub fn make(&self, value: impl Into<MoneyInput>) -> Result<Money, MoneyError> {
        Money::new(self.currency, value)
    }

    /// A NaN ("no price") value.
    pub fn nan(&self) -> Money {
        Money::nan(self.currency)
    }

    /// A zero value.
    pub fn zero(&self) -> Money {
        Money::zero(self.currency)
    }

    /// A value from an integer count of minor units.
    pub fn from_minor_units(&self, units: i64) -> Money {
        Money::from_minor_units(units, self.currency)
    }
}

impl Default for MoneyMaker {
    /// Maker for the default currency.
    fn default() -> Self {
        tracing::trace!(currency = DEFAULT_CURRENCY, "using default currency");
        Self::for_currency(Currency::default_currency())
    }
}
