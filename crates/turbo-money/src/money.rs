//! Money type for representing monetary values.
//!
//! A [`Money`] pairs a [`Currency`] descriptor with an exact decimal
//! [`Amount`]. The amount may be NaN, meaning "no price set".
//!
//! Arithmetic that can fail (currency mismatch, unit-less operands,
//! division by zero) returns `Result` from the operator itself:
//!
//! ```
//! use turbo_money::{Currency, Money};
//! let eur = Currency::from_code("EUR").unwrap();
//! let a = Money::new(eur, "1.50").unwrap();
//! let b = Money::new(eur, 2).unwrap();
//! let total = (a + b).unwrap();
//! assert_eq!(total.to_string(), "\u{20ac} 3.50");
//! assert!((a * b).is_err());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::{Amount, MoneyInput, Scalar};
use crate::currency::Currency;
use crate::error::MoneyError;
use crate::format::{quantize, MoneyFormat};

/// A monetary value bound to a currency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    currency: Currency,
    amount: Amount,
}

impl Money {
    /// Create a money value from any accepted input.
    ///
    /// Absent inputs give NaN. Money inputs must carry the same currency
    /// code, otherwise [`MoneyError::CurrencyMismatch`].
    pub fn new(currency: Currency, value: impl Into<MoneyInput>) -> Result<Self, MoneyError> {
        let amount = match value.into() {
            MoneyInput::Money(other) => {
                if !currency.is_compatible(&other.currency) {
                    return Err(MoneyError::mismatch(currency.code(), other.currency.code()));
                }
                other.amount
            }
            input => input.into_amount()?,
        };
        Ok(Self { currency, amount })
    }

    /// A NaN ("no price") value.
    pub fn nan(currency: Currency) -> Self {
        Self {
            currency,
            amount: Amount::NaN,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::from_decimal(Decimal::ZERO, currency)
    }

    /// Create a money value from an exact decimal.
    pub fn from_decimal(value: Decimal, currency: Currency) -> Self {
        Self {
            currency,
            amount: Amount::Number(value),
        }
    }

    /// Create a money value from an integer count of minor units.
    ///
    /// ```
    /// use turbo_money::{Currency, Money};
    /// let usd = Currency::from_code("USD").unwrap();
    /// let price = Money::from_minor_units(4999, usd);
    /// assert_eq!(price.as_integer().unwrap(), 4999);
    /// assert_eq!(price.to_string(), "$ 49.99");
    /// ```
    pub fn from_minor_units(units: i64, currency: Currency) -> Self {
        Self::from_decimal(Decimal::new(units, currency.decimal_places()), currency)
    }

    /// Rebuild a value from its reduced `(code, amount)` form.
    pub fn reconstruct(code: &str, amount: &str) -> Result<Self, MoneyError> {
        let currency = Currency::from_code(code)?;
        Ok(Self {
            currency,
            amount: amount.parse()?,
        })
    }

    /// Reduce to a `(code, amount)` pair for persistence or transport.
    ///
    /// The amount is unquantized; NaN states are spelled `NaN` and `sNaN`.
    pub fn reduce(&self) -> (&'static str, String) {
        (self.currency.code(), self.amount.to_string())
    }

    /// Get the currency descriptor.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get the currency code (e.g., "EUR").
    pub fn get_currency(&self) -> &'static str {
        self.currency.code()
    }

    /// Get the raw amount.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Same value displayed with a custom number of decimal places.
    pub fn with_decimal_places(&self, places: u32) -> Result<Self, MoneyError> {
        Ok(Self {
            currency: self.currency.with_decimal_places(places)?,
            amount: self.amount,
        })
    }

    /// Check if this is NaN (quiet or signaling).
    pub fn is_nan(&self) -> bool {
        self.amount.is_nan()
    }

    /// Check if this is a signaling NaN.
    pub fn is_signaling_nan(&self) -> bool {
        self.amount == Amount::SignalingNaN
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.amount, Amount::Number(d) if d.is_zero())
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        matches!(self.amount, Amount::Number(d) if d.is_sign_positive() && !d.is_zero())
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        matches!(self.amount, Amount::Number(d) if d.is_sign_negative() && !d.is_zero())
    }

    /// Get the absolute value.
    pub fn abs(&self) -> Self {
        match self.amount {
            Amount::Number(d) => Self::from_decimal(d.abs(), self.currency),
            _ => *self,
        }
    }

    /// Convert to a float. Quiet NaN converts to `f64::NAN`.
    pub fn to_f64(&self) -> Result<f64, MoneyError> {
        self.amount.to_f64()
    }

    /// The amount quantized to the currency's decimal places.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use turbo_money::MoneyMaker;
    /// let money = MoneyMaker::default().make("1.2").unwrap();
    /// assert_eq!(money.as_decimal().unwrap().to_string(), "1.20");
    /// ```
    pub fn as_decimal(&self) -> Result<Decimal, MoneyError> {
        match self.amount {
            Amount::Number(d) => quantize(d, self.currency.decimal_places()),
            _ => Err(MoneyError::NotANumber),
        }
    }

    /// The amount as an integer count of minor units (e.g., cents).
    pub fn as_integer(&self) -> Result<i64, MoneyError> {
        let quantized = self.as_decimal()?;
        i64::try_from(quantized.mantissa()).map_err(|_| MoneyError::Overflow)
    }

    /// Render with the given format.
    pub fn render(&self, format: &MoneyFormat) -> Result<String, MoneyError> {
        match self.amount {
            Amount::Number(d) => format.render_number(&self.currency, d),
            _ => Ok(format.render_nan(&self.currency)),
        }
    }

    /// Render with the default format (`"€ 1.00"`).
    pub fn try_display(&self) -> Result<String, MoneyError> {
        self.render(&MoneyFormat::default())
    }

    /// Add another money value of the same currency.
    ///
    /// NaN acts as the additive identity: `NaN + x == x`.
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_compatible(other)?;
        let amount = match (self.amount, other.amount) {
            (Amount::Number(a), Amount::Number(b)) => {
                Amount::Number(a.checked_add(b).ok_or(MoneyError::Overflow)?)
            }
            (lhs, rhs) if lhs.is_nan() => rhs,
            (lhs, _) => lhs,
        };
        Ok(Money {
            currency: self.currency,
            amount,
        })
    }

    /// Subtract another money value of the same currency.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.checked_add(&-*other)
    }

    /// Add a scalar. Only zero is accepted and leaves the value unchanged.
    pub fn add_scalar(&self, scalar: impl Into<Scalar>) -> Result<Money, MoneyError> {
        if scalar.into().is_zero() {
            Ok(*self)
        } else {
            Err(MoneyError::unsupported(
                "add",
                "only zero can be added to money without a currency",
            ))
        }
    }

    /// Multiply by a dimensionless factor. An absent factor gives NaN.
    pub fn checked_mul(&self, factor: impl Into<Scalar>) -> Result<Money, MoneyError> {
        let amount = match (self.amount, factor.into().to_amount()?) {
            (Amount::Number(a), Amount::Number(b)) => {
                Amount::Number(a.checked_mul(b).ok_or(MoneyError::Overflow)?)
            }
            (Amount::SignalingNaN, _) => Amount::SignalingNaN,
            _ => Amount::NaN,
        };
        Ok(Money {
            currency: self.currency,
            amount,
        })
    }

    /// Divide by a dimensionless divisor. The quotient is not rounded.
    pub fn checked_div(&self, divisor: impl Into<Scalar>) -> Result<Money, MoneyError> {
        let amount = match (self.amount, divisor.into().to_amount()?) {
            (_, Amount::Number(b)) if b.is_zero() => return Err(MoneyError::DivisionByZero),
            (Amount::Number(a), Amount::Number(b)) => {
                Amount::Number(a.checked_div(b).ok_or(MoneyError::Overflow)?)
            }
            (Amount::SignalingNaN, _) => Amount::SignalingNaN,
            _ => Amount::NaN,
        };
        Ok(Money {
            currency: self.currency,
            amount,
        })
    }

    /// Exponentiation has no unit semantics for money and always fails.
    pub fn pow<T>(&self, _exponent: T) -> Result<Money, MoneyError> {
        Err(MoneyError::unsupported(
            "pow",
            "money cannot be raised to a power",
        ))
    }

    /// Sum money values, starting from zero in `currency`.
    pub fn sum<I, M>(iter: I, currency: Currency) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = M>,
        M: Borrow<Money>,
    {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m.borrow()))
    }

    fn ensure_compatible(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency.is_compatible(&other.currency) {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.currency.code(), other.currency.code()))
        }
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency.is_compatible(&other.currency) && self.amount == other.amount
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.code().hash(state);
        self.amount.hash(state);
    }
}

impl PartialEq<Decimal> for Money {
    fn eq(&self, other: &Decimal) -> bool {
        self.amount == Amount::Number(*other)
    }
}

impl PartialEq<i64> for Money {
    fn eq(&self, other: &i64) -> bool {
        self.amount == Amount::Number(Decimal::from(*other))
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.currency.is_compatible(&other.currency) {
            return None;
        }
        match (self.amount, other.amount) {
            (Amount::Number(a), Amount::Number(b)) => Some(a.cmp(&b)),
            _ if self.amount == other.amount => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money {
            currency: self.currency,
            amount: self.amount.negate(),
        }
    }
}

impl Add for Money {
    type Output = Result<Money, MoneyError>;

    fn add(self, other: Money) -> Self::Output {
        self.checked_add(&other)
    }
}

impl Sub for Money {
    type Output = Result<Money, MoneyError>;

    fn sub(self, other: Money) -> Self::Output {
        self.checked_sub(&other)
    }
}

impl Mul for Money {
    type Output = Result<Money, MoneyError>;

    fn mul(self, _other: Money) -> Self::Output {
        Err(MoneyError::unsupported(
            "mul",
            "multiplying money by money is meaningless",
        ))
    }
}

impl Div for Money {
    type Output = Result<Money, MoneyError>;

    fn div(self, _other: Money) -> Self::Output {
        Err(MoneyError::unsupported(
            "div",
            "dividing money by money is not supported",
        ))
    }
}

// Scalars on either side of `+`/`-` must be zero.
macro_rules! additive_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for Money {
                type Output = Result<Money, MoneyError>;

                fn add(self, other: $t) -> Self::Output {
                    self.add_scalar(other)
                }
            }

            impl Add<Money> for $t {
                type Output = Result<Money, MoneyError>;

                fn add(self, other: Money) -> Self::Output {
                    other.add_scalar(self)
                }
            }

            impl Sub<$t> for Money {
                type Output = Result<Money, MoneyError>;

                fn sub(self, other: $t) -> Self::Output {
                    self.add_scalar(other)
                }
            }
        )*
    };
}

additive_scalar_ops!(i64, f64);

macro_rules! scaling_ops {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for Money {
                type Output = Result<Money, MoneyError>;

                fn mul(self, factor: $t) -> Self::Output {
                    self.checked_mul(factor)
                }
            }

            impl Div<$t> for Money {
                type Output = Result<Money, MoneyError>;

                fn div(self, divisor: $t) -> Self::Output {
                    self.checked_div(divisor)
                }
            }
        )*
    };
}

scaling_ops!(i64, f64, Decimal, Option<i64>, Option<f64>, Option<Decimal>);

// Scalar on the left: multiplication commutes, division never makes sense.
macro_rules! reflected_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Mul<Money> for $t {
                type Output = Result<Money, MoneyError>;

                fn mul(self, money: Money) -> Self::Output {
                    money.checked_mul(self)
                }
            }

            impl Div<Money> for $t {
                type Output = Result<Money, MoneyError>;

                fn div(self, _money: Money) -> Self::Output {
                    Err(MoneyError::unsupported(
                        "div",
                        "a scalar cannot be divided by money",
                    ))
                }
            }
        )*
    };
}

reflected_scalar_ops!(i64, f64, Decimal);

impl fmt::Display for Money {
    /// Renders with the default format. Use [`Money::render`] to observe
    /// precision errors instead of a `fmt::Error`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.try_display().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Transport representation: `{ "currency": "EUR", "amount": "1.23" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRepr {
    pub currency: String,
    pub amount: String,
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        let (code, amount) = money.reduce();
        Self {
            currency: code.to_string(),
            amount,
        }
    }
}

impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::reconstruct(&repr.currency, &repr.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur() -> Currency {
        Currency::from_code("EUR").unwrap()
    }

    fn usd() -> Currency {
        Currency::from_code("USD").unwrap()
    }

    fn m(v: impl Into<MoneyInput>) -> Money {
        Money::new(eur(), v).unwrap()
    }

    #[test]
    fn test_money_from_decimal() {
        let value = Decimal::new(12, 1);
        assert_eq!(m(value), value);
    }

    #[test]
    fn test_money_from_absent_is_nan() {
        assert!(m(None::<i64>).is_nan());
        assert!(m(MoneyInput::Absent).is_nan());
        assert!(Money::nan(eur()).is_nan());
    }

    #[test]
    fn test_money_from_invalid_text() {
        assert!(matches!(
            Money::new(eur(), "invalid"),
            Err(MoneyError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_money_from_other_currency() {
        let dollars = Money::new(usd(), 1).unwrap();
        assert_eq!(
            Money::new(eur(), dollars),
            Err(MoneyError::CurrencyMismatch {
                expected: "EUR".to_string(),
                got: "USD".to_string()
            })
        );
        assert_eq!(Money::new(eur(), m(3)).unwrap(), m(3));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(m(1).to_string(), "\u{20ac} 1.00");
        assert_eq!(Money::nan(eur()).to_string(), "\u{20ac} \u{2013}");
        assert_eq!(Money::new(usd(), "-3.456").unwrap().to_string(), "$ -3.46");
    }

    #[test]
    fn test_money_display_precision_exhausted() {
        let wide = m(1).with_decimal_places(28).unwrap();
        assert!(matches!(
            wide.try_display(),
            Err(MoneyError::PrecisionExhausted { .. })
        ));
    }

    #[test]
    fn test_money_addition() {
        assert_eq!((m(1) + m(2)).unwrap(), m(3));
        assert_eq!((m(1) + m(0)).unwrap(), m(1));
        assert_eq!((m(1) + m(-1)).unwrap(), m(0));
        assert_eq!((m(1) + 0).unwrap(), m(1));
        assert_eq!((m(1) + 0.0).unwrap(), m(1));
        assert_eq!((0 + m(1)).unwrap(), m(1));
        assert!(matches!(m(1) + 1, Err(MoneyError::UnsupportedOperation { .. })));
        assert!(matches!(m(1) + 1.0, Err(MoneyError::UnsupportedOperation { .. })));
    }

    #[test]
    fn test_money_addition_nan_identity() {
        assert_eq!((m(1) + m("NaN")).unwrap(), m(1));
        assert_eq!((m("NaN") + m(1)).unwrap(), m(1));
        assert!((m("NaN") + m("NaN")).unwrap().is_nan());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let dollars = Money::new(usd(), 1).unwrap();
        assert!(matches!(
            m(1) + dollars,
            Err(MoneyError::CurrencyMismatch { .. })
        ));
        assert!(matches!(
            m(1) - dollars,
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_money_subtraction() {
        assert_eq!((m(1) - m(2)).unwrap(), m(-1));
        assert_eq!((m(1) - 0).unwrap(), m(1));
        assert!((m(1) - 2).is_err());
    }

    #[test]
    fn test_money_negation() {
        assert_eq!(-m(1), -1);
        assert_eq!(-m(-1), 1);
        assert_eq!(-m(0), 0);
        assert_eq!((-m(1)).currency(), eur());
        assert!((-Money::nan(eur())).is_nan());
    }

    #[test]
    fn test_money_negated_zero_is_positive() {
        assert_eq!((-m(0)).to_string(), "\u{20ac} 0.00");
        assert_eq!((-m(0)).reduce(), ("EUR", "0".to_string()));
        assert_eq!((-m("0.00")).reduce().1, "0.00");
        assert!(!(-m(0)).amount().number().unwrap().is_sign_negative());
        assert_eq!((-(m(0) * 3).unwrap()).to_string(), "\u{20ac} 0.00");
    }

    #[test]
    fn test_money_scalar_operators_with_plain_literals() {
        let one = m(1);
        assert_eq!((one + 0).unwrap(), one);
        assert_eq!((one - 0).unwrap(), one);
        assert!((one + 5).is_err());
        assert!((one * 0).unwrap().is_zero());
        assert_eq!((3 * one).unwrap(), 3);
        assert_eq!((one / 4).unwrap(), Decimal::new(25, 2));
        assert!((one / 0).is_err());
        assert!((1 / one).is_err());
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!((m(1) * 1).unwrap(), m(1));
        assert_eq!((m(1) * 0).unwrap(), m(0));
        assert_eq!((m(1) * -1).unwrap(), m(-1));
        assert_eq!((-1 * m(1)).unwrap(), m(-1));
        assert_eq!((1.0 * m(1)).unwrap(), m(1));
        assert_eq!((m("2.50") * Decimal::new(2, 0)).unwrap(), m(5));
        assert_eq!((m(1) * None::<i64>).unwrap().to_string(), "\u{20ac} \u{2013}");
        assert!(matches!(m(1) * m(1), Err(MoneyError::UnsupportedOperation { .. })));
    }

    #[test]
    fn test_money_divide() {
        assert_eq!((m(1) / 2).unwrap(), m(0.5));
        assert_eq!((m(1) / 2.0).unwrap(), m(0.5));
        assert_eq!((m(1) / 3).unwrap().to_string(), "\u{20ac} 0.33");
        assert!((m(1) / None::<i64>).unwrap().is_nan());
        assert_eq!(m(1) / 0, Err(MoneyError::DivisionByZero));
        assert!(matches!(m(1) / m(2), Err(MoneyError::UnsupportedOperation { .. })));
        assert!(matches!(2 / m(1), Err(MoneyError::UnsupportedOperation { .. })));
    }

    #[test]
    fn test_money_pow() {
        assert!(matches!(m(1).pow(m(2)), Err(MoneyError::UnsupportedOperation { .. })));
        assert!(m(1).pow(2).is_err());
    }

    #[test]
    fn test_money_float() {
        assert_eq!(m("sNaN").to_f64(), Err(MoneyError::SignalingNan));
        assert!(m("NaN").to_f64().unwrap().is_nan());
        assert!(m("-NaN").to_f64().unwrap().is_nan());
        assert_eq!(m("1.0").to_f64().unwrap(), 1.0);
    }

    #[test]
    fn test_money_accessors() {
        let money = m("1.23");
        assert_eq!(money.get_currency(), "EUR");
        assert_eq!(money.as_decimal().unwrap(), Decimal::new(123, 2));
        assert_eq!(money.as_integer().unwrap(), 123);
        assert_eq!(Money::nan(eur()).as_integer(), Err(MoneyError::NotANumber));
    }

    #[test]
    fn test_money_reduce() {
        let (code, amount) = Money::nan(eur()).reduce();
        assert_eq!((code, amount.as_str()), ("EUR", "NaN"));
        assert!(Money::reconstruct(code, &amount).unwrap().is_nan());

        let price = m("19.999");
        let (code, amount) = price.reduce();
        assert_eq!(amount, "19.999");
        assert_eq!(Money::reconstruct(code, &amount).unwrap(), price);
    }

    #[test]
    fn test_money_serde() {
        let price = m("4.20");
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, r#"{"currency":"EUR","amount":"4.20"}"#);
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);

        let bad = r#"{"currency":"ABC","amount":"1"}"#;
        assert!(serde_json::from_str::<Money>(bad).is_err());
    }

    #[test]
    fn test_money_equality() {
        let dollars = Money::new(usd(), 1).unwrap();
        assert_ne!(m(1), dollars);
        assert_ne!(Money::nan(eur()), m(0));
        assert_eq!(Money::nan(eur()), Money::nan(eur()));
        assert_eq!(m("1.0"), m(1));
    }

    #[test]
    fn test_money_ordering() {
        assert!(m(1) < m(2));
        assert!(m(2) > m("1.99"));
        assert_eq!(m(1).partial_cmp(&Money::new(usd(), 1).unwrap()), None);
        assert_eq!(m(1).partial_cmp(&Money::nan(eur())), None);
    }

    #[test]
    fn test_money_sum() {
        let prices = [m(1), m("NaN"), m("2.5")];
        assert_eq!(Money::sum(&prices, eur()).unwrap(), m("3.5"));
        assert_eq!(Money::sum(Vec::<Money>::new(), eur()).unwrap(), m(0));
    }

    #[test]
    fn test_money_from_minor_units() {
        let yen = Currency::from_code("JPY").unwrap();
        assert_eq!(Money::from_minor_units(500, yen).to_string(), "\u{00a5} 500");
        assert_eq!(Money::from_minor_units(-5, eur()), m("-0.05"));
    }
}
