//! Decimal amounts with NaN states, and the inputs accepted when building
//! or scaling money.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::MoneyError;
use crate::format::WORKING_PRECISION;
use crate::money::Money;

/// The numeric part of a money value.
///
/// `NaN` stands for "no price set" and is distinct from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    /// A concrete decimal amount.
    Number(Decimal),
    /// Quiet not-a-number.
    NaN,
    /// Signaling not-a-number; refuses conversion to float.
    SignalingNaN,
}

impl Amount {
    /// Check if this is either NaN state.
    pub fn is_nan(&self) -> bool {
        !matches!(self, Amount::Number(_))
    }

    /// The decimal value, if any.
    pub fn number(&self) -> Option<Decimal> {
        match self {
            Amount::Number(d) => Some(*d),
            _ => None,
        }
    }

    /// Negate. Zero stays positive zero; NaN states are unchanged.
    pub fn negate(self) -> Self {
        match self {
            Amount::Number(d) if d.is_zero() => Amount::Number(d.abs()),
            Amount::Number(d) => Amount::Number(-d),
            other => other,
        }
    }

    pub(crate) fn from_f64(value: f64) -> Result<Self, MoneyError> {
        if value.is_nan() {
            return Ok(Amount::NaN);
        }
        Decimal::from_f64(value)
            .map(Amount::Number)
            .ok_or_else(|| MoneyError::InvalidValue(value.to_string()))
    }

    pub(crate) fn to_f64(self) -> Result<f64, MoneyError> {
        match self {
            Amount::SignalingNaN => Err(MoneyError::SignalingNan),
            Amount::NaN => Ok(f64::NAN),
            Amount::Number(d) => d.to_f64().ok_or(MoneyError::Overflow),
        }
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    /// Parse decimal text. Accepts plain and scientific notation plus the
    /// `NaN`, `-NaN` and `sNaN` spellings.
    ///
    /// Text needing more than [`WORKING_PRECISION`] significant digits is
    /// rejected rather than rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let unsigned = text
            .strip_prefix(['+', '-'])
            .unwrap_or(text);
        if unsigned.eq_ignore_ascii_case("nan") {
            return Ok(Amount::NaN);
        }
        if unsigned.eq_ignore_ascii_case("snan") {
            return Ok(Amount::SignalingNaN);
        }

        let invalid = || MoneyError::InvalidValue(s.to_string());
        let mantissa = unsigned.split(['e', 'E']).next().unwrap_or(unsigned);
        let fraction_digits = mantissa.split_once('.').map_or(0, |(_, f)| f.len());
        if significant_digits(mantissa) > WORKING_PRECISION as usize
            || fraction_digits > WORKING_PRECISION as usize
        {
            return Err(invalid());
        }

        let plain = text.strip_prefix('+').unwrap_or(text);
        let parsed = if plain.contains(['e', 'E']) {
            Decimal::from_scientific(plain)
        } else {
            Decimal::from_str(plain)
        };
        parsed.map(Amount::Number).map_err(|_| invalid())
    }
}

/// Digits of a decimal mantissa, not counting leading zeros.
fn significant_digits(mantissa: &str) -> usize {
    mantissa
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .count()
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(d) => write!(f, "{}", d),
            Amount::NaN => write!(f, "NaN"),
            Amount::SignalingNaN => write!(f, "sNaN"),
        }
    }
}

/// A value money can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyInput {
    /// No value; builds NaN.
    Absent,
    /// An already-parsed amount.
    Amount(Amount),
    /// A float literal.
    Float(f64),
    /// Decimal text with at most 28 significant digits.
    Text(String),
    /// Another money value.
    Money(Money),
}

impl MoneyInput {
    /// Resolve to an amount. Money inputs are handled by the caller, which
    /// checks the currency first.
    pub(crate) fn into_amount(self) -> Result<Amount, MoneyError> {
        match self {
            MoneyInput::Absent => Ok(Amount::NaN),
            MoneyInput::Amount(a) => Ok(a),
            MoneyInput::Float(f) => Amount::from_f64(f),
            MoneyInput::Text(s) => s.parse(),
            MoneyInput::Money(m) => Ok(m.amount()),
        }
    }
}

macro_rules! money_input_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MoneyInput {
                fn from(v: $t) -> Self {
                    MoneyInput::Amount(Amount::Number(Decimal::from(v)))
                }
            }
        )*
    };
}

money_input_from_int!(i32, i64, u32, u64);

impl From<f64> for MoneyInput {
    fn from(v: f64) -> Self {
        MoneyInput::Float(v)
    }
}

impl From<Decimal> for MoneyInput {
    fn from(v: Decimal) -> Self {
        MoneyInput::Amount(Amount::Number(v))
    }
}

impl From<Amount> for MoneyInput {
    fn from(v: Amount) -> Self {
        MoneyInput::Amount(v)
    }
}

impl From<&str> for MoneyInput {
    fn from(v: &str) -> Self {
        MoneyInput::Text(v.to_string())
    }
}

impl From<String> for MoneyInput {
    fn from(v: String) -> Self {
        MoneyInput::Text(v)
    }
}

impl From<Money> for MoneyInput {
    fn from(v: Money) -> Self {
        MoneyInput::Money(v)
    }
}

impl From<&Money> for MoneyInput {
    fn from(v: &Money) -> Self {
        MoneyInput::Money(*v)
    }
}

impl<T: Into<MoneyInput>> From<Option<T>> for MoneyInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(MoneyInput::Absent, Into::into)
    }
}

/// A dimensionless factor for scaling money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// No factor; scaling by it yields NaN.
    Absent,
    /// An integer factor.
    Integer(i64),
    /// A float factor.
    Float(f64),
    /// A decimal factor.
    Decimal(Decimal),
}

impl Scalar {
    /// True for integer or float zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Absent => false,
            Scalar::Integer(i) => *i == 0,
            Scalar::Float(f) => *f == 0.0,
            Scalar::Decimal(d) => d.is_zero(),
        }
    }

    /// The factor as an amount. NaN floats become NaN.
    pub(crate) fn to_amount(self) -> Result<Amount, MoneyError> {
        match self {
            Scalar::Absent => Ok(Amount::NaN),
            Scalar::Integer(i) => Ok(Amount::Number(Decimal::from(i))),
            Scalar::Float(f) => Amount::from_f64(f),
            Scalar::Decimal(d) => Ok(Amount::Number(d)),
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::Integer(i64::from(v))
                }
            }
        )*
    };
}

scalar_from_int!(i32, i64, u32);

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<Decimal> for Scalar {
    fn from(v: Decimal) -> Self {
        Scalar::Decimal(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            "1.23".parse::<Amount>().unwrap(),
            Amount::Number(Decimal::new(123, 2))
        );
        assert_eq!(
            " +4.5 ".parse::<Amount>().unwrap(),
            Amount::Number(Decimal::new(45, 1))
        );
        assert_eq!(
            "1e2".parse::<Amount>().unwrap(),
            Amount::Number(Decimal::from(100))
        );
    }

    #[test]
    fn test_parse_nan_spellings() {
        assert_eq!("NaN".parse::<Amount>().unwrap(), Amount::NaN);
        assert_eq!("-NaN".parse::<Amount>().unwrap(), Amount::NaN);
        assert_eq!("sNaN".parse::<Amount>().unwrap(), Amount::SignalingNaN);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "invalid".parse::<Amount>(),
            Err(MoneyError::InvalidValue(_))
        ));
        assert!("".parse::<Amount>().is_err());
        assert!("+-NaN".parse::<Amount>().is_err());
        assert!("--NaN".parse::<Amount>().is_err());
        assert!("--1".parse::<Amount>().is_err());
    }

    #[test]
    fn test_parse_rejects_digits_beyond_working_precision() {
        let exact = "1234567890.123456789012345678";
        assert_eq!(
            exact.parse::<Amount>().unwrap().to_string(),
            exact
        );
        assert_eq!(
            "0.0000000000000000000000000001".parse::<Amount>().unwrap(),
            Amount::Number(Decimal::new(1, 28))
        );

        for text in [
            "0.12345678901234567890123456789012345",
            "12345678901234567890.123456789",
            "0.00000000000000000000000000001",
            "1.23456789012345678901234567890e5",
        ] {
            assert!(
                matches!(text.parse::<Amount>(), Err(MoneyError::InvalidValue(_))),
                "{} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::NaN.to_string(), "NaN");
        assert_eq!(Amount::SignalingNaN.to_string(), "sNaN");
        assert_eq!(Amount::Number(Decimal::new(150, 2)).to_string(), "1.50");
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(Amount::SignalingNaN.to_f64(), Err(MoneyError::SignalingNan));
        assert!(Amount::NaN.to_f64().unwrap().is_nan());
        assert_eq!(Amount::Number(Decimal::ONE).to_f64().unwrap(), 1.0);
        assert_eq!(Amount::from_f64(f64::NAN).unwrap(), Amount::NaN);
        assert!(Amount::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_scalar_zero() {
        assert!(Scalar::from(0).is_zero());
        assert!(Scalar::from(0.0).is_zero());
        assert!(!Scalar::from(1).is_zero());
        assert!(!Scalar::from(None::<i64>).is_zero());
    }
}
