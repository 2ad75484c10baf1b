//! Locale-aware money rendering.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::error::MoneyError;

/// Significant digits available when quantizing for display.
pub const WORKING_PRECISION: u32 = 28;

/// Default display template.
pub const DEFAULT_TEMPLATE: &str = "{symbol} {amount}";

/// Placeholder rendered in place of a NaN amount.
pub const DEFAULT_NAN_PLACEHOLDER: &str = "\u{2013}";

/// Decimal and grouping separators for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Separator between integer and fractional digits.
    pub decimal_separator: String,
    /// Separator inserted between groups of three integer digits.
    pub group_separator: Option<String>,
}

impl NumberFormat {
    /// English conventions with thousands grouping (`1,234.50`).
    pub fn en() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: Some(",".to_string()),
        }
    }

    /// German conventions with thousands grouping (`1.234,50`).
    pub fn de() -> Self {
        Self {
            decimal_separator: ",".to_string(),
            group_separator: Some(".".to_string()),
        }
    }

    /// Apply separators to a plain `-123456.78` style number.
    fn localize(&self, plain: &str) -> String {
        let (sign, digits) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits, None),
        };

        let mut out = String::with_capacity(plain.len() + 4);
        out.push_str(sign);
        match &self.group_separator {
            Some(sep) if !sep.is_empty() => {
                let len = int_part.len();
                for (i, ch) in int_part.chars().enumerate() {
                    if i > 0 && (len - i) % 3 == 0 {
                        out.push_str(sep);
                    }
                    out.push(ch);
                }
            }
            _ => out.push_str(int_part),
        }
        if let Some(frac) = frac_part {
            out.push_str(&self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: None,
        }
    }
}

/// How money values are rendered.
///
/// The template may use `{symbol}`, `{code}` and `{amount}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    template: String,
    nan_placeholder: String,
    number: NumberFormat,
}

impl MoneyFormat {
    /// Create a format from a template. The template must contain `{amount}`.
    pub fn new(template: impl Into<String>) -> Result<Self, MoneyError> {
        let template = template.into();
        if !template.contains("{amount}") {
            return Err(MoneyError::InvalidFormat(format!(
                "template '{}' has no {{amount}} placeholder",
                template
            )));
        }
        Ok(Self {
            template,
            nan_placeholder: DEFAULT_NAN_PLACEHOLDER.to_string(),
            number: NumberFormat::default(),
        })
    }

    /// Set the text shown for NaN amounts.
    pub fn with_nan_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.nan_placeholder = placeholder.into();
        self
    }

    /// Set the number separators.
    pub fn with_number_format(mut self, number: NumberFormat) -> Self {
        self.number = number;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn nan_placeholder(&self) -> &str {
        &self.nan_placeholder
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.number
    }

    /// Render a numeric amount quantized to the currency's places.
    pub fn render_number(&self, currency: &Currency, value: Decimal) -> Result<String, MoneyError> {
        let quantized = quantize(value, currency.decimal_places())?;
        let amount = self.number.localize(&quantized.to_string());
        Ok(self.fill(currency, &amount))
    }

    /// Render the NaN placeholder.
    pub fn render_nan(&self, currency: &Currency) -> String {
        self.fill(currency, &self.nan_placeholder)
    }

    fn fill(&self, currency: &Currency, amount: &str) -> String {
        self.template
            .replace("{symbol}", currency.symbol())
            .replace("{code}", currency.code())
            .replace("{amount}", amount)
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            nan_placeholder: DEFAULT_NAN_PLACEHOLDER.to_string(),
            number: NumberFormat::default(),
        }
    }
}

/// Round half-even to `places` and fix the scale at exactly `places`.
///
/// Fails when the result needs more than [`WORKING_PRECISION`] digits.
pub fn quantize(value: Decimal, places: u32) -> Result<Decimal, MoneyError> {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    let int_digits = integer_digits(rounded);
    let digits = if int_digits == 0 {
        places.max(1)
    } else {
        int_digits + places
    };
    if digits > WORKING_PRECISION {
        return Err(MoneyError::PrecisionExhausted {
            digits,
            precision: WORKING_PRECISION,
        });
    }
    let mut quantized = rounded;
    quantized.rescale(places);
    Ok(quantized)
}

fn integer_digits(value: Decimal) -> u32 {
    let int_part = value.abs().trunc().normalize();
    if int_part.is_zero() {
        0
    } else {
        int_part.to_string().len() as u32
    }
}
