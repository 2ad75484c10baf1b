//! Money error types.

use thiserror::Error;

/// Errors raised while creating, combining or rendering money values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Currency code is not in the currency table.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Value cannot be interpreted as a monetary amount.
    #[error("Invalid monetary value: {0}")]
    InvalidValue(String),

    /// Two values bound to different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Operand combination has no meaningful money semantics.
    #[error("Unsupported money operation '{op}': {reason}")]
    UnsupportedOperation {
        op: &'static str,
        reason: &'static str,
    },

    /// Quantized value needs more digits than the working precision.
    #[error("Precision exhausted: {digits} digits required, working precision is {precision}")]
    PrecisionExhausted { digits: u32, precision: u32 },

    /// Signaling NaN cannot be converted.
    #[error("Cannot convert signaling NaN")]
    SignalingNan,

    /// Operation requires a numeric value but the amount is NaN.
    #[error("Money value is not a number")]
    NotANumber,

    /// Division by a zero scalar.
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic overflow in money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Format template is unusable.
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}

impl MoneyError {
    pub(crate) fn mismatch(expected: &str, got: &str) -> Self {
        MoneyError::CurrencyMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    pub(crate) fn unsupported(op: &'static str, reason: &'static str) -> Self {
        MoneyError::UnsupportedOperation { op, reason }
    }
}
