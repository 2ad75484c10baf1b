//! Currency-bound decimal money values for TurboShop.
//!
//! - **Currency**: ISO 4217 descriptors (code, symbol, minor units)
//! - **MoneyMaker**: factory validating the currency once
//! - **Money**: immutable value with NaN ("no price") semantics, checked
//!   arithmetic and locale-aware rendering
//!
//! # Example
//!
//! ```rust
//! use turbo_money::prelude::*;
//!
//! let euros = MoneyMaker::new("EUR")?;
//! let unit = euros.make("4.99")?;
//! let line = (unit * 3)?;
//! assert_eq!(line.to_string(), "\u{20ac} 14.97");
//! assert_eq!(euros.nan().to_string(), "\u{20ac} \u{2013}");
//! # Ok::<(), MoneyError>(())
//! ```

pub mod amount;
pub mod currency;
pub mod error;
pub mod format;
pub mod maker;
pub mod money;

pub use amount::{Amount, MoneyInput, Scalar};
pub use currency::Currency;
pub use error::MoneyError;
pub use format::{MoneyFormat, NumberFormat};
pub use maker::MoneyMaker;
pub use money::{Money, MoneyRepr};

pub use rust_decimal::Decimal;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::amount::{Amount, MoneyInput, Scalar};
    pub use crate::currency::Currency;
    pub use crate::error::MoneyError;
    pub use crate::format::{MoneyFormat, NumberFormat};
    pub use crate::maker::MoneyMaker;
    pub use crate::money::Money;
}
