//! CLI command implementations.

pub mod check;
pub mod format;
pub mod quote;

use clap::Args;

/// Arguments for the format command.
#[derive(Args)]
pub struct FormatArgs {
    /// Amount to render ("1.5", "1e3", "NaN").
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Currency code (default: shop.currency).
    #[arg(long)]
    pub currency: Option<String>,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Catalog file (TOML).
    #[arg(long)]
    pub catalog: String,

    /// Items to add, as CODE[:QTY][@VARIANT].
    #[arg(required = true)]
    pub items: Vec<String>,
}
