//! Money rendering.

use anyhow::{Context as _, Result};
use serde::Serialize;
use turbo_money::MoneyMaker;

use super::FormatArgs;
use crate::context::Context;

#[derive(Serialize)]
struct Formatted {
    currency: &'static str,
    amount: String,
    display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    minor_units: Option<i64>,
}

/// Run the format command.
pub fn run(args: FormatArgs, ctx: &Context) -> Result<()> {
    let maker = match &args.currency {
        Some(code) => MoneyMaker::new(code)?,
        None => ctx.money,
    };
    let money = maker
        .make(args.amount.as_str())
        .with_context(|| format!("Cannot make {} from '{}'", maker.get_currency(), args.amount))?;

    let display = money.render(&ctx.money_format)?;
    let (currency, amount) = money.reduce();
    let minor_units = if money.is_nan() {
        None
    } else {
        Some(money.as_integer()?)
    };
    if money.is_signaling_nan() {
        ctx.output.warn("Signaling NaN: the amount cannot be used in calculations");
    }

    if ctx.output.is_json() {
        ctx.output.json(&Formatted {
            currency,
            amount,
            display,
            minor_units,
        });
        return Ok(());
    }

    println!("{}", display);
    ctx.output.debug(&format!("{} {}", currency, amount));
    Ok(())
}
