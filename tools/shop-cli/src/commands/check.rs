//! Settings and model resolution check.

use anyhow::Result;
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct CheckReport<'a> {
    settings: Option<String>,
    currency: &'static str,
    decimal_places: u32,
    cart_model: &'a str,
    cart_item_model: &'a str,
    sample: String,
    registered_cart_models: Vec<&'a str>,
    registered_cart_item_models: Vec<&'a str>,
}

/// Run the check command.
pub fn run(ctx: &Context) -> Result<()> {
    let sample = ctx.money.make("1234.5")?.render(&ctx.money_format)?;
    let report = CheckReport {
        settings: ctx.settings_path.as_ref().map(|p| p.display().to_string()),
        currency: ctx.money.get_currency(),
        decimal_places: ctx.money.decimal_places(),
        cart_model: ctx.models.cart_path(),
        cart_item_model: ctx.models.cart_item_path(),
        sample,
        registered_cart_models: ctx.registry.cart_paths().collect(),
        registered_cart_item_models: ctx.registry.cart_item_paths().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Shop settings");
    match &report.settings {
        Some(path) => ctx.output.kv("Settings", path),
        None => ctx.output.kv("Settings", "(defaults)"),
    }
    ctx.output.kv(
        "Currency",
        &format!("{} ({} decimal places)", report.currency, report.decimal_places),
    );
    ctx.output.kv("Format", &report.sample);
    ctx.output.kv("Cart model", report.cart_model);
    ctx.output.kv("Cart item model", report.cart_item_model);

    ctx.output.header("Available cart models");
    for path in &report.registered_cart_models {
        ctx.output.list_item(path);
    }
    ctx.output.header("Available cart item models");
    for path in &report.registered_cart_item_models {
        ctx.output.list_item(path);
    }

    ctx.output.success(&format!("Cart models resolved: {}", ctx.models));
    Ok(())
}
