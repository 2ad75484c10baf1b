//! Cart quotes from a catalog file.

use anyhow::{bail, Context as _, Result};
use turbo_money::Money;
use turbo_shop::cart::{Cart, CartPricing};
use turbo_shop::catalog::ProductExtra;

use super::QuoteArgs;
use crate::catalog_file::CatalogFile;
use crate::context::Context;

/// One `CODE[:QTY][@VARIANT]` argument.
#[derive(Debug, PartialEq, Eq)]
struct ItemSpec {
    code: String,
    quantity: i64,
    variant: Option<String>,
}

impl ItemSpec {
    fn parse(arg: &str) -> Result<Self> {
        let (head, variant) = match arg.split_once('@') {
            Some((head, variant)) => (head, Some(variant.trim())),
            None => (arg, None),
        };
        let (code, quantity) = match head.split_once(':') {
            Some((code, quantity)) => {
                let quantity = quantity
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("Invalid quantity in '{}'", arg))?;
                (code, quantity)
            }
            None => (head, 1),
        };

        let code = code.trim();
        if code.is_empty() {
            bail!("Missing product code in '{}'", arg);
        }
        if variant.is_some_and(str::is_empty) {
            bail!("Missing variant code in '{}'", arg);
        }
        Ok(Self {
            code: code.to_string(),
            quantity,
            variant: variant.map(String::from),
        })
    }

    fn extra(&self) -> ProductExtra {
        self.variant
            .as_deref()
            .map(ProductExtra::with_product_code)
            .unwrap_or_default()
    }
}

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let items = args
        .items
        .iter()
        .map(|arg| ItemSpec::parse(arg))
        .collect::<Result<Vec<_>>>()?;

    let catalog = CatalogFile::load(&ctx.resolve_path(&args.catalog))?.into_catalog(&ctx.money)?;
    ctx.output.debug(&format!("Loaded {} products", catalog.len()));

    let mut cart = Cart::new("cli", ctx.money.currency());
    for item in &items {
        let extra = item.extra();
        let product = catalog
            .sellable(&item.code, &extra)
            .with_context(|| format!("Cannot sell '{}'", item.code))?;
        cart.add_product(product, extra, item.quantity)
            .with_context(|| format!("Cannot add '{}' to the cart", item.code))?;
    }

    let pricing = cart.pricing(&ctx.models)?;
    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return Ok(());
    }

    print_quote(ctx, &pricing)
}

fn print_quote(ctx: &Context, pricing: &CartPricing) -> Result<()> {
    let render = |money: &Money| money.render(&ctx.money_format);
    ctx.output.header(&format!("Quote ({})", ctx.models));
    let mut rows = Vec::new();
    for line in &pricing.lines {
        rows.push(vec![
            line.product_code.clone(),
            line.product_name.clone(),
            line.quantity.to_string(),
            render(&line.unit_price)?,
            render(&line.line_total)?,
        ]);
        for row in &line.extra_rows {
            rows.push(vec![
                String::new(),
                format!("  {}", row.label),
                String::new(),
                String::new(),
                render(&row.amount)?,
            ]);
        }
    }
    ctx.output
        .table(&["CODE", "PRODUCT", "QTY", "UNIT", "TOTAL"], &rows);

    println!();
    ctx.output.kv("Subtotal", &render(&pricing.subtotal)?);
    for row in &pricing.extra_rows {
        ctx.output.kv(&row.label, &render(&row.amount)?);
    }
    ctx.output.kv("Total", &render(&pricing.total)?);

    let unpriced: Vec<&str> = pricing
        .unpriced_lines()
        .map(|line| line.product_code.as_str())
        .collect();
    if unpriced.is_empty() {
        ctx.output.success("All items priced");
    } else {
        ctx.output.info(&format!(
            "Not included in the total (no price): {}",
            unpriced.join(", ")
        ));
    }
    Ok(())
}
