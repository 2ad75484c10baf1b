//! Shop CLI - Command line tool for TurboShop.
//!
//! Commands:
//! - `shop check` - Load settings and resolve the cart models
//! - `shop format` - Render an amount with the configured money format
//! - `shop quote` - Price a cart built from a catalog file

mod catalog_file;
mod commands;
mod context;
mod logging;
mod models;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{FormatArgs, QuoteArgs};

/// Shop CLI - Inspect settings and price carts
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Settings file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load settings and report the resolved cart models
    Check,

    /// Render an amount with the configured money format
    Format(FormatArgs),

    /// Price a cart built from a catalog file
    Quote(QuoteArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load settings and resolve models; failure here is fatal
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Check => commands::check::run(&ctx),
        Commands::Format(args) => commands::format::run(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
