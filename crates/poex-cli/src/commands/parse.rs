//! Parse command - extract order data from a single email.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::debug;

use poex_core::models::config::PoexConfig;
use poex_core::order::{ExtractionResult, OrderParser, RuleOrderParser};
use poex_core::format_price;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file with raw email text (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Scope the grand-total search to the summary section
    #[arg(long)]
    scoped_total: bool,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per line item)
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(args.input.as_deref())?;
    debug!("read {} bytes of email text", text.len());

    let mut parser = RuleOrderParser::from_config(&config.extraction);
    if args.scoped_total {
        parser = parser.with_scoped_total(true);
    }

    let result = parser.parse(&text);

    if result.order.is_empty() {
        eprintln!(
            "{} No purchase-order fields found in input",
            style("ℹ").blue()
        );
    }

    if args.show_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("!").yellow(), warning);
        }
    }

    let output = format_result(&result, args.format, &config)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Load configuration from an explicit path, or defaults when none given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PoexConfig> {
    match config_path {
        Some(path) => Ok(PoexConfig::from_file(Path::new(path))?),
        None => Ok(PoexConfig::default()),
    }
}

/// Read email text from a file, or stdin when no path is given.
pub fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Render an extraction result in the requested output format.
pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    config: &PoexConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let json = if config.output.pretty_json {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(json)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for item in &result.order.items {
                writer.serialize(item)?;
            }
            writer.flush()?;
            Ok(String::from_utf8(writer.into_inner()?)?)
        }
        OutputFormat::Text => Ok(format_text(result, config)),
    }
}

/// Plain-text rendering of the extracted order: vendor, shipping details,
/// an items table and the cost summary.
fn format_text(result: &ExtractionResult, config: &PoexConfig) -> String {
    let order = &result.order;
    let meta = &result.meta;

    let price = |token: &str| -> String {
        if config.output.normalize_prices {
            format_price(token)
        } else {
            token.to_string()
        }
    };

    let mut out = String::new();

    if !meta.order_number.is_empty() {
        out.push_str(&format!("Purchase Order #{}\n", meta.order_number));
    }
    if !meta.order_date.is_empty() {
        out.push_str(&format!("Date: {}\n", meta.order_date));
    }
    if !out.is_empty() {
        out.push('\n');
    }

    out.push_str("Vendor Information\n");
    out.push_str(&format!("  {}\n\n", order.vendor_name));

    out.push_str("Shipping Information\n");
    out.push_str(&format!("  Cost: {}\n", price(&order.shipping)));
    out.push_str(&format!("  Tracking Number: {}\n", order.tracking_number));
    if !meta.carrier.is_empty() {
        out.push_str(&format!("  Carrier: {}\n", meta.carrier));
    }
    if !meta.estimated_delivery.is_empty() {
        out.push_str(&format!("  Estimated Delivery: {}\n", meta.estimated_delivery));
    }
    if !meta.shipping_address.is_empty() {
        out.push_str(&format!("  Address: {}\n", meta.shipping_address));
    }
    out.push('\n');

    out.push_str("Order Items\n");
    if order.items.is_empty() {
        out.push_str("  (none)\n");
    } else {
        let name_width = order
            .items
            .iter()
            .map(|item| item.name.len())
            .max()
            .unwrap_or(0)
            .max("Item".len());

        out.push_str(&format!(
            "  {:<name_width$}  {:>8}  {:>10}  {:>10}\n",
            "Item", "Quantity", "Unit Cost", "Total"
        ));
        for item in &order.items {
            out.push_str(&format!(
                "  {:<name_width$}  {:>8}  {:>10}  {:>10}\n",
                item.name,
                item.quantity,
                price(&item.unit_cost),
                price(&item.total)
            ));
        }
    }
    out.push('\n');

    out.push_str("Order Summary\n");
    if !meta.subtotal.is_empty() {
        out.push_str(&format!("  Subtotal: {}\n", price(&meta.subtotal)));
    }
    out.push_str(&format!("  Taxes: {}\n", price(&order.taxes)));
    out.push_str(&format!("  Total Amount: {}\n", price(&order.total)));

    out
}
