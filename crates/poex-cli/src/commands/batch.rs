//! Batch command - parse multiple email files and summarize them.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use poex_core::order::{ExtractionResult, OrderParser, RuleOrderParser};

use super::parse::{format_result, load_config, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Scope the grand-total search to the summary section
    #[arg(long)]
    scoped_total: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// One row of the batch summary CSV.
#[derive(Serialize)]
struct SummaryRow {
    file: String,
    order_number: String,
    order_date: String,
    order_date_iso: String,
    vendor: String,
    items: usize,
    subtotal: String,
    shipping: String,
    taxes: String,
    total: String,
    tracking_number: String,
}

impl SummaryRow {
    fn new(path: &std::path::Path, result: &ExtractionResult) -> Self {
        Self {
            file: path.display().to_string(),
            order_number: result.meta.order_number.clone(),
            order_date: result.meta.order_date.clone(),
            order_date_iso: result
                .meta
                .parsed_date()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            vendor: result.order.vendor_name.clone(),
            items: result.order.items.len(),
            subtotal: result.meta.subtotal.clone(),
            shipping: result.order.shipping.clone(),
            taxes: result.order.taxes.clone(),
            total: result.order.total.clone(),
            tracking_number: result.order.tracking_number.clone(),
        }
    }
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "eml" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut parser = RuleOrderParser::from_config(&config.extraction);
    if args.scoped_total {
        parser = parser.with_scoped_total(true);
    }

    let mut rows = Vec::with_capacity(files.len());
    let mut failures = 0usize;

    for path in &files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if args.continue_on_error => {
                warn!("skipping {}: {}", path.display(), e);
                failures += 1;
                pb.inc(1);
                continue;
            }
            Err(e) => {
                pb.abandon();
                return Err(anyhow::anyhow!("failed to read {}: {}", path.display(), e));
            }
        };

        let result = parser.parse(&text);
        debug!(
            "{}: {} items, {} warnings",
            path.display(),
            result.order.items.len(),
            result.warnings.len()
        );

        if let Some(ref output_dir) = args.output_dir {
            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("order");
            let out_path = output_dir.join(format!("{}.{}", stem, extension));
            fs::write(&out_path, format_result(&result, args.format, &config)?)?;
        }

        rows.push(SummaryRow::new(path, &result));
        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");

        let mut writer = csv::Writer::from_path(&summary_path)?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!(
        "{} Processed {} files ({} failed) in {:.1}s",
        style("✓").green(),
        rows.len(),
        failures,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
