use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use serde_json::json;

use receipt_protocol::decode_receipt;
use receipt_rules::{score_breakdown, validate_receipt, PointsBreakdown, ValidationReport};
use receipt_server::{ReceiptServer, ServerConfig};
use receipt_types::Receipt;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Validate(args) => cmd_validate(args, cli.format),
        Command::Score(args) => cmd_score(args, cli.format),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    println!("{} Receipt server on {}", "✓".green().bold(), config.bind_addr.to_string().bold());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(ReceiptServer::new(config).serve())?;
    Ok(())
}

fn cmd_validate(args: ReceiptFileArgs, format: OutputFormat) -> anyhow::Result<()> {
    let receipt = load_receipt(&args.path)?;
    let report = validate_receipt(&receipt);
    print!("{}", render_validation(&report, format));
    if !report.is_valid() {
        bail!("{} failed validation", args.path.display());
    }
    Ok(())
}

fn cmd_score(args: ReceiptFileArgs, format: OutputFormat) -> anyhow::Result<()> {
    let receipt = load_receipt(&args.path)?;
    let report = validate_receipt(&receipt);
    if !report.is_valid() {
        print!("{}", render_validation(&report, format));
        bail!("{} failed validation", args.path.display());
    }
    print!("{}", render_breakdown(&score_breakdown(&receipt), format));
    Ok(())
}

fn load_receipt(path: &Path) -> anyhow::Result<Receipt> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let receipt = decode_receipt(&bytes)
        .with_context(|| format!("decoding receipt {}", path.display()))?;
    tracing::debug!(retailer = %receipt.retailer, items = receipt.item_count(), "receipt loaded");
    Ok(receipt)
}

fn render_validation(report: &ValidationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let value = json!({ "valid": report.is_valid(), "errors": report.messages() });
            format!("{value}\n")
        }
        OutputFormat::Text if report.is_valid() => {
            format!("{} Receipt is valid\n", "✓".green().bold())
        }
        OutputFormat::Text => {
            let mut out = format!("{} Validation failed\n", "✗".red().bold());
            for message in report.messages() {
                out.push_str(&format!("  {} {}\n", "-".red(), message));
            }
            out
        }
    }
}

fn render_breakdown(breakdown: &PointsBreakdown, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let value = json!({ "rules": breakdown, "points": breakdown.total() });
            format!("{value}\n")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (rule, points) in breakdown.entries() {
                let shown = if points > 0 {
                    format!("{points:>4}").green().to_string()
                } else {
                    format!("{points:>4}").dimmed().to_string()
                };
                out.push_str(&format!("  {shown}  {rule}\n"));
            }
            out.push_str(&format!("  {:>4}  {}\n", breakdown.total().to_string().bold(), "total".bold()));
            out
        }
    }
}
