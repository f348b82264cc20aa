//! CLI for extracting structured receipt data from recognized text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use parchi_core::{ReceiptAnalyzer, ReceiptData, TextDocument};

/// Extract category, reference number, amount, and description from
/// recognized receipt text.
#[derive(Parser)]
#[command(name = "parchi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input text file ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let text = read_input(&cli.input)?;
    info!("analyzing {} characters of text", text.len());

    let doc = TextDocument::from_text(&text);
    let result = ReceiptAnalyzer::new().analyze(&doc);

    let output = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text => format_summary(&result),
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Result written to {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn format_summary(result: &ReceiptData) -> String {
    let not_found = |s: &str| {
        if s.is_empty() {
            style("(not found)").dim().to_string()
        } else {
            s.to_string()
        }
    };

    format!(
        "{}\n  Category:    {:?}\n  Reference:   {}\n  Amount:      {}\n  Description: {}",
        style("Receipt").bold(),
        result.category,
        not_found(&result.reference_number),
        result.amount,
        not_found(&result.description),
    )
}
