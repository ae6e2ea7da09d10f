//! CLI for scanning invoice PDFs and producing a vendor-total report.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use faktura_core::models::config::{RecordPolicy, ScanConfig};
use faktura_core::report::write_report;
use faktura_core::scan::{find_invoice_pdfs, scan_files};

/// Scan a directory tree for invoice PDFs and write a CSV report with
/// per-vendor and grand totals.
#[derive(Parser)]
#[command(name = "faktura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to scan recursively
    root: PathBuf,

    /// Directory the report is written to (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Which records to keep: any extracted field, or all fields
    /// (default: the config file's policy, or "any")
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PolicyArg {
    /// Keep records with at least one extracted field
    Any,
    /// Keep only fully extracted records
    All,
}

impl From<PolicyArg> for RecordPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Any => RecordPolicy::Any,
            PolicyArg::All => RecordPolicy::All,
        }
    }
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

    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let start = Instant::now();

    if !cli.root.is_dir() {
        anyhow::bail!("not a directory: {}", cli.root.display());
    }

    let config = match &cli.config {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };
    // CLI flags win over the config file, which wins over defaults
    let config = ScanConfig {
        root: cli.root.clone(),
        output_dir: cli
            .output_dir
            .clone()
            .unwrap_or(config.output_dir),
        policy: cli.policy.map(RecordPolicy::from).unwrap_or(config.policy),
    };

    let files = find_invoice_pdfs(&config.root)?;
    println!(
        "{} Found {} invoice PDFs under {} (policy: {})",
        style("ℹ").blue(),
        files.len(),
        config.root.display(),
        match config.policy {
            RecordPolicy::Any => "any",
            RecordPolicy::All => "all",
        }
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let outcome = scan_files(&files, config.policy, |_| pb.inc(1));
    pb.finish_and_clear();

    let report_path = write_report(&outcome.records, &config.output_dir)?;

    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} records kept, {} skipped",
        style(outcome.records.len()).green(),
        style(outcome.skipped).yellow()
    );

    match report_path {
        Some(path) => println!("{} Report written to {}", style("✓").green(), path.display()),
        None => println!("{} No records extracted, no report written", style("ℹ").blue()),
    }

    Ok(())
}
