use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

use dupecut::boundary::{BoundaryDetector, MIN_BOUNDARY_LINE};
use dupecut::processing::{self, ProcessOptions, RunSummary};
use dupecut::{discovery, FileStatus};

#[derive(Parser, Debug)]
#[command(name = "dupecut")]
#[command(about = "Removes accidentally duplicated tails from generated source files")]
#[command(version)]
struct Args {
    /// Target files, relative to the root directory
    files: Vec<String>,

    /// Root directory targets are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// File listing targets, one relative path per line (# comments allowed)
    #[arg(long)]
    list: Option<PathBuf>,

    /// Recursively scan the root for *.ts, *.tsx, *.js, *.jsx targets
    #[arg(long)]
    scan: bool,

    /// Minimum boundary line for a truncation to be applied
    #[arg(long, default_value_t = MIN_BOUNDARY_LINE)]
    threshold: usize,

    /// Detect and report without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Suppress the console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "dupecut_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting dupecut");
    info!(?args, "Parsed CLI arguments");

    // WHY: validate root directory exists early to fail fast with clear error
    if !args.root.exists() {
        anyhow::bail!("Root directory does not exist: {}", args.root.display());
    }
    if !args.root.is_dir() {
        anyhow::bail!("Root path is not a directory: {}", args.root.display());
    }

    let targets = if args.scan {
        if !args.files.is_empty() || args.list.is_some() {
            anyhow::bail!("--scan cannot be combined with explicit targets or --list");
        }
        discovery::scan_for_candidates(&args.root)?
    } else {
        let mut files = args.files.clone();
        if let Some(ref list_path) = args.list {
            files.extend(discovery::read_target_list(list_path).await?);
        }
        if files.is_empty() {
            anyhow::bail!("No targets given: pass files, --list, or --scan");
        }
        discovery::resolve_targets(&args.root, &files)
    };

    info!("Processing {} target files", targets.len());
    println!("dupecut v{}", env!("CARGO_PKG_VERSION"));
    println!("Processing {} files...", targets.len());

    let progress = if args.no_progress || targets.is_empty() {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(targets.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let detector = BoundaryDetector::default();
    let options = ProcessOptions {
        min_threshold: args.threshold,
        dry_run: args.dry_run,
        fail_fast: args.fail_fast,
    };

    let mut summary = RunSummary::default();

    // WHY: files are processed strictly one at a time; each detection pass
    // owns its own line sequence, so one bad file cannot poison the next
    for target in &targets {
        progress.set_message(target.display_path.clone());
        let report = processing::process_file(target, &detector, &options).await?;

        match report.status {
            FileStatus::Fixed => {
                progress.println(format!(
                    "fixed   {} (removed {} lines, kept {})",
                    report.path, report.removed_lines, report.retained_lines
                ));
            }
            FileStatus::Clean => {
                progress.println(format!("clean   {}", report.path));
            }
            FileStatus::Skipped => {
                progress.println(format!("skipped {} (not found)", report.path));
            }
            FileStatus::Failed => {
                progress.println(format!(
                    "failed  {} ({})",
                    report.path,
                    report.error.as_deref().unwrap_or("unknown error")
                ));
            }
        }

        summary.record(report);
        progress.inc(1);
    }
    progress.finish_and_clear();

    processing::write_summary(&summary, &args.stats_out).await?;

    println!("\nDone.");
    println!("  Fixed:   {}", summary.fixed);
    println!("  Clean:   {}", summary.clean);
    println!("  Skipped: {}", summary.skipped);
    println!("  Failed:  {}", summary.failed);
    if args.dry_run {
        println!("  (dry run: no files were written)");
    }

    info!(
        "Run complete: {} fixed, {} clean, {} skipped, {} failed",
        summary.fixed, summary.clean, summary.skipped, summary.failed
    );

    Ok(())
}
