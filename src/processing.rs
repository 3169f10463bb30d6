// WHY: Per-file pipeline and run reporting. Files are processed strictly one
// at a time; each file either gets a full truncation written back in a single
// write or is left untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::boundary::BoundaryDetector;
use crate::discovery::Target;
use crate::reader::{LineReader, ReaderConfig};
use crate::rewriter;

/// What happened to one target file
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// A duplicate tail was removed and the file rewritten
    Fixed,
    /// No boundary detected, or the boundary fell under the safety threshold
    Clean,
    /// Target missing on disk
    Skipped,
    /// Read or write failed
    Failed,
}

/// Per-file processing report
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileReport {
    /// File path relative to the root directory
    pub path: String,
    pub status: FileStatus,
    /// Which heuristic found the boundary, when one fired
    pub strategy: Option<String>,
    /// Detected boundary line (1-indexed), even when under the threshold
    pub boundary: Option<usize>,
    pub removed_lines: usize,
    pub retained_lines: usize,
    pub processing_time_ms: u64,
    pub error: Option<String>,
}

/// Aggregate counts plus per-file reports for one run
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunSummary {
    pub fixed: usize,
    pub clean: usize,
    pub skipped: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn record(&mut self, report: FileReport) {
        match report.status {
            FileStatus::Fixed => self.fixed += 1,
            FileStatus::Clean => self.clean += 1,
            FileStatus::Skipped => self.skipped += 1,
            FileStatus::Failed => self.failed += 1,
        }
        self.files.push(report);
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }
}

/// Options for one processing run
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Minimum boundary line for a truncation to be applied
    pub min_threshold: usize,
    /// Detect and report, but never write
    pub dry_run: bool,
    /// Abort the run on the first read/write failure
    pub fail_fast: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            min_threshold: crate::boundary::MIN_BOUNDARY_LINE,
            dry_run: false,
            fail_fast: false,
        }
    }
}

/// Run the read → detect → rewrite → write pipeline for one target.
///
/// All fallibility lives here, at the I/O boundary: the detector and rewriter
/// are total. With `fail_fast` off this never returns `Err`; failures are
/// folded into the report and the caller moves on to the next file.
pub async fn process_file(
    target: &Target,
    detector: &BoundaryDetector,
    options: &ProcessOptions,
) -> Result<FileReport> {
    let start = std::time::Instant::now();

    if target.missing {
        return Ok(FileReport {
            path: target.display_path.clone(),
            status: FileStatus::Skipped,
            strategy: None,
            boundary: None,
            removed_lines: 0,
            retained_lines: 0,
            processing_time_ms: start.elapsed().as_millis() as u64,
            error: Some("not found".to_string()),
        });
    }

    let reader = LineReader::new(ReaderConfig {
        fail_fast: options.fail_fast,
    });
    let (lines, read_stats) = reader.read_lines(&target.path).await?;

    if let Some(read_error) = read_stats.read_error {
        return Ok(FileReport {
            path: target.display_path.clone(),
            status: FileStatus::Failed,
            strategy: None,
            boundary: None,
            removed_lines: 0,
            retained_lines: 0,
            processing_time_ms: start.elapsed().as_millis() as u64,
            error: Some(read_error),
        });
    }

    let detected = detector.detect(&lines);
    let result = rewriter::rewrite(&lines, detected.map(|b| b.line), options.min_threshold);

    let (Some(boundary), true) = (detected, result.modified) else {
        // No boundary, or one under the safety threshold
        return Ok(FileReport {
            path: target.display_path.clone(),
            status: FileStatus::Clean,
            strategy: detected.map(|b| b.strategy.to_string()),
            boundary: detected.map(|b| b.line),
            removed_lines: 0,
            retained_lines: result.retained,
            processing_time_ms: start.elapsed().as_millis() as u64,
            error: None,
        });
    };

    if !options.dry_run {
        // Single whole-file write: either the full truncation lands or the
        // file is left as it was
        if let Err(e) = tokio::fs::write(&target.path, result.lines.concat()).await {
            let error_msg = format!("Failed to write {}: {}", target.path.display(), e);
            warn!("{}", error_msg);
            if options.fail_fast {
                return Err(anyhow::anyhow!(error_msg));
            }
            // The write never landed, so the file still holds every line
            return Ok(FileReport {
                path: target.display_path.clone(),
                status: FileStatus::Failed,
                strategy: Some(boundary.strategy.to_string()),
                boundary: Some(boundary.line),
                removed_lines: 0,
                retained_lines: lines.len(),
                processing_time_ms: start.elapsed().as_millis() as u64,
                error: Some(error_msg),
            });
        }
    }

    info!(
        "Truncated {} at line {} via {}: removed {} lines, kept {}",
        target.display_path, boundary.line, boundary.strategy, result.removed, result.retained
    );

    Ok(FileReport {
        path: target.display_path.clone(),
        status: FileStatus::Fixed,
        strategy: Some(boundary.strategy.to_string()),
        boundary: Some(boundary.line),
        removed_lines: result.removed,
        retained_lines: result.retained,
        processing_time_ms: start.elapsed().as_millis() as u64,
        error: None,
    })
}

/// Write the run summary as pretty JSON
pub async fn write_summary(summary: &RunSummary, stats_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize run summary")?;
    tokio::fs::write(stats_path, json)
        .await
        .with_context(|| format!("Failed to write stats file {}", stats_path.display()))?;
    info!("Run summary written to {}", stats_path.display());
    Ok(())
}
