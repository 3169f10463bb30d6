use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

/// Configuration for file reading behavior
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Statistics for one file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub read_error: Option<String>,
}

/// Async reader that loads a file as a terminator-preserving line sequence
pub struct LineReader {
    config: ReaderConfig,
}

impl LineReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a whole file into lines that keep their original `\n` (and any
    /// preceding `\r`). Truncation math depends on terminators surviving the
    /// round trip, so this never uses a stripping line iterator.
    ///
    /// With `fail_fast` off, open/decode failures are captured in the stats
    /// and an empty sequence is returned so callers can keep going.
    pub async fn read_lines<P: AsRef<Path>>(&self, file_path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        debug!("Reading file: {}", path.display());

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                let error_msg = format!("Failed to read file {}: {}", path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }
                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    lines_read: 0,
                    bytes_read: 0,
                    read_error: Some(error_msg),
                };
                return Ok((Vec::new(), stats));
            }
        };

        let lines = split_keep_terminators(&content);
        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: lines.len() as u64,
            bytes_read: content.len() as u64,
            read_error: None,
        };

        debug!(
            "Read {}: {} lines, {} bytes",
            path.display(),
            stats.lines_read,
            stats.bytes_read
        );
        Ok((lines, stats))
    }
}

/// Split text into lines retaining each line's terminator.
/// A final line without a terminator is kept as-is.
pub fn split_keep_terminators(content: &str) -> Vec<String> {
    content
        .split_inclusive('\n')
        .map(|s| s.to_string())
        .collect()
}
