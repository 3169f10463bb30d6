// WHY: Main detector interface - four ordered heuristics over a file's lines,
// first non-empty answer wins. Each strategy is a pure function so the whole
// pass stays total and testable in isolation.

pub mod chunks;
pub mod exports;
pub mod headers;
pub mod imports;

/// Minimum boundary line for a truncation to be applied.
/// WHY: an early "match" in the first few lines of a file is almost always a
/// false positive, not real duplication; refusing to cut there keeps the tool
/// safe on small files.
pub const MIN_BOUNDARY_LINE: usize = 10;

/// Number of consecutive lines hashed together by the chunk fallback.
pub const CHUNK_SIZE: usize = 5;

/// Which heuristic produced a boundary. Reporting-only; never affects
/// how the truncation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DuplicateExport,
    DuplicateImportBlock,
    DuplicateCommentHeader,
    ChunkMatch,
}

impl Strategy {
    /// Stable name used in stats output and log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::DuplicateExport => "duplicate-export",
            Strategy::DuplicateImportBlock => "duplicate-import-block",
            Strategy::DuplicateCommentHeader => "duplicate-comment-header",
            Strategy::ChunkMatch => "chunk-match",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected duplication boundary: the 1-indexed line where the duplicate
/// region is judged to begin. Content at and after this line is discarded
/// by the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub line: usize,
    pub strategy: Strategy,
}

/// Configuration for boundary detection
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Window size for the chunk-match fallback
    pub chunk_size: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }
}

/// Detects the line at which a file's content starts repeating itself.
///
/// Strategies run in fixed priority order and the first one that produces a
/// boundary short-circuits the rest:
/// 1. duplicate export declaration (same identifier exported twice)
/// 2. duplicate import block (a second run of import lines)
/// 3. duplicate comment header in the second half of the file
/// 4. exact 5-line chunk from the first quarter reappearing later
///
/// Detection never fails: absence of a match is a normal `None`, not an error.
#[derive(Debug, Clone, Default)]
pub struct BoundaryDetector {
    config: DetectorConfig,
}

impl BoundaryDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Run all strategies against the line sequence in priority order.
    /// Lines are 1-indexed in every returned boundary; terminators may be
    /// present or absent, the strategies trim where they need to.
    pub fn detect(&self, lines: &[String]) -> Option<Boundary> {
        if let Some(line) = exports::find_duplicate_export(lines) {
            return Some(Boundary {
                line,
                strategy: Strategy::DuplicateExport,
            });
        }
        if let Some(line) = imports::find_duplicate_import_block(lines) {
            return Some(Boundary {
                line,
                strategy: Strategy::DuplicateImportBlock,
            });
        }
        if let Some(line) = headers::find_duplicate_comment_header(lines) {
            return Some(Boundary {
                line,
                strategy: Strategy::DuplicateCommentHeader,
            });
        }
        if let Some(line) = chunks::find_repeated_chunk(lines, self.config.chunk_size) {
            return Some(Boundary {
                line,
                strategy: Strategy::ChunkMatch,
            });
        }
        None
    }
}
