pub mod boundary;
pub mod discovery;
pub mod processing;
pub mod reader;
pub mod rewriter;

// Re-export main types for convenient access
pub use boundary::{Boundary, BoundaryDetector, DetectorConfig, Strategy, CHUNK_SIZE, MIN_BOUNDARY_LINE};
pub use processing::{FileReport, FileStatus, ProcessOptions, RunSummary};
pub use rewriter::{rewrite, rewrite_with_default_threshold, RewriteResult};
