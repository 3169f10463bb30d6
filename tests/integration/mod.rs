// Integration test utilities and common code
// WHY: Centralized fixture avoids duplicating tempdir setup across tests;
// each test crate uses only a slice of these helpers
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for building a temporary project tree of source files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a source file with the given content under the fixture root
    pub fn create_source_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Read back a file's content
    pub fn read_file<P: AsRef<Path>>(&self, relative_path: P) -> String {
        fs::read_to_string(self.root_path.join(relative_path)).expect("Failed to read test file")
    }
}

/// Split text the way the reader does, terminators kept
pub fn to_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(|s| s.to_string()).collect()
}

/// `count` filler lines that never repeat, tagged to stay distinct
pub fn filler(count: usize, tag: &str) -> String {
    (0..count)
        .map(|i| format!("const {tag}{i} = {i};\n"))
        .collect()
}
