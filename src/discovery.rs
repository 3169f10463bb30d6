use anyhow::{Context, Result};
use ignore::{WalkBuilder, WalkState};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Source file extensions considered scan candidates
const CANDIDATE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// A resolved target file, or the reason it was skipped
#[derive(Debug, Clone)]
pub struct Target {
    pub path: PathBuf,
    /// Path as given on the command line or in the list file, for reporting
    pub display_path: String,
    pub missing: bool,
}

/// Resolve explicitly named files against the root directory.
/// Missing files become skip entries rather than errors: the target list is
/// a wish list, not a contract.
pub fn resolve_targets(root: &Path, files: &[String]) -> Vec<Target> {
    files
        .iter()
        .map(|rel| {
            let path = root.join(rel);
            let missing = !path.is_file();
            if missing {
                warn!("Target not found, will skip: {}", path.display());
            }
            Target {
                path,
                display_path: rel.clone(),
                missing,
            }
        })
        .collect()
}

/// Read a target list file: one relative path per line, blank lines and
/// `#` comments ignored.
pub async fn read_target_list(list_path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(list_path)
        .await
        .with_context(|| format!("Failed to read target list {}", list_path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Recursively discover candidate source files under the root directory.
///
/// Uses the `ignore` parallel walker (the same traversal ripgrep uses) with
/// gitignore handling left on, so generated trees like `node_modules` and
/// build output stay out of the target list. Results are sorted for a
/// stable processing order.
pub fn scan_for_candidates(root: &Path) -> Result<Vec<Target>> {
    info!("Scanning for candidate source files in: {}", root.display());
    let start = std::time::Instant::now();

    let walker = WalkBuilder::new(root)
        .threads((num_cpus::get() / 2).max(1))
        .follow_links(false)
        .hidden(true)
        .build_parallel();

    let (tx, rx) = std::sync::mpsc::channel::<PathBuf>();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            if let Ok(entry) = entry {
                if entry.file_type().is_some_and(|ft| ft.is_file()) && is_candidate(entry.path()) {
                    debug!("Found candidate: {}", entry.path().display());
                    let _ = tx.send(entry.path().to_path_buf());
                }
            }
            WalkState::Continue
        })
    });
    drop(tx);

    let mut paths: Vec<PathBuf> = rx.into_iter().collect();
    paths.sort();

    info!(
        "Scan found {} candidates in {:.2}ms",
        paths.len(),
        start.elapsed().as_millis()
    );

    Ok(paths
        .into_iter()
        .map(|path| {
            let display_path = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string();
            Target {
                path,
                display_path,
                missing: false,
            }
        })
        .collect())
}

fn is_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CANDIDATE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_marks_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("page.tsx");
        std::fs::write(&existing, "content\n").unwrap();

        let targets = resolve_targets(
            temp_dir.path(),
            &["page.tsx".to_string(), "gone.tsx".to_string()],
        );

        assert_eq!(targets.len(), 2);
        assert!(!targets[0].missing);
        assert!(targets[1].missing);
        assert_eq!(targets[1].display_path, "gone.tsx");
    }

    #[test]
    fn test_candidate_extension_filter() {
        assert!(is_candidate(Path::new("a/b/page.tsx")));
        assert!(is_candidate(Path::new("route.ts")));
        assert!(is_candidate(Path::new("legacy.js")));
        assert!(is_candidate(Path::new("old.jsx")));
        assert!(!is_candidate(Path::new("styles.css")));
        assert!(!is_candidate(Path::new("README.md")));
        assert!(!is_candidate(Path::new("noext")));
    }

    #[test]
    fn test_scan_finds_nested_sources() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("app/api")).unwrap();
        std::fs::write(root.join("app/page.tsx"), "x\n").unwrap();
        std::fs::write(root.join("app/api/route.ts"), "x\n").unwrap();
        std::fs::write(root.join("app/styles.css"), "x\n").unwrap();

        let targets = scan_for_candidates(root).unwrap();
        let names: Vec<&str> = targets.iter().map(|t| t.display_path.as_str()).collect();

        assert_eq!(targets.len(), 2);
        assert!(names.contains(&"app/page.tsx"));
        assert!(names.contains(&"app/api/route.ts"));
    }

    #[tokio::test]
    async fn test_read_target_list_skips_comments_and_blanks() {
        let temp_dir = TempDir::new().unwrap();
        let list = temp_dir.path().join("targets.txt");
        std::fs::write(&list, "# known duplicates\napp/page.tsx\n\n  lib/client.ts  \n").unwrap();

        let entries = read_target_list(&list).await.unwrap();
        assert_eq!(entries, vec!["app/page.tsx", "lib/client.ts"]);
    }

    #[tokio::test]
    async fn test_read_target_list_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let list = temp_dir.path().join("missing.txt");
        assert!(read_target_list(&list).await.is_err());
    }
}
