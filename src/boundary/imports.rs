// WHY: Strategy 2 - import statements cluster at the top of a module, so a
// second run of them further down usually marks where an appended copy of
// the file begins.

/// How far the cut point backs up from the second import run.
/// WHY: duplicated copies typically carry the file's header comment right
/// above their import block; backing up a few lines catches it.
const HEADER_BACKTRACK: usize = 3;

/// Find the start of a second import block, adjusted to also capture any
/// header comment immediately preceding it.
///
/// A run starts at a line whose trimmed form begins with `import ` (marker
/// plus space). Once inside a run, blank lines and further import lines
/// continue it; the first non-blank non-import line ends it. A run still
/// open at end-of-file counts as a block. With two or more runs, returns the
/// second run's starting line minus 3, floored at line 1.
pub fn find_duplicate_import_block(lines: &[String]) -> Option<usize> {
    let mut block_starts: Vec<usize> = Vec::new();
    let mut in_run = false;

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if !in_run {
            if trimmed.starts_with("import ") {
                block_starts.push(idx + 1);
                in_run = true;
            }
        } else if !trimmed.is_empty() && !trimmed.starts_with("import") {
            in_run = false;
        }
    }

    if block_starts.len() >= 2 {
        Some(block_starts[1].saturating_sub(HEADER_BACKTRACK).max(1))
    } else {
        None
    }
}
