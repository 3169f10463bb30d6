// WHY: Strategy 4 - the fallback when no structural marker repeats. An exact
// multi-line region from the top of the file reappearing in the back
// two-thirds is fingerprinted by joined text equality.

use std::collections::HashMap;

/// Upper bound on first-quarter chunk starting positions.
/// WHY: caps the fingerprint table so the scan stays cheap on large files;
/// real duplication starts repeating well within the first hundred lines.
const FIRST_QUARTER_CAP: usize = 100;

/// Find a `chunk_size`-line window past the one-third point that exactly
/// matches a window from the first quarter of the file.
///
/// Windows are keyed by the exact concatenation of their raw lines;
/// whitespace-only windows are skipped when building the table. The first
/// matching window's 1-indexed starting line is the boundary. Cost is
/// bounded by the cap on first-quarter starting positions; tightening it
/// further is a non-goal.
pub fn find_repeated_chunk(lines: &[String], chunk_size: usize) -> Option<usize> {
    let total = lines.len();
    if chunk_size == 0 || total <= chunk_size {
        return None;
    }

    let mut first_quarter: HashMap<String, usize> = HashMap::new();
    let build_end = (total / 4).min(FIRST_QUARTER_CAP);
    for i in 0..build_end {
        if i + chunk_size >= total {
            break;
        }
        let text = lines[i..i + chunk_size].concat();
        if text.trim().is_empty() {
            continue;
        }
        first_quarter.insert(text, i);
    }

    for i in total / 3..total.saturating_sub(chunk_size) {
        let candidate = lines[i..i + chunk_size].concat();
        if first_quarter.contains_key(&candidate) {
            return Some(i + 1);
        }
    }

    None
}
