// WHY: Truncation is the destructive half of the tool, so it is gated by a
// minimum-boundary threshold and keeps the result well-formed text.

use crate::boundary::MIN_BOUNDARY_LINE;

/// Outcome of applying a boundary to a line sequence.
/// Removed/retained counts are outputs for the reporting layer; the rewriter
/// itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub lines: Vec<String>,
    pub modified: bool,
    pub removed: usize,
    pub retained: usize,
}

/// Truncate `lines` at a detected boundary, keeping lines `1..=boundary - 1`.
///
/// No change is made when `boundary` is `None` or sits at or below
/// `min_threshold` (default [`MIN_BOUNDARY_LINE`]): a boundary that early in
/// the file is almost certainly a false positive, not real duplication.
///
/// Post-condition: a non-empty result always ends with a newline terminator
/// so the rewritten file stays well-formed.
pub fn rewrite(lines: &[String], boundary: Option<usize>, min_threshold: usize) -> RewriteResult {
    let Some(boundary) = boundary else {
        return unmodified(lines);
    };
    if boundary <= min_threshold {
        return unmodified(lines);
    }

    // Detector boundaries never exceed the line count; clamp for other callers
    let cut = (boundary - 1).min(lines.len());
    let mut kept: Vec<String> = lines[..cut].to_vec();
    if let Some(last) = kept.last_mut() {
        if !last.ends_with('\n') {
            last.push('\n');
        }
    }

    RewriteResult {
        removed: lines.len() - kept.len(),
        retained: kept.len(),
        modified: true,
        lines: kept,
    }
}

/// Truncate with the default safety threshold.
pub fn rewrite_with_default_threshold(lines: &[String], boundary: Option<usize>) -> RewriteResult {
    rewrite(lines, boundary, MIN_BOUNDARY_LINE)
}

fn unmodified(lines: &[String]) -> RewriteResult {
    RewriteResult {
        lines: lines.to_vec(),
        modified: false,
        removed: 0,
        retained: lines.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("line {i}\n")).collect()
    }

    #[test]
    fn test_no_boundary_leaves_lines_untouched() {
        let input = lines(20);
        let result = rewrite_with_default_threshold(&input, None);
        assert!(!result.modified);
        assert_eq!(result.lines, input);
        assert_eq!(result.removed, 0);
        assert_eq!(result.retained, 20);
    }

    #[test]
    fn test_boundary_at_threshold_is_suppressed() {
        let input = lines(50);
        let result = rewrite_with_default_threshold(&input, Some(10));
        assert!(!result.modified);
        assert_eq!(result.lines.len(), 50);
    }

    #[test]
    fn test_boundary_below_threshold_is_suppressed() {
        let input = lines(50);
        for b in 1..=10 {
            let result = rewrite_with_default_threshold(&input, Some(b));
            assert!(!result.modified, "boundary {b} must be suppressed");
        }
    }

    #[test]
    fn test_boundary_just_past_threshold_truncates() {
        let input = lines(50);
        let result = rewrite_with_default_threshold(&input, Some(11));
        assert!(result.modified);
        assert_eq!(result.retained, 10);
        assert_eq!(result.removed, 40);
        assert_eq!(result.lines.last().unwrap(), "line 10\n");
    }

    #[test]
    fn test_counts_add_up() {
        let input = lines(200);
        let result = rewrite_with_default_threshold(&input, Some(150));
        assert!(result.modified);
        assert_eq!(result.retained, 149);
        assert_eq!(result.removed, 51);
        assert_eq!(result.removed + result.retained, 200);
    }

    #[test]
    fn test_trailing_newline_is_appended_when_missing() {
        let mut input = lines(30);
        // Simulate a file whose last kept line has no terminator
        input[19] = "line 20".to_string();
        let result = rewrite_with_default_threshold(&input, Some(21));
        assert!(result.modified);
        assert_eq!(result.lines.last().unwrap(), "line 20\n");
    }

    #[test]
    fn test_trailing_newline_is_not_doubled() {
        let input = lines(30);
        let result = rewrite_with_default_threshold(&input, Some(21));
        assert_eq!(result.lines.last().unwrap(), "line 20\n");
    }

    #[test]
    fn test_custom_threshold() {
        let input = lines(50);
        let suppressed = rewrite(&input, Some(25), 30);
        assert!(!suppressed.modified);
        let applied = rewrite(&input, Some(25), 20);
        assert!(applied.modified);
        assert_eq!(applied.retained, 24);
    }
}
