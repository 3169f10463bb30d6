// WHY: Strategy 3 - generated files open with a block-comment header; a
// second copy of that header in the back half of the file marks the start
// of an appended duplicate.

/// Lines a qualifying opener must be followed by for the "real header" check.
const LOOKAHEAD: usize = 3;

/// How far the cut point backs up from the qualifying header opener.
const HEADER_BACKTRACK: usize = 2;

/// Find a block-comment header opener in the second half of the file.
///
/// An opener is a line whose trimmed text is exactly `/*` or `/**`. It only
/// qualifies when at least three lines follow it and at least one of the
/// next three contains a `*`, filtering out stray openers that never grow
/// into a header block. Openers at or before the file midpoint are ignored;
/// the first qualifying opener past the midpoint yields its line minus 2,
/// floored at line 1.
pub fn find_duplicate_comment_header(lines: &[String]) -> Option<usize> {
    let total = lines.len();
    let midpoint = total / 2;

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed != "/*" && trimmed != "/**" {
            continue;
        }
        if idx + 1 + LOOKAHEAD > total {
            continue;
        }
        let looks_like_header = lines[idx + 1..idx + 1 + LOOKAHEAD]
            .iter()
            .any(|l| l.contains('*'));
        if !looks_like_header {
            continue;
        }
        let line_number = idx + 1;
        if line_number > midpoint {
            return Some(line_number.saturating_sub(HEADER_BACKTRACK).max(1));
        }
    }

    None
}
