// WHY: Strategy 1 - a named export declared twice is the strongest signal
// that a file's contents were appended to themselves.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^export\s+(?:async\s+)?(?:function|const|interface|type|class)\s+(\w+)")
        .expect("EXPORT_RE is a valid static regex pattern")
});

/// Scan for a top-level export declaration whose identifier appears twice.
///
/// Returns the 1-indexed line of the *first* occurrence, not the duplicate
/// itself: everything from the original definition onward is mirrored at the
/// second declaration, so the first definition line marks the earliest cut
/// candidate. The rewriter's threshold suppresses this when the first
/// definition sits near the top of the file.
pub fn find_duplicate_export(lines: &[String]) -> Option<usize> {
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = EXPORT_RE.captures(line.trim()) else {
            continue;
        };
        let name = &caps[1];
        if let Some(&first_line) = first_seen.get(name) {
            return Some(first_line);
        }
        first_seen.insert(name.to_string(), idx + 1);
    }

    None
}
