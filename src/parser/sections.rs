use std::sync::LazyLock;

use regex::Regex;

/// `### ` heading marker the generator uses between sections.
static SECTION_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"###\s+").unwrap());

/// Split a report into raw section fragments, in order of appearance.
///
/// Text before the first marker is a fragment of its own, and a report with no
/// marker at all is a single fragment. Fragments that are blank after trimming
/// are dropped, so empty input yields nothing.
pub fn split_fragments(content: &str) -> Vec<&str> {
    SECTION_MARKER_RE
        .split(content)
        .filter(|fragment| !fragment.trim().is_empty())
        .collect()
}

// ── Tests ──
