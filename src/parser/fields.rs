//! Field extraction over a single report fragment.
//!
//! Each field is pulled by its own pattern with its own fallback; no field
//! depends on another having matched.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{ReportSection, Verdict};

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*(.*?)\*\*").unwrap());
static RESULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*Result:\*\*\s*(good|bad)\b").unwrap());
static REASON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\*\*Reason:\*\*\s*(.*)").unwrap());

const EMPHASIS: &str = "**";

pub fn extract_section(fragment: &str, idx: usize) -> ReportSection {
    let heading = heading(fragment).unwrap_or_else(|| {
        debug!(index = idx, "no title marker, using positional heading");
        positional_heading(idx)
    });

    ReportSection {
        heading,
        verdict: verdict(fragment),
        explanation: explanation(fragment),
    }
}

/// `**Title**` at the very start of the fragment. An empty title counts as
/// missing.
pub fn heading(fragment: &str) -> Option<String> {
    TITLE_RE
        .captures(fragment)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

pub fn positional_heading(idx: usize) -> String {
    format!("Section {}", idx + 1)
}

/// First `**Result:**` marker followed by Good or Bad, any case.
pub fn verdict(fragment: &str) -> Option<Verdict> {
    let caps = RESULT_RE.captures(fragment)?;
    Verdict::from_token(&caps[1])
}

/// Text after the first `**Reason:**` marker, or the whole fragment when the
/// marker is missing. Emphasis markers are removed either way.
pub fn explanation(fragment: &str) -> String {
    let body = match REASON_RE.captures(fragment) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).trim(),
        None => fragment.trim(),
    };
    strip_emphasis(body)
}

pub fn strip_emphasis(text: &str) -> String {
    text.replace(EMPHASIS, "")
}

// ── Tests ──
