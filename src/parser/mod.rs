pub mod fields;
pub mod sections;
pub mod summary;

use tracing::debug;

use crate::model::{ReportDocument, ReportSection};

/// Two-pass pipeline: report text → fragments → typed sections, plus the
/// overall assessment read from the untouched text.
pub fn segment(content: &str) -> ReportDocument {
    let sections: Vec<ReportSection> = sections::split_fragments(content)
        .into_iter()
        .enumerate()
        .map(|(idx, fragment)| fields::extract_section(fragment, idx))
        .collect();

    let overall_assessment = summary::overall_assessment(content);
    debug!(
        sections = sections.len(),
        has_summary = overall_assessment.is_some(),
        "segmented report"
    );

    ReportDocument {
        sections,
        overall_assessment,
    }
}

// ── Tests ──
