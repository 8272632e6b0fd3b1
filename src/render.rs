//! Terminal rendering of parsed reports and previews.

use crate::model::{AnalysisResponse, PreviewTable, ReportDocument, ReportSection};

const NO_ANALYSIS: &str = "No analysis yet";
const NO_PREVIEW: &str = "No preview available.";
const MAX_CELL_WIDTH: usize = 24;
const INDENT: &str = "    ";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    /// Leading sections that show their explanation.
    pub expanded: usize,
    pub expand_all: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            title: "Report".to_string(),
            expanded: 2,
            expand_all: false,
        }
    }
}

pub fn render_report(content: &str, doc: &ReportDocument, opts: &RenderOptions) -> String {
    if content.trim().is_empty() {
        return format!("{}\n", NO_ANALYSIS);
    }

    let mut out = String::new();
    push_title(&mut out, &opts.title, '=');

    if doc.sections.is_empty() {
        out.push_str(content.trim());
        out.push('\n');
    }

    for (idx, section) in doc.sections.iter().enumerate() {
        let expanded = opts.expand_all || idx < opts.expanded;
        push_section(&mut out, section, expanded);
    }

    if let Some(summary) = &doc.overall_assessment {
        out.push('\n');
        push_title(&mut out, "Overall Assessment", '-');
        out.push_str(summary);
        out.push('\n');
    }
    out
}

fn push_title(out: &mut String, title: &str, underline: char) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&underline.to_string().repeat(title.chars().count()));
    out.push('\n');
}

fn push_section(out: &mut String, section: &ReportSection, expanded: bool) {
    out.push_str(if expanded { "[-] " } else { "[+] " });
    out.push_str(&section.heading);
    if let Some(verdict) = section.verdict {
        out.push_str(&format!(" [{}]", verdict));
    }
    out.push('\n');

    if expanded {
        for line in section.explanation.lines() {
            if line.trim().is_empty() {
                out.push('\n');
            } else {
                out.push_str(INDENT);
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }
    }
}

/// Top-level website verdict line for a URL analysis payload.
pub fn website_banner(resp: &AnalysisResponse) -> String {
    let mut out = if resp.is_good {
        "Good Website ✅\n".to_string()
    } else {
        "Bad Website ❌\n".to_string()
    };
    if resp.raw.is_some() {
        out.push_str("(raw AI response omitted for readability)\n");
    }
    out
}

pub fn render_preview(table: &PreviewTable) -> String {
    if table.rows.is_empty() {
        return format!("{}\n", NO_PREVIEW);
    }

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            table
                .rows
                .iter()
                .filter_map(|r| r.values().nth(i))
                .map(|v| v.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let mut out = format!("Preview (first {} rows)\n", table.rows.len());
    out.push_str(&format_line(table.headers.iter().map(String::as_str), &widths));
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &table.rows {
        out.push_str(&format_line(row.values(), &widths));
    }
    out
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", truncate(cell, *width), width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}\n", line.trim_end())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

// ── Tests ──
