//! Bounded CSV preview: header line plus the first few data lines.
//!
//! Not a CSV parser. Quoted fields, embedded newlines and other delimiters are
//! not handled; the preview is only meant to show what a file roughly holds.

use tracing::debug;

use crate::model::{PreviewRow, PreviewTable};

/// Header line plus seven data lines.
pub const PREVIEW_LINE_LIMIT: usize = 8;
const DELIMITER: char = ',';

#[derive(Debug, Clone, Copy)]
pub struct PreviewParser {
    max_lines: usize,
}

impl Default for PreviewParser {
    fn default() -> Self {
        PreviewParser {
            max_lines: PREVIEW_LINE_LIMIT,
        }
    }
}

impl PreviewParser {
    /// Line budget including the header, never above `PREVIEW_LINE_LIMIT`.
    pub fn with_max_lines(max_lines: usize) -> Self {
        PreviewParser {
            max_lines: max_lines.clamp(1, PREVIEW_LINE_LIMIT),
        }
    }

    pub fn parse(&self, raw: &str) -> PreviewTable {
        let mut lines = raw
            .lines()
            .filter(|l| !l.is_empty())
            .take(self.max_lines);

        let Some(header_line) = lines.next() else {
            return PreviewTable::default();
        };
        let columns = header_columns(header_line);
        let rows: Vec<PreviewRow> = lines.map(|line| build_row(&columns, line)).collect();

        debug!(columns = columns.len(), rows = rows.len(), "built preview");
        PreviewTable {
            headers: columns.into_iter().map(|(name, _)| name).collect(),
            rows,
        }
    }
}

pub fn preview_rows(raw: &str) -> PreviewTable {
    PreviewParser::default().parse(raw)
}

/// Normalized header names with the cell index each one reads from. A
/// repeated name keeps its first position but takes the later column.
fn header_columns(line: &str) -> Vec<(String, usize)> {
    let mut columns: Vec<(String, usize)> = Vec::new();
    for (idx, name) in line
        .split(DELIMITER)
        .map(|h| h.trim().to_lowercase())
        .enumerate()
    {
        match columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some(column) => column.1 = idx,
            None => columns.push((name, idx)),
        }
    }
    columns
}

fn build_row(columns: &[(String, usize)], line: &str) -> PreviewRow {
    let cells: Vec<&str> = line.split(DELIMITER).collect();
    PreviewRow::new(
        columns
            .iter()
            .map(|(name, idx)| (name.clone(), cells.get(*idx).copied().unwrap_or("").to_string()))
            .collect(),
    )
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.csv", name)).unwrap()
    }

    #[test]
    fn name_age() {
        let table = preview_rows("Name,Age\nAlice,30\nBob");
        assert_eq!(table.headers, vec!["name", "age"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("name"), Some("Alice"));
        assert_eq!(table.rows[0].get("age"), Some("30"));
        assert_eq!(table.rows[1].get("name"), Some("Bob"));
        assert_eq!(table.rows[1].get("age"), Some(""));
    }

    #[test]
    fn empty_input() {
        assert_eq!(preview_rows(""), PreviewTable::default());
        assert_eq!(preview_rows("\n\n\r\n"), PreviewTable::default());
    }

    #[test]
    fn whitespace_line_is_a_row() {
        let table = preview_rows("Name,Age\n   \nBob,4");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("name"), Some("   "));
        assert_eq!(table.rows[0].get("age"), Some(""));
        assert_eq!(table.rows[1].get("name"), Some("Bob"));
    }

    #[test]
    fn whitespace_lines_count_toward_cap() {
        let table = preview_rows("h\n \n \n \n \n \n \n \nlate");
        assert_eq!(table.rows.len(), 7);
        assert!(table.rows.iter().all(|r| r.get("h") == Some(" ")));
    }

    #[test]
    fn header_only() {
        let table = preview_rows(" URL , Status \n");
        assert_eq!(table.headers, vec!["url", "status"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn extra_cells_dropped() {
        let table = preview_rows("a,b\n1,2,3,4");
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[0].values().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn blank_lines_skipped_before_cap() {
        let mut raw = String::from("h\n\n");
        for i in 0..10 {
            raw.push_str(&format!("{}\n\n", i));
        }
        let table = preview_rows(&raw);
        assert_eq!(table.rows.len(), 7);
        assert_eq!(table.rows[6].get("h"), Some("6"));
    }

    #[test]
    fn crlf_lines() {
        let table = preview_rows("Name,Age\r\nAlice,30\r\n");
        assert_eq!(table.headers, vec!["name", "age"]);
        assert_eq!(table.rows[0].get("age"), Some("30"));
    }

    #[test]
    fn data_cells_not_trimmed() {
        let table = preview_rows("a,b\n x , y");
        assert_eq!(table.rows[0].get("a"), Some(" x "));
    }

    #[test]
    fn duplicate_headers_unique_keys() {
        let table = preview_rows("id,Name,name\n1,first,second\n2");
        assert_eq!(table.headers, vec!["id", "name"]);
        assert_eq!(table.rows[0].get("name"), Some("second"));
        assert_eq!(table.rows[1].get("name"), Some(""));
    }

    #[test]
    fn every_row_has_header_keys() {
        let table = preview_rows(&fixture("websites"));
        assert_eq!(table.headers, vec!["url", "category", "notes"]);
        assert_eq!(table.rows.len(), 7);
        for row in &table.rows {
            assert_eq!(row.keys().collect::<Vec<_>>(), table.headers);
        }
    }

    #[test]
    fn smaller_line_budget() {
        let table = PreviewParser::with_max_lines(3).parse(&fixture("websites"));
        assert_eq!(table.rows.len(), 2);
        let capped = PreviewParser::with_max_lines(100).parse(&fixture("websites"));
        assert_eq!(capped.rows.len(), 7);
    }
}
