use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::input;
use crate::model::ReportDocument;
use crate::parser;

const CHUNK_SIZE: usize = 500;

#[derive(Debug, Serialize)]
pub struct BatchRecord {
    pub file: String,
    pub processed_at: DateTime<Utc>,
    pub document: ReportDocument,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub reports: usize,
    pub skipped: usize,
    pub sections: usize,
    pub good: usize,
    pub bad: usize,
    pub with_summary: usize,
}

impl BatchStats {
    fn add(&mut self, doc: &ReportDocument) {
        let (good, bad) = doc.verdict_counts();
        self.reports += 1;
        self.sections += doc.sections.len();
        self.good += good;
        self.bad += bad;
        if doc.overall_assessment.is_some() {
            self.with_summary += 1;
        }
    }

    pub fn log(&self) {
        info!(
            "Segmented {} reports ({} skipped): {} sections, {} good, {} bad, {} with summary",
            self.reports, self.skipped, self.sections, self.good, self.bad, self.with_summary,
        );
    }
}

/// Segment every file in parallel and write one JSON record per line.
/// Unreadable files are logged and skipped.
pub fn run(paths: &[PathBuf], out: &mut dyn Write) -> Result<BatchStats> {
    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut stats = BatchStats::default();
    for chunk in paths.chunks(CHUNK_SIZE) {
        let results: Vec<_> = chunk.par_iter().map(|p| process_file(p)).collect();

        for record in results {
            match record {
                Some(record) => {
                    stats.add(&record.document);
                    serde_json::to_writer(&mut *out, &record)?;
                    writeln!(out)?;
                }
                None => stats.skipped += 1,
            }
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    out.flush()?;
    Ok(stats)
}

fn process_file(path: &Path) -> Option<BatchRecord> {
    let content = match input::read_file(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            return None;
        }
    };
    Some(BatchRecord {
        file: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        processed_at: Utc::now(),
        document: parser::segment(&content),
    })
}
