use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::InputError;
use crate::model::AnalysisResponse;

const REPORT_EXTENSIONS: &[&str] = &["md", "txt"];

/// Read a report from `path`, or from stdin when the path is absent or `-`.
pub fn read_report(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(p) if p != Path::new("-") => read_file(p),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            Ok(buf)
        }
    }
}

pub fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn decode_response(text: &str) -> Result<AnalysisResponse, InputError> {
    Ok(serde_json::from_str(text)?)
}

/// Report files directly inside `dir`, sorted by path.
pub fn report_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let entries = fs::read_dir(dir).map_err(|source| InputError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_report(p))
        .collect();
    if files.is_empty() {
        return Err(InputError::NoReports {
            path: dir.to_path_buf(),
        });
    }
    files.sort();
    Ok(files)
}

fn is_report(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| REPORT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
