use std::io;
use std::path::PathBuf;

/// Failures at the I/O edge. The parsers themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),
    #[error("failed to decode analysis response: {0}")]
    Response(#[from] serde_json::Error),
    #[error("no report files (.md, .txt) in {path}", path = path.display())]
    NoReports { path: PathBuf },
}
