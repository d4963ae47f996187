use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid UTF-8 in {path}")]
    InvalidUtf8 { path: PathBuf },
    #[error("Interrupted")]
    Interrupted,
}
impl ScrollError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrollError::Io {
            path: path.into(),
            source,
        }
    }
}
impl From<std::io::Error> for ScrollError {
    fn from(source: std::io::Error) -> Self {
        ScrollError::Output(source)
    }
}
