use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How the content of a file is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Decoded UTF-8, line by line.
    Text,
    /// A hex dump, one chunk of bytes per line.
    Hex,
}

impl RenderMode {
    /// The following mode in the fixed `Text -> Hex -> Text` cycle.
    pub fn next(self) -> Self {
        match self {
            RenderMode::Text => RenderMode::Hex,
            RenderMode::Hex => RenderMode::Text,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Banner labels predate the enum names and are kept stable.
        match self {
            RenderMode::Text => f.write_str("print"),
            RenderMode::Hex => f.write_str("hex"),
        }
    }
}

/// How each line reaches the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// The whole line at once.
    Normal,
    /// One character at a time.
    Typewriter,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStyle::Normal => f.write_str("normal"),
            OutputStyle::Typewriter => f.write_str("typewriter"),
        }
    }
}

/// Why a file was left out of the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    Directory,
    Unreadable,
    InvalidUtf8,
}

/// Result of rendering a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Rendered,
    Skipped(SkipReason),
}

/// One line of the file listing: a path with its detected type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    /// The canonical path of the file.
    pub path: PathBuf,
    /// The mimetype guessed from the file name, if any.
    pub mimetype: Option<String>,
    /// The mode the file would be rendered in.
    pub mode: RenderMode,
}

/// Totals of a finished (or interrupted) run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Files rendered to the end.
    pub rendered: usize,
    /// Files abandoned because they were directories, unreadable or not UTF-8.
    pub skipped: usize,
    /// Whether the run was cut short by a cancellation.
    pub interrupted: bool,
}
