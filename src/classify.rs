//! Text-or-hex classification of files.
//!
//! A file is shown as text when any of the following holds, checked in order:
//!
//! 1. its name without extension is a well-known text file name (`README`, `Makefile`, ...),
//! 2. its mimetype or extension is on the text allow-lists,
//! 3. its mimetype belongs to the `text/*` family,
//! 4. its first line is a shebang (`#!`).
//!
//! Everything else is shown as a hex dump. Classification never fails: a file
//! that cannot be probed is simply not text.

use crate::error::ScrollError;
use crate::types::RenderMode;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const TEXT_MIMETYPES: &[&str] = &[
    "application/javascript",
    "application/json",
    "application/x-httpd-php",
    "application/x-sh",
    "application/xml",
];

const TEXT_EXTENSIONS: &[&str] = &[
    "1", "asm", "aux", "awk", "bat", "cfg", "conf", "ini", "json", "log", "lua", "md", "php",
    "phtml", "rst", "sbt", "sql", "svg", "toml", "twig", "yaml", "yml",
];

const TEXT_FILENAMES: &[&str] = &["makefile", "readme", "changelog", "license"];

/// Upper bound on the bytes read while looking for a shebang.
const PROBE_LIMIT: u64 = 4096;

/// Source of mimetypes for paths.
pub trait MimeLookup {
    fn guess(&self, path: &Path) -> Option<String>;
}

/// Mimetype lookup by file extension, backed by `mime_guess`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeGuess;

impl MimeLookup for MimeGuess {
    fn guess(&self, path: &Path) -> Option<String> {
        mime_guess::from_path(path).first_raw().map(str::to_owned)
    }
}

impl<F> MimeLookup for F
where
    F: Fn(&Path) -> Option<String>,
{
    fn guess(&self, path: &Path) -> Option<String> {
        self(path)
    }
}

/// Everything known about a file when deciding how to render it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    pub mimetype: Option<String>,
    /// Extension without the leading dot, empty when there is none.
    pub extension: String,
    /// File name without its extension.
    pub stem: String,
    pub first_line: Option<String>,
}

impl Evidence {
    /// Gathers the name-based evidence for `path`. The first line is not read.
    pub fn new(mimetype: Option<&str>, path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            mimetype: mimetype.map(str::to_owned),
            extension,
            stem,
            first_line: None,
        }
    }

    pub fn with_first_line(mut self, line: Option<String>) -> Self {
        self.first_line = line;
        self
    }

    /// Decides from names and mimetype alone; `None` when content must be consulted.
    pub fn decide_from_names(&self) -> Option<RenderMode> {
        let stem = self.stem.to_lowercase();
        if TEXT_FILENAMES.contains(&stem.as_str()) {
            return Some(RenderMode::Text);
        }
        let mimetype = self.mimetype.as_deref();
        if mimetype.is_some_and(|m| TEXT_MIMETYPES.contains(&m))
            || TEXT_EXTENSIONS.contains(&self.extension.as_str())
        {
            return Some(RenderMode::Text);
        }
        if mimetype.is_some_and(|m| m.starts_with("text")) {
            return Some(RenderMode::Text);
        }
        None
    }

    pub fn decide(&self) -> RenderMode {
        if let Some(mode) = self.decide_from_names() {
            return mode;
        }
        match &self.first_line {
            Some(line) if line.starts_with("#!") => RenderMode::Text,
            _ => RenderMode::Hex,
        }
    }
}

/// Picks the render mode for `path` given its declared mimetype.
pub fn classify(mimetype: Option<&str>, path: &Path) -> RenderMode {
    let evidence = Evidence::new(mimetype, path);
    if let Some(mode) = evidence.decide_from_names() {
        return mode;
    }
    let first_line = match read_first_line(path) {
        Ok(line) => Some(line),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Shebang probe failed: {}", _e);
            None
        }
    };
    evidence.with_first_line(first_line).decide()
}

/// Reads the first line of `path` as UTF-8, looking at no more than [`PROBE_LIMIT`] bytes.
pub fn read_first_line(path: &Path) -> Result<String, ScrollError> {
    let file = File::open(path).map_err(|e| ScrollError::io(path, e))?;
    let mut line = Vec::new();
    BufReader::new(file)
        .take(PROBE_LIMIT)
        .read_until(b'\n', &mut line)
        .map_err(|e| ScrollError::io(path, e))?;
    match String::from_utf8(line) {
        Ok(line) => Ok(line),
        // A multi-byte character cut off by the probe limit is not an error.
        Err(e) if e.utf8_error().error_len().is_none() => {
            let valid = e.utf8_error().valid_up_to();
            let mut bytes = e.into_bytes();
            bytes.truncate(valid);
            String::from_utf8(bytes).map_err(|_| ScrollError::InvalidUtf8 { path: path.into() })
        }
        Err(_) => Err(ScrollError::InvalidUtf8 { path: path.into() }),
    }
}
