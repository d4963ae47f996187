//! Output formatting for file listings.
//!
//! Provides functions to format the list of files scheduled for a show, either
//! as the banner lines the scroller prints or as JSON.

use crate::{FileListing, RenderMode, ScrollError};
use std::path::Path;

/// Supported listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
}

/// Formats the listing into a string.
///
/// # Errors
///
/// JSON output fails for paths that are not valid UTF-8.
pub fn format_listing(
    listing: &[FileListing],
    format: ListFormat,
    pretty: bool,
) -> Result<String, ScrollError> {
    match format {
        ListFormat::Text => Ok(format_text(listing)),
        ListFormat::Json => format_json(listing, pretty),
    }
}

/// The line announcing a file: `### [<path> <mimetype>] ### <mode>`.
pub fn banner(path: &Path, mimetype: Option<&str>, mode: RenderMode) -> String {
    format!(
        "### [{} {}] ### {}",
        path.display(),
        mimetype.unwrap_or("None"),
        mode
    )
}

// ----------------------- Internal formatting -----------------------

fn format_text(listing: &[FileListing]) -> String {
    let mut out = String::with_capacity(listing.len() * 64);
    for entry in listing {
        out.push_str(&banner(&entry.path, entry.mimetype.as_deref(), entry.mode));
        out.push('\n');
    }
    out
}

fn format_json(listing: &[FileListing], pretty: bool) -> Result<String, ScrollError> {
    let json = if pretty {
        serde_json::to_string_pretty(listing)
    } else {
        serde_json::to_string(listing)
    };
    let mut out = json?;
    out.push('\n');
    Ok(out)
}
