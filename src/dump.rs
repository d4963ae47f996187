//! Hex-dump line formatting.
//!
//! Lines follow the familiar `xxd` layout:
//!
//! ```text
//! 0000000: 4865 6c6c 6f2c 2077 6f72 6c64 210a       Hello,.world!.
//! ```
//!
//! The hex panel is padded to a fixed width derived from the chunk size, so the
//! ASCII gutter stays in the same column even when the last chunk is short.

/// Hex digits per group in the hex panel.
const GROUP_DIGITS: usize = 4;

/// Terminal columns consumed per byte of a dump line, on average.
const COLUMNS_PER_BYTE: f64 = 4.3;

/// Number of bytes shown per dump line for a terminal `columns` wide.
///
/// Always even, so the hex panel holds whole 4-digit groups, and never below 2.
pub fn chunk_size(columns: u16) -> usize {
    let size = (f64::from(columns) / COLUMNS_PER_BYTE) as usize;
    (size & !1).max(2)
}

/// Width of the hex panel for a given chunk size, grouping spaces included.
pub fn panel_width(chunk_size: usize) -> usize {
    let digits = chunk_size * 2;
    digits + (digits / GROUP_DIGITS).saturating_sub(1)
}

/// Formats one dump line for `bytes`, the `line_offset`-th chunk of the input.
pub fn format_line(bytes: &[u8], line_offset: usize, chunk_size: usize) -> String {
    let encoded = hex::encode(bytes);
    let grouped = encoded
        .as_bytes()
        .chunks(GROUP_DIGITS)
        .map(|group| std::str::from_utf8(group).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ");
    let gutter: String = bytes.iter().copied().map(printable).collect();
    format!(
        "{:07x}: {:<width$}  {}",
        line_offset * chunk_size,
        grouped,
        gutter,
        width = panel_width(chunk_size)
    )
}

fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() {
        byte as char
    } else {
        '.'
    }
}
