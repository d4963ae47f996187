use crate::options::DEFAULT_COLUMNS;

/// Width of the attached terminal in columns.
///
/// Falls back to [`DEFAULT_COLUMNS`] when output is not a terminal or the size
/// cannot be queried.
pub fn terminal_columns() -> u16 {
    match crossterm::terminal::size() {
        Ok((width, _)) if width > 0 => width,
        _ => DEFAULT_COLUMNS,
    }
}
