//! Textual puzzle ingestion.

use soluko_core::{DigitGrid, GridParseError};

/// Converts raw text lines into a grid, one line per row.
///
/// Digits stand for themselves; `0`, `.`, and `_` mark unknown cells; blank
/// lines and whitespace inside a line are skipped. The grid side is the
/// number of non-blank lines.
///
/// # Errors
///
/// Returns [`GridParseError`] for unexpected characters or a shape that does
/// not form a supported grid.
///
/// # Examples
///
/// ```
/// use soluko_specimen::parse_lines;
///
/// let grid = parse_lines(&["12.4", "..3.", "4.1.", ".3.2"])?;
/// assert_eq!(grid.geometry().dim(), 4);
/// assert_eq!(grid.unknown_count(), 8);
/// # Ok::<(), soluko_core::GridParseError>(())
/// ```
#[expect(clippy::cast_possible_truncation)]
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<DigitGrid, GridParseError> {
    let mut rows = Vec::new();
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for c in line.chars() {
            match c {
                '1'..='9' => row.push(c as u8 - b'0'),
                '0' | '.' | '_' => row.push(0),
                c if c.is_whitespace() => {}
                c => return Err(GridParseError::UnexpectedChar { found: c }),
            }
        }
        rows.push(row);
    }
    DigitGrid::from_rows(&rows)
}

/// Parses a whole puzzle text in one go.
///
/// Equivalent to `text.parse::<DigitGrid>()`; the row split is inferred from
/// the cell count rather than from line breaks.
///
/// # Errors
///
/// Returns [`GridParseError`] for unexpected characters or an unsupported
/// cell count.
pub fn parse_text(text: &str) -> Result<DigitGrid, GridParseError> {
    text.parse()
}
