//! Plain text coordinate list used to persist patterns.
//!
//! ```text
//! # Pattern saved at 2024-05-01 12:00:00
//! 1,0
//! 2,1
//! ```
//!
//! Lines starting with `#` (after leading whitespace) and blank lines are
//! ignored when reading. Every other line must hold exactly two
//! comma-separated base-10 integers.

use super::Coord;
use crate::error::PatternError;

/// Header written by a save, stamped with the local time.
pub fn timestamp_header() -> String {
    format!(
        "Pattern saved at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Write `cells` as a pattern file body. Cells are sorted so output is
/// stable for a given set.
pub fn encode<I>(cells: I, header: &str) -> String
where
    I: IntoIterator<Item = Coord>,
{
    let mut sorted: Vec<Coord> = cells.into_iter().collect();
    sorted.sort_unstable();

    let mut out = String::with_capacity(header.len() + 3 + sorted.len() * 8);
    out.push_str("# ");
    out.push_str(header);
    out.push('\n');
    for cell in sorted {
        out.push_str(&cell.to_string());
        out.push('\n');
    }
    out
}

/// Parse a whole pattern file. The first malformed line fails the call;
/// nothing is returned for the lines before it.
pub fn decode(text: &str) -> Result<Vec<Coord>, PatternError> {
    text.lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| parse_line(line_no, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<Coord, PatternError> {
    let fail = |reason: String| PatternError::Parse {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    let [x, y] = tokens.as_slice() else {
        return Err(fail(format!("expected 2 comma-separated values, found {}", tokens.len())));
    };

    let x = x.parse::<i32>().map_err(|e| fail(format!("bad x coordinate: {e}")))?;
    let y = y.parse::<i32>().map_err(|e| fail(format!("bad y coordinate: {e}")))?;
    Ok(Coord::new(x, y))
}
