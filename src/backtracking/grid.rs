//! Row-separated grid parsing and 4-way moves, shared by the maze and word search.

use std::ops::RangeInclusive;

use crate::error::ConfigError;
use crate::input::check_len;

/// Moves in search order: down, left, right, up.
pub const MOVES: [(char, isize, isize); 4] = [('D', 1, 0), ('L', 0, -1), ('R', 0, 1), ('U', -1, 0)];

/// Splits `raw` into rows on `;` or newlines; each row keeps its
/// non-separator characters (whitespace and `,` are dropped).
pub(crate) fn parse_rows(
  raw: &str,
  what: &'static str,
  dims: RangeInclusive<usize>,
) -> Result<Vec<Vec<char>>, ConfigError> {
  let rows: Vec<Vec<char>> = raw
    .split(|c| c == ';' || c == '\n')
    .map(|row| {
      row
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>()
    })
    .filter(|row| !row.is_empty())
    .collect();
  check_len(what, rows.len(), dims.clone())?;
  let width = rows[0].len();
  check_len(what, width, dims)?;
  if let Some(row) = rows.iter().find(|r| r.len() != width) {
    return Err(ConfigError::out_of_bounds(
      what,
      format!("rows must all have {} cells, found one with {}", width, row.len()),
    ));
  }
  Ok(rows)
}

/// Neighbour of `(row, col)` after `(dr, dc)`, if it stays on a `rows x cols` board.
pub(crate) fn offset(
  (row, col): (usize, usize),
  (dr, dc): (isize, isize),
  rows: usize,
  cols: usize,
) -> Option<(usize, usize)> {
  let r = row.checked_add_signed(dr)?;
  let c = col.checked_add_signed(dc)?;
  (r < rows && c < cols).then_some((r, c))
}
