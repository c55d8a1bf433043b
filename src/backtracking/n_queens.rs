//! N-Queens: every placement of N non-attacking queens.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::Generator;
use crate::error::ConfigError;
use crate::input::{RawInput, check_range, require_int};

pub const BOARD_SIZE: RangeInclusive<i64> = 1..=10;

#[derive(Debug, Clone, Copy, Default)]
pub struct NQueens;

/// `columns[row]` is the column of the queen on that row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
  pub columns: Vec<usize>,
}

impl fmt::Display for Placement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let n = self.columns.len();
    for (row, &col) in self.columns.iter().enumerate() {
      let line: Vec<&str> = (0..n).map(|c| if c == col { "Q" } else { "." }).collect();
      write!(f, "{}", line.join(" "))?;
      if row + 1 < n {
        writeln!(f)?;
      }
    }
    Ok(())
  }
}

fn place(n: usize, row: usize, columns: &mut Vec<usize>, out: &mut Vec<Placement>) {
  if row == n {
    out.push(Placement {
      columns: columns.clone(),
    });
    return;
  }
  for col in 0..n {
    let safe = columns
      .iter()
      .enumerate()
      .all(|(r, &c)| c != col && r.abs_diff(row) != c.abs_diff(col));
    if safe {
      columns.push(col);
      place(n, row + 1, columns, out);
      columns.pop();
    }
  }
}

impl Generator for NQueens {
  type Params = usize;
  type Solution = Placement;

  fn name(&self) -> &'static str {
    "n-queens"
  }

  /// Reads the board size from the `n` parameter.
  fn parse(&self, raw: &RawInput) -> Result<usize, ConfigError> {
    let n = require_int(raw, "n")?;
    check_range("n", n, BOARD_SIZE)?;
    Ok(n as usize)
  }

  #[instrument(level = "trace", skip(self))]
  fn generate_all(&self, n: &usize) -> Vec<Placement> {
    let mut out = Vec::new();
    place(*n, 0, &mut Vec::with_capacity(*n), &mut out);
    out
  }
}
