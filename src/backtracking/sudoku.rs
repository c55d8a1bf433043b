//! Sudoku: fill a 9x9 grid so each row, column and box holds 1-9 once.
//!
//! The solver always branches on the blank with the fewest candidates, so a
//! cell with none ends the branch at once. Blank-heavy grids have
//! astronomically many completions, so generation stops after
//! [SOLUTION_CAP] solutions or when the node budget runs out.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Budget, Generation, Generator};
use crate::error::ConfigError;
use crate::input::RawInput;

pub const CELLS: usize = 81;

/// Most solutions kept for one puzzle.
pub const SOLUTION_CAP: usize = 32;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sudoku;

/// Row-major digits, `0` for blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
  pub cells: Vec<u8>,
}

impl fmt::Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (row, chunk) in self.cells.chunks(9).enumerate() {
      if row > 0 {
        writeln!(f)?;
      }
      for (col, d) in chunk.iter().enumerate() {
        if col > 0 {
          write!(f, "{}", if col % 3 == 0 { " | " } else { " " })?;
        }
        match d {
          0 => write!(f, ".")?,
          d => write!(f, "{}", d)?,
        }
      }
    }
    Ok(())
  }
}

const DIGITS: u16 = 0b11_1111_1110;

fn box_of(idx: usize) -> usize {
  (idx / 27) * 3 + (idx % 9) / 3
}

/// Used-digit bitmasks per row, column and box.
#[derive(Debug, Clone, Copy, Default)]
struct Masks {
  rows: [u16; 9],
  cols: [u16; 9],
  boxes: [u16; 9],
}

impl Masks {
  fn allows(&self, idx: usize, d: u8) -> bool {
    let bit = 1 << d;
    (self.rows[idx / 9] | self.cols[idx % 9] | self.boxes[box_of(idx)]) & bit == 0
  }

  /// Digits still allowed at `idx`, as bits `1..=9`.
  fn free(&self, idx: usize) -> u16 {
    !(self.rows[idx / 9] | self.cols[idx % 9] | self.boxes[box_of(idx)]) & DIGITS
  }

  fn toggle(&mut self, idx: usize, d: u8) {
    let bit = 1 << d;
    self.rows[idx / 9] ^= bit;
    self.cols[idx % 9] ^= bit;
    self.boxes[box_of(idx)] ^= bit;
  }
}

/// The blank with the fewest allowed digits and its candidates, or `None`
/// when the grid is full.
fn most_constrained(cells: &[u8], masks: &Masks) -> Option<(usize, u16)> {
  let mut best: Option<(usize, u16)> = None;
  for idx in (0..cells.len()).filter(|&idx| cells[idx] == 0) {
    let free = masks.free(idx);
    if best.is_none_or(|(_, b)| free.count_ones() < b.count_ones()) {
      best = Some((idx, free));
      if free == 0 {
        break;
      }
    }
  }
  best
}

fn solve(cells: &mut [u8], masks: &mut Masks, budget: &mut Budget, out: &mut Vec<Grid>) {
  if out.len() >= SOLUTION_CAP || !budget.spend() {
    return;
  }
  let Some((idx, free)) = most_constrained(cells, masks) else {
    out.push(Grid {
      cells: cells.to_vec(),
    });
    return;
  };
  for d in (1..=9u8).filter(|&d| free & (1u16 << d) != 0) {
    cells[idx] = d;
    masks.toggle(idx, d);
    solve(cells, masks, budget, out);
    masks.toggle(idx, d);
    cells[idx] = 0;
  }
}

impl Generator for Sudoku {
  type Params = Grid;
  type Solution = Grid;

  fn name(&self) -> &'static str {
    "sudoku"
  }

  /// Reads 81 cells from the values field: digits `1-9`, with `0` or `.` for
  /// blanks. Whitespace, `,` and `;` are ignored so rows can be separated.
  fn parse(&self, raw: &RawInput) -> Result<Grid, ConfigError> {
    let mut cells = Vec::with_capacity(CELLS);
    for c in raw
      .values
      .chars()
      .filter(|c| !c.is_whitespace() && *c != ',' && *c != ';')
    {
      let d = match c {
        '.' => 0,
        c => c
          .to_digit(10)
          .ok_or_else(|| ConfigError::invalid(c.to_string(), "digit or '.'"))? as u8,
      };
      cells.push(d);
    }
    if cells.len() != CELLS {
      return Err(ConfigError::out_of_bounds(
        "sudoku cells",
        format!("expected {}, got {}", CELLS, cells.len()),
      ));
    }
    let mut masks = Masks::default();
    for (idx, &d) in cells.iter().enumerate().filter(|(_, d)| **d != 0) {
      if !masks.allows(idx, d) {
        return Err(ConfigError::out_of_bounds(
          "sudoku clue",
          format!("{} at row {}, column {} repeats", d, idx / 9 + 1, idx % 9 + 1),
        ));
      }
      masks.toggle(idx, d);
    }
    Ok(Grid { cells })
  }

  fn generate_all(&self, puzzle: &Grid) -> Vec<Grid> {
    self.generate(puzzle).solutions
  }

  #[instrument(level = "trace", skip(self, puzzle))]
  fn generate(&self, puzzle: &Grid) -> Generation<Grid> {
    let mut masks = Masks::default();
    for (idx, &d) in puzzle.cells.iter().enumerate().filter(|(_, d)| **d != 0) {
      masks.toggle(idx, d);
    }
    let mut cells = puzzle.cells.clone();
    let mut budget = Budget::new();
    let mut out = Vec::new();
    solve(&mut cells, &mut masks, &mut budget, &mut out);
    let complete = out.len() < SOLUTION_CAP && !budget.is_exhausted();
    if !complete {
      debug!(solutions = out.len(), cap = SOLUTION_CAP, "search stopped early");
    }
    Generation {
      solutions: out,
      complete,
    }
  }
}
