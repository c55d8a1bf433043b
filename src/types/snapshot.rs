//! Published state read by a renderer after every transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Cursor, Phase};

/// Everything a renderer needs to paint the current frame of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
  pub algorithm: String,
  pub phase: Phase,
  pub cells: Vec<Cell>,
  pub cursors: Vec<Cursor>,
  /// Describes the last decision; replaced on every step.
  pub annotation: String,
  pub result: Option<String>,
  /// Steps taken since `start()`.
  pub steps: usize,
}

impl Snapshot {
  /// Cells drawn on one line, e.g. ` 4 >7< (1) [9]`.
  pub fn render_cells(&self) -> String {
    self
      .cells
      .iter()
      .map(|c| c.to_string())
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl fmt::Display for Snapshot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{:>3}] {}", self.steps, self.render_cells())?;
    if !self.cursors.is_empty() {
      let cursors = self
        .cursors
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
      write!(f, "  ({})", cursors)?;
    }
    if !self.annotation.is_empty() {
      write!(f, "  {}", self.annotation)?;
    }
    Ok(())
  }
}
