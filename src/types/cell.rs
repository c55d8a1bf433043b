//! Per-position classification read by the renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How one input position should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
  #[default]
  Unchecked,
  /// The position the algorithm is acting on right now.
  Active,
  /// The other side of the current comparison.
  Compared,
  Pivot,
  Sorted,
  Matched,
  /// Ruled out; the algorithm will not look here again.
  Eliminated,
  InWindow,
  Candidate,
}

impl CellState {
  /// Left and right markers used when drawing a cell as text.
  pub fn markers(self) -> (&'static str, &'static str) {
    match self {
      CellState::Unchecked => (" ", " "),
      CellState::Active => (">", "<"),
      CellState::Compared => ("(", ")"),
      CellState::Pivot => ("{", "}"),
      CellState::Sorted => ("[", "]"),
      CellState::Matched => ("*", "*"),
      CellState::Eliminated => ("~", "~"),
      CellState::InWindow => ("|", "|"),
      CellState::Candidate => ("?", "?"),
    }
  }
}

/// One rendered position: its label and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
  pub label: String,
  pub state: CellState,
}

impl Cell {
  pub fn new(label: impl ToString, state: CellState) -> Self {
    Self {
      label: label.to_string(),
      state,
    }
  }
}

impl fmt::Display for Cell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (l, r) = self.state.markers();
    write!(f, "{}{}{}", l, self.label, r)
  }
}
