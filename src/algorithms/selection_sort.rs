//! Selection sort: one comparison against the running minimum per step; the
//! swap into place happens on the step that finishes a scan.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSortState {
  pub values: Vec<i64>,
  /// Slot being filled; everything before it is final.
  pub i: usize,
  pub j: usize,
  pub min: usize,
  pub done: bool,
}

impl Algorithm for SelectionSort {
  type Input = Vec<i64>;
  type State = SelectionSortState;

  fn name(&self) -> &'static str {
    "selection-sort"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_bounded_values(&raw.values, DEFAULT_LEN)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = SelectionSortState {
      values: input.clone(),
      i: 0,
      j: 1,
      min: 0,
      done: false,
    };
    (state, format!("Find the minimum for slot 0, starting with a[0]={}", input[0]))
  }

  #[instrument(level = "trace", skip(self, _input))]
  fn step(&self, _input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let n = s.values.len();
    let (candidate, current) = (s.values[s.j], s.values[s.min]);
    let mut annotation = if candidate < current {
      s.min = s.j;
      format!("a[{}]={} < min {}: new minimum", s.j, candidate, current)
    } else {
      format!("a[{}]={} >= min {}", s.j, candidate, current)
    };
    s.j += 1;
    if s.j < n {
      return StepOutcome::Continue(annotation);
    }
    if s.min != s.i {
      annotation.push_str(&format!("; swap a[{}] and a[{}]", s.i, s.min));
      s.values.swap(s.i, s.min);
    } else {
      annotation.push_str(&format!("; a[{}] already in place", s.i));
    }
    s.i += 1;
    if s.i + 1 >= n {
      s.done = true;
      return StepOutcome::Completed(RunResult::Sorted {
        values: s.values.clone(),
      });
    }
    s.min = s.i;
    s.j = s.i + 1;
    StepOutcome::Continue(annotation)
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    let Some(s) = state else {
      return input.iter().map(|v| Cell::new(v, CellState::Unchecked)).collect();
    };
    s.values
      .iter()
      .enumerate()
      .map(|(k, v)| {
        let st = if s.done || k < s.i {
          CellState::Sorted
        } else if k == s.min {
          CellState::Candidate
        } else if k == s.j {
          CellState::Active
        } else {
          CellState::Unchecked
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![
      Cursor::within("i", s.i, input.len()),
      Cursor::within("j", s.j, input.len()),
      Cursor::at("min", s.min),
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    let n = input.len();
    n * (n - 1) / 2
  }
}
