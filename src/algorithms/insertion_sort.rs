//! Insertion sort: each step either shifts the key one slot left or settles it.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionSortState {
  pub values: Vec<i64>,
  /// Index of the key being inserted; `values[..i]` is sorted.
  pub i: usize,
  /// Current position of the key.
  pub j: usize,
  pub done: bool,
}

impl Algorithm for InsertionSort {
  type Input = Vec<i64>;
  type State = InsertionSortState;

  fn name(&self) -> &'static str {
    "insertion-sort"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_bounded_values(&raw.values, DEFAULT_LEN)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = InsertionSortState {
      values: input.clone(),
      i: 1,
      j: 1,
      done: false,
    };
    (state, format!("Insert key a[1]={} into the sorted prefix", input[1]))
  }

  #[instrument(level = "trace", skip(self, _input))]
  fn step(&self, _input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let n = s.values.len();
    let (prev, key) = (s.values[s.j - 1], s.values[s.j]);
    let annotation = if prev > key {
      s.values.swap(s.j - 1, s.j);
      s.j -= 1;
      format!("{} > {}: shift {} right", prev, key, prev)
    } else {
      s.j = 0;
      format!("{} <= {}: key settled", prev, key)
    };
    if s.j == 0 {
      s.i += 1;
      s.j = s.i;
      if s.i >= n {
        s.done = true;
        return StepOutcome::Completed(RunResult::Sorted {
          values: s.values.clone(),
        });
      }
    }
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
        let st = if s.done {
          CellState::Sorted
        } else if k == s.j {
          CellState::Active
        } else if k + 1 == s.j {
          CellState::Compared
        } else if k <= s.i {
          CellState::Sorted
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
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    let n = input.len();
    n * (n - 1) / 2
  }
}
