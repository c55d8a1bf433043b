//! Bubble sort: one adjacent comparison (and swap, if out of order) per step.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleSortState {
  pub values: Vec<i64>,
  /// Completed passes; the last `pass` positions are final.
  pub pass: usize,
  pub j: usize,
  pub swapped: bool,
  pub done: bool,
}

impl Algorithm for BubbleSort {
  type Input = Vec<i64>;
  type State = BubbleSortState;

  fn name(&self) -> &'static str {
    "bubble-sort"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_bounded_values(&raw.values, DEFAULT_LEN)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = BubbleSortState {
      values: input.clone(),
      pass: 0,
      j: 0,
      swapped: false,
      done: false,
    };
    (state, "Pass 1: bubble the largest value to the end".to_string())
  }

  #[instrument(level = "trace", skip(self, _input))]
  fn step(&self, _input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let n = s.values.len();
    let (a, b) = (s.values[s.j], s.values[s.j + 1]);
    let annotation = if a > b {
      s.values.swap(s.j, s.j + 1);
      s.swapped = true;
      format!("a[{}]={} > a[{}]={}: swap", s.j, a, s.j + 1, b)
    } else {
      format!("a[{}]={} <= a[{}]={}: keep", s.j, a, s.j + 1, b)
    };
    s.j += 1;
    if s.j + 1 >= n - s.pass {
      if !s.swapped || s.pass + 2 >= n {
        s.done = true;
        return StepOutcome::Completed(RunResult::Sorted {
          values: s.values.clone(),
        });
      }
      s.pass += 1;
      s.j = 0;
      s.swapped = false;
      return StepOutcome::Continue(format!("{}; pass {} begins", annotation, s.pass + 1));
    }
    StepOutcome::Continue(annotation)
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    let Some(s) = state else {
      return input.iter().map(|v| Cell::new(v, CellState::Unchecked)).collect();
    };
    let n = s.values.len();
    s.values
      .iter()
      .enumerate()
      .map(|(k, v)| {
        let st = if s.done || k >= n - s.pass {
          CellState::Sorted
        } else if k == s.j {
          CellState::Active
        } else if k == s.j + 1 {
          CellState::Compared
        } else {
          CellState::Unchecked
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, _input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![Cursor::at("pass", s.pass), Cursor::at("j", s.j)]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    let n = input.len();
    n * (n - 1) / 2
  }
}
