//! Quicksort (Lomuto partition, explicit range stack): one comparison against
//! the pivot per step. The pivot is placed on the step that ends a partition.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSortState {
  pub values: Vec<i64>,
  /// Ranges still to partition, inclusive bounds.
  pub pending: Vec<(usize, usize)>,
  pub lo: usize,
  /// Pivot index for the current partition.
  pub hi: usize,
  /// Next slot for a value smaller than the pivot.
  pub i: usize,
  pub j: usize,
  pub sorted: Vec<bool>,
  pub done: bool,
}

impl QuickSortState {
  /// Pops the next range with at least two elements; single elements are final.
  fn next_range(&mut self) -> bool {
    while let Some((lo, hi)) = self.pending.pop() {
      if lo < hi {
        self.lo = lo;
        self.hi = hi;
        self.i = lo;
        self.j = lo;
        return true;
      }
      self.sorted[lo] = true;
    }
    false
  }
}

impl Algorithm for QuickSort {
  type Input = Vec<i64>;
  type State = QuickSortState;

  fn name(&self) -> &'static str {
    "quick-sort"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_bounded_values(&raw.values, DEFAULT_LEN)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let n = input.len();
    let mut state = QuickSortState {
      values: input.clone(),
      pending: vec![(0, n - 1)],
      lo: 0,
      hi: 0,
      i: 0,
      j: 0,
      sorted: vec![false; n],
      done: false,
    };
    state.next_range();
    let pivot = state.values[state.hi];
    (state, format!("Partition 0..={} around pivot {}", n - 1, pivot))
  }

  #[instrument(level = "trace", skip(self, _input))]
  fn step(&self, _input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let pivot = s.values[s.hi];
    let v = s.values[s.j];
    let mut annotation = if v < pivot {
      s.values.swap(s.i, s.j);
      s.i += 1;
      format!("a[{}]={} < pivot {}: move left", s.j, v, pivot)
    } else {
      format!("a[{}]={} >= pivot {}: leave", s.j, v, pivot)
    };
    s.j += 1;
    if s.j < s.hi {
      return StepOutcome::Continue(annotation);
    }

    s.values.swap(s.i, s.hi);
    s.sorted[s.i] = true;
    annotation.push_str(&format!("; pivot {} placed at {}", pivot, s.i));
    let (lo, hi, p) = (s.lo, s.hi, s.i);
    if p < hi {
      s.pending.push((p + 1, hi));
    }
    if p > lo {
      s.pending.push((lo, p - 1));
    }
    if !s.next_range() {
      s.done = true;
      s.sorted.iter_mut().for_each(|x| *x = true);
      return StepOutcome::Completed(RunResult::Sorted {
        values: s.values.clone(),
      });
    }
    annotation.push_str(&format!(
      "; partition {}..={} around pivot {}",
      s.lo, s.hi, s.values[s.hi]
    ));
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
        let st = if s.sorted[k] {
          CellState::Sorted
        } else if k == s.hi {
          CellState::Pivot
        } else if k == s.j {
          CellState::Compared
        } else if k == s.i {
          CellState::Active
        } else if k >= s.lo && k < s.i {
          CellState::InWindow
        } else {
          CellState::Unchecked
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, _input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![
      Cursor::at("lo", s.lo),
      Cursor::at("i", s.i),
      Cursor::at("j", s.j),
      Cursor::at("pivot", s.hi),
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    let n = input.len();
    n * (n - 1) / 2
  }
}
