//! Bottom-up merge sort: one write into the merged run per step.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

/// One in-progress merge of `values[lo..mid]` with `values[mid..hi]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
  pub lo: usize,
  pub mid: usize,
  pub hi: usize,
  pub left: Vec<i64>,
  pub right: Vec<i64>,
  pub a: usize,
  pub b: usize,
  /// Next write position.
  pub k: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSortState {
  pub values: Vec<i64>,
  pub width: usize,
  pub merge: Option<Merge>,
}

impl MergeSortState {
  /// Finds the next pair of runs to merge, starting at `lo` for the current width.
  fn next_merge(&mut self, mut lo: usize) {
    let n = self.values.len();
    while self.width < n {
      while lo < n {
        let mid = (lo + self.width).min(n);
        let hi = (lo + 2 * self.width).min(n);
        if mid < hi {
          self.merge = Some(Merge {
            lo,
            mid,
            hi,
            left: self.values[lo..mid].to_vec(),
            right: self.values[mid..hi].to_vec(),
            a: 0,
            b: 0,
            k: lo,
          });
          return;
        }
        lo = hi;
      }
      self.width *= 2;
      lo = 0;
    }
    self.merge = None;
  }
}

fn levels(n: usize) -> usize {
  let mut width = 1;
  let mut levels = 0;
  while width < n {
    width *= 2;
    levels += 1;
  }
  levels
}

impl Algorithm for MergeSort {
  type Input = Vec<i64>;
  type State = MergeSortState;

  fn name(&self) -> &'static str {
    "merge-sort"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_bounded_values(&raw.values, DEFAULT_LEN)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let mut state = MergeSortState {
      values: input.clone(),
      width: 1,
      merge: None,
    };
    state.next_merge(0);
    (state, "Merge runs of width 1".to_string())
  }

  #[instrument(level = "trace", skip(self, _input))]
  fn step(&self, _input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let Some(m) = s.merge.as_mut() else {
      return StepOutcome::Completed(RunResult::Sorted {
        values: s.values.clone(),
      });
    };
    let take_left = m.a < m.left.len() && (m.b >= m.right.len() || m.left[m.a] <= m.right[m.b]);
    let mut annotation = if take_left {
      let v = m.left[m.a];
      m.a += 1;
      s.values[m.k] = v;
      format!("write {} from left run to a[{}]", v, m.k)
    } else {
      let v = m.right[m.b];
      m.b += 1;
      s.values[m.k] = v;
      format!("write {} from right run to a[{}]", v, m.k)
    };
    m.k += 1;
    if m.k < m.hi {
      return StepOutcome::Continue(annotation);
    }
    let (lo, hi, width) = (m.lo, m.hi, s.width);
    annotation.push_str(&format!("; merged {}..{}", lo, hi));
    s.next_merge(hi);
    match &s.merge {
      None => StepOutcome::Completed(RunResult::Sorted {
        values: s.values.clone(),
      }),
      Some(_) if s.width != width => {
        annotation.push_str(&format!("; width now {}", s.width));
        StepOutcome::Continue(annotation)
      }
      Some(_) => StepOutcome::Continue(annotation),
    }
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    let Some(s) = state else {
      return input.iter().map(|v| Cell::new(v, CellState::Unchecked)).collect();
    };
    s.values
      .iter()
      .enumerate()
      .map(|(k, v)| {
        let st = match &s.merge {
          None => CellState::Sorted,
          Some(m) if k >= m.lo && k < m.k => CellState::Sorted,
          Some(m) if k == m.k => CellState::Active,
          Some(m) if k > m.k && k < m.hi => CellState::InWindow,
          Some(_) => CellState::Unchecked,
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, _input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    match &s.merge {
      Some(m) => vec![
        Cursor::at("lo", m.lo),
        Cursor::at("mid", m.mid),
        Cursor::at("hi", m.hi - 1),
        Cursor::at("k", m.k),
      ],
      None => Vec::new(),
    }
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.len() * levels(input.len())
  }
}
