//! Binary search over sorted input: one probe of the middle element per step.

use tracing::instrument;

use super::linear_search::{SearchInput, parse_search_input};
use crate::error::ConfigError;
use crate::input::{RawInput, check_sorted};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearchState {
  /// Search space is `low..high` (exclusive high).
  pub low: usize,
  pub high: usize,
  /// Last probed index.
  pub mid: Option<usize>,
  pub found: Option<usize>,
  /// Probe order, kept so the renderer can trail previous probes.
  pub probes: Vec<usize>,
}

impl Algorithm for BinarySearch {
  type Input = SearchInput;
  type State = BinarySearchState;

  fn name(&self) -> &'static str {
    "binary-search"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    let input = parse_search_input(raw)?;
    check_sorted(&input.values)?;
    Ok(input)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = BinarySearchState {
      low: 0,
      high: input.values.len(),
      mid: None,
      found: None,
      probes: Vec::new(),
    };
    (
      state,
      format!(
        "Search for {} in indices 0..={}",
        input.target,
        input.values.len() - 1
      ),
    )
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let mid = s.low + (s.high - s.low) / 2;
    s.mid = Some(mid);
    s.probes.push(mid);
    let v = input.values[mid];
    let annotation = if v == input.target {
      s.found = Some(mid);
      return StepOutcome::Completed(RunResult::Found { index: mid });
    } else if v < input.target {
      s.low = mid + 1;
      format!("a[{}]={} < {}: discard left half", mid, v, input.target)
    } else {
      s.high = mid;
      format!("a[{}]={} > {}: discard right half", mid, v, input.target)
    };
    if s.low >= s.high {
      return StepOutcome::Completed(RunResult::NotFound);
    }
    StepOutcome::Continue(annotation)
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    input
      .values
      .iter()
      .enumerate()
      .map(|(k, v)| {
        let st = match state {
          None => CellState::Unchecked,
          Some(s) if s.found == Some(k) => CellState::Matched,
          Some(s) if k < s.low || k >= s.high => CellState::Eliminated,
          Some(s) if s.mid == Some(k) => CellState::Active,
          Some(_) => CellState::InWindow,
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, _input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![
      Cursor {
        name: "low".to_string(),
        position: (s.low < s.high).then_some(s.low),
      },
      Cursor {
        name: "mid".to_string(),
        position: s.mid,
      },
      Cursor {
        name: "high".to_string(),
        position: (s.low < s.high).then(|| s.high - 1),
      },
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    (usize::BITS - input.values.len().leading_zeros()) as usize
  }
}
