//! Linear search: one probe per step.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, VALUE_RANGE, check_range, parse_bounded_values, require_int};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

/// Values to search plus the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
  pub values: Vec<i64>,
  pub target: i64,
}

/// Parses `values` plus a required `target` parameter.
pub(crate) fn parse_search_input(raw: &RawInput) -> Result<SearchInput, ConfigError> {
  let values = parse_bounded_values(&raw.values, DEFAULT_LEN)?;
  let target = require_int(raw, "target")?;
  check_range("target", target, VALUE_RANGE)?;
  Ok(SearchInput { values, target })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSearchState {
  /// Next index to probe.
  pub i: usize,
  pub found: Option<usize>,
}

impl Algorithm for LinearSearch {
  type Input = SearchInput;
  type State = LinearSearchState;

  fn name(&self) -> &'static str {
    "linear-search"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_search_input(raw)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = LinearSearchState { i: 0, found: None };
    (state, format!("Search for {} from the left", input.target))
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let v = input.values[s.i];
    if v == input.target {
      s.found = Some(s.i);
      return StepOutcome::Completed(RunResult::Found { index: s.i });
    }
    let annotation = format!("a[{}]={} is not {}", s.i, v, input.target);
    s.i += 1;
    if s.i >= input.values.len() {
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
          Some(s) if k < s.i => CellState::Eliminated,
          Some(s) if k == s.i => CellState::Active,
          Some(_) => CellState::Unchecked,
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![Cursor::within("i", s.i, input.values.len())]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.values.len()
  }
}
