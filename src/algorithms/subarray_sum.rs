//! Subarray with a given sum via prefix sums and a hash of earlier prefixes.
//! Handles negative values; each step advances one index.

use std::collections::HashMap;

use tracing::instrument;

use super::linear_search::{SearchInput, parse_search_input};
use crate::error::ConfigError;
use crate::input::RawInput;
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct SubarraySum;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubarraySumState {
  pub i: usize,
  pub prefix: i64,
  /// Earliest prefix length at which each prefix total was seen.
  pub seen: HashMap<i64, usize>,
  pub found: Option<(usize, usize)>,
  pub done: bool,
}

impl Algorithm for SubarraySum {
  type Input = SearchInput;
  type State = SubarraySumState;

  fn name(&self) -> &'static str {
    "subarray-sum"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_search_input(raw)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = SubarraySumState {
      i: 0,
      prefix: 0,
      seen: HashMap::from([(0, 0)]),
      found: None,
      done: false,
    };
    (
      state,
      format!("Look for a subarray summing to {}; seen prefix 0", input.target),
    )
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    s.prefix += input.values[s.i];
    let need = s.prefix - input.target;
    if let Some(&start) = s.seen.get(&need) {
      s.found = Some((start, s.i));
      s.done = true;
      return StepOutcome::Completed(RunResult::Subarray { start, end: s.i });
    }
    s.seen.entry(s.prefix).or_insert(s.i + 1);
    let annotation = format!(
      "prefix = {}; need earlier prefix {}: not seen",
      s.prefix, need
    );
    s.i += 1;
    if s.i >= input.values.len() {
      s.done = true;
      return StepOutcome::Completed(RunResult::NoSubarray);
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
          Some(s) => match s.found {
            Some((start, end)) if k >= start && k <= end => CellState::Matched,
            _ if s.done => CellState::Eliminated,
            _ if k == s.i => CellState::Active,
            _ if k < s.i => CellState::InWindow,
            _ => CellState::Unchecked,
          },
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    let mut cursors = vec![Cursor::within("i", s.i, input.values.len())];
    if let Some((start, end)) = s.found {
      cursors.push(Cursor::at("start", start));
      cursors.push(Cursor::at("end", end));
    }
    cursors
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.values.len()
  }
}
