//! Two-pointer pair sum over sorted input: each step moves one pointer inward.

use tracing::instrument;

use super::linear_search::{SearchInput, parse_search_input};
use crate::error::ConfigError;
use crate::input::{RawInput, check_sorted};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoPointerState {
  pub left: usize,
  pub right: usize,
  pub found: bool,
  pub done: bool,
}

impl Algorithm for TwoPointer {
  type Input = SearchInput;
  type State = TwoPointerState;

  fn name(&self) -> &'static str {
    "two-pointer"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    let input = parse_search_input(raw)?;
    check_sorted(&input.values)?;
    Ok(input)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = TwoPointerState {
      left: 0,
      right: input.values.len() - 1,
      found: false,
      done: false,
    };
    (
      state,
      format!("Find two values summing to {} from both ends", input.target),
    )
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let (a, b) = (input.values[s.left], input.values[s.right]);
    let sum = a + b;
    let annotation = if sum == input.target {
      s.found = true;
      s.done = true;
      return StepOutcome::Completed(RunResult::Pair {
        left: s.left,
        right: s.right,
      });
    } else if sum < input.target {
      s.left += 1;
      format!("{} + {} = {} < {}: move left pointer", a, b, sum, input.target)
    } else {
      s.right -= 1;
      format!("{} + {} = {} > {}: move right pointer", a, b, sum, input.target)
    };
    if s.left >= s.right {
      s.done = true;
      return StepOutcome::Completed(RunResult::NoPair);
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
          Some(s) if s.found && (k == s.left || k == s.right) => CellState::Matched,
          Some(s) if s.done => CellState::Eliminated,
          Some(s) if k == s.left || k == s.right => CellState::Active,
          Some(s) if k < s.left || k > s.right => CellState::Eliminated,
          Some(_) => CellState::Unchecked,
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, _input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![Cursor::at("left", s.left), Cursor::at("right", s.right)]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.values.len() - 1
  }
}
