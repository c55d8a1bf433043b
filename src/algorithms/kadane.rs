//! Kadane's maximum subarray: one index advance per step.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct Kadane;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KadaneState {
  pub i: usize,
  pub current: i64,
  pub run_start: usize,
  pub best: i64,
  pub best_start: usize,
  pub best_end: usize,
  pub done: bool,
}

impl Algorithm for Kadane {
  type Input = Vec<i64>;
  type State = KadaneState;

  fn name(&self) -> &'static str {
    "kadane"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_bounded_values(&raw.values, DEFAULT_LEN)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = KadaneState {
      i: 1,
      current: input[0],
      run_start: 0,
      best: input[0],
      best_start: 0,
      best_end: 0,
      done: false,
    };
    (state, format!("current = best = a[0] = {}", input[0]))
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let x = input[s.i];
    let mut annotation = if s.current < 0 {
      s.current = x;
      s.run_start = s.i;
      format!("running sum was negative: restart at a[{}]={}", s.i, x)
    } else {
      s.current += x;
      format!("extend with a[{}]={}: current = {}", s.i, x, s.current)
    };
    if s.current > s.best {
      s.best = s.current;
      s.best_start = s.run_start;
      s.best_end = s.i;
      annotation.push_str(&format!("; new best {}", s.best));
    }
    s.i += 1;
    if s.i >= input.len() {
      s.done = true;
      return StepOutcome::Completed(RunResult::MaxSubarray {
        sum: s.best,
        start: s.best_start,
        end: s.best_end,
      });
    }
    StepOutcome::Continue(annotation)
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    input
      .iter()
      .enumerate()
      .map(|(k, v)| {
        let in_best = |s: &KadaneState| k >= s.best_start && k <= s.best_end;
        let st = match state {
          None => CellState::Unchecked,
          Some(s) if s.done && in_best(s) => CellState::Matched,
          Some(s) if s.done => CellState::Unchecked,
          Some(s) if k == s.i => CellState::Active,
          Some(s) if k >= s.run_start && k < s.i => CellState::InWindow,
          Some(s) if in_best(s) => CellState::Candidate,
          Some(_) => CellState::Unchecked,
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![
      Cursor::within("i", s.i, input.len()),
      Cursor::at("start", s.run_start),
      Cursor::at("best_start", s.best_start),
      Cursor::at("best_end", s.best_end),
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.len() - 1
  }
}
