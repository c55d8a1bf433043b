//! Fixed-size sliding window maximum sum: each step slides one element in
//! (and, once the window is full, one out).

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, check_range, parse_bounded_values, require_int};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInput {
  pub values: Vec<i64>,
  pub window: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingWindowState {
  /// Next index to slide in; the window is `i - window..i` once full.
  pub i: usize,
  pub sum: i64,
  pub best: Option<(i64, usize)>,
  pub done: bool,
}

impl Algorithm for SlidingWindow {
  type Input = WindowInput;
  type State = SlidingWindowState;

  fn name(&self) -> &'static str {
    "sliding-window"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    let values = parse_bounded_values(&raw.values, DEFAULT_LEN)?;
    let window = require_int(raw, "window")?;
    check_range("window", window, 1..=values.len() as i64)?;
    Ok(WindowInput {
      values,
      window: window as usize,
    })
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = SlidingWindowState {
      i: 0,
      sum: 0,
      best: None,
      done: false,
    };
    (state, format!("Fill a window of {} elements", input.window))
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let k = input.window;
    let incoming = input.values[s.i];
    s.sum += incoming;
    let mut annotation = if s.i >= k {
      let outgoing = input.values[s.i - k];
      s.sum -= outgoing;
      format!("slide: +{} -{} = {}", incoming, outgoing, s.sum)
    } else {
      format!("add a[{}]={}: sum = {}", s.i, incoming, s.sum)
    };
    if s.i + 1 >= k {
      let start = s.i + 1 - k;
      if s.best.is_none_or(|(best, _)| s.sum > best) {
        s.best = Some((s.sum, start));
        annotation.push_str(&format!("; new best window at {}", start));
      }
    }
    s.i += 1;
    if s.i >= input.values.len() {
      s.done = true;
      let (sum, start) = s.best.unwrap_or((s.sum, 0));
      return StepOutcome::Completed(RunResult::MaxWindow {
        sum,
        start,
        end: start + k - 1,
      });
    }
    StepOutcome::Continue(annotation)
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    let k = input.window;
    input
      .values
      .iter()
      .enumerate()
      .map(|(idx, v)| {
        let in_best = |s: &SlidingWindowState| {
          s.best
            .is_some_and(|(_, start)| idx >= start && idx < start + k)
        };
        let st = match state {
          None => CellState::Unchecked,
          Some(s) if s.done && in_best(s) => CellState::Matched,
          Some(s) if s.done => CellState::Unchecked,
          Some(s) if idx < s.i && idx + k >= s.i => CellState::InWindow,
          Some(s) if in_best(s) => CellState::Candidate,
          Some(s) if idx == s.i => CellState::Active,
          Some(_) => CellState::Unchecked,
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![
      Cursor::within("i", s.i, input.values.len()),
      Cursor {
        name: "left".to_string(),
        position: (s.i >= input.window).then(|| s.i - input.window),
      },
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.values.len()
  }
}
