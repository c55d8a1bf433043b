//! Prefix sums: one running-total append per step, then an optional O(1)
//! range query `from..=to` answered from the table.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, check_range, optional_int, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixSum;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSumInput {
  pub values: Vec<i64>,
  /// Inclusive query range.
  pub query: Option<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSumState {
  /// `sums[k]` is the total of `values[..=k]`.
  pub sums: Vec<i64>,
  pub querying: bool,
  pub done: bool,
}

impl Algorithm for PrefixSum {
  type Input = PrefixSumInput;
  type State = PrefixSumState;

  fn name(&self) -> &'static str {
    "prefix-sum"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    let values = parse_bounded_values(&raw.values, DEFAULT_LEN)?;
    let last = values.len() as i64 - 1;
    let query = match (optional_int(raw, "from")?, optional_int(raw, "to")?) {
      (None, None) => None,
      (Some(from), Some(to)) => {
        check_range("from", from, 0..=last)?;
        check_range("to", to, from..=last)?;
        Some((from as usize, to as usize))
      }
      (None, Some(_)) => return Err(ConfigError::MissingParameter("from")),
      (Some(_), None) => return Err(ConfigError::MissingParameter("to")),
    };
    Ok(PrefixSumInput { values, query })
  }

  fn start(&self, _input: &Self::Input) -> (Self::State, String) {
    let state = PrefixSumState {
      sums: Vec::new(),
      querying: false,
      done: false,
    };
    (state, "Build running totals from the left".to_string())
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let n = input.values.len();
    if s.sums.len() < n {
      let i = s.sums.len();
      let total = s.sums.last().copied().unwrap_or(0) + input.values[i];
      s.sums.push(total);
      let annotation = format!("prefix[{}] = {}", i, total);
      if s.sums.len() < n {
        return StepOutcome::Continue(annotation);
      }
      match input.query {
        None => {
          s.done = true;
          return StepOutcome::Completed(RunResult::PrefixSums {
            sums: s.sums.clone(),
          });
        }
        Some((from, to)) => {
          s.querying = true;
          return StepOutcome::Continue(format!(
            "{}; table complete, query {}..={}",
            annotation, from, to
          ));
        }
      }
    }
    let (from, to) = input.query.unwrap_or((0, n - 1));
    let before = if from == 0 { 0 } else { s.sums[from - 1] };
    s.done = true;
    StepOutcome::Completed(RunResult::RangeSum {
      from,
      to,
      sum: s.sums[to] - before,
    })
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    input
      .values
      .iter()
      .enumerate()
      .map(|(k, v)| {
        let in_query = input.query.is_some_and(|(from, to)| k >= from && k <= to);
        let st = match state {
          None => CellState::Unchecked,
          Some(s) if s.querying && in_query => CellState::InWindow,
          Some(s) if k < s.sums.len() => CellState::Matched,
          Some(s) if k == s.sums.len() => CellState::Active,
          Some(_) => CellState::Unchecked,
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    let mut cursors = vec![Cursor::within("i", s.sums.len(), input.values.len())];
    if let Some((from, to)) = input.query {
      cursors.push(Cursor::at("from", from));
      cursors.push(Cursor::at("to", to));
    }
    cursors
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.values.len() + usize::from(input.query.is_some())
  }
}
