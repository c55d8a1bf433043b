//! Dutch national flag partition of 0s, 1s and 2s with `low`, `mid`, `high`.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, check_range, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct DutchFlag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutchFlagState {
  pub values: Vec<i64>,
  /// `values[..low]` are 0s.
  pub low: usize,
  /// `values[low..mid]` are 1s.
  pub mid: usize,
  /// `values[high..]` are 2s (exclusive bound of the unknown region).
  pub high: usize,
}

impl Algorithm for DutchFlag {
  type Input = Vec<i64>;
  type State = DutchFlagState;

  fn name(&self) -> &'static str {
    "dutch-flag"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    let values = parse_bounded_values(&raw.values, DEFAULT_LEN)?;
    for v in &values {
      check_range("value", *v, 0..=2)?;
    }
    Ok(values)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = DutchFlagState {
      values: input.clone(),
      low: 0,
      mid: 0,
      high: input.len(),
    };
    (state, "Partition into 0s, 1s and 2s".to_string())
  }

  #[instrument(level = "trace", skip(self, _input))]
  fn step(&self, _input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let v = s.values[s.mid];
    let annotation = match v {
      0 => {
        s.values.swap(s.low, s.mid);
        let msg = format!("a[{}]=0: swap with low {}", s.mid, s.low);
        s.low += 1;
        s.mid += 1;
        msg
      }
      1 => {
        s.mid += 1;
        format!("a[{}]=1: leave in the middle", s.mid - 1)
      }
      _ => {
        s.high -= 1;
        s.values.swap(s.mid, s.high);
        format!("a[{}]=2: swap with high {}", s.mid, s.high)
      }
    };
    if s.mid >= s.high {
      return StepOutcome::Completed(RunResult::Partitioned {
        values: s.values.clone(),
      });
    }
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
        let st = if k < s.low || k >= s.high {
          CellState::Sorted
        } else if k < s.mid {
          CellState::InWindow
        } else if k == s.mid {
          CellState::Active
        } else {
          CellState::Unchecked
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    let n = input.len();
    vec![
      Cursor::within("low", s.low, n),
      Cursor::within("mid", s.mid, n),
      Cursor {
        name: "high".to_string(),
        position: s.high.checked_sub(1),
      },
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.len()
  }
}
