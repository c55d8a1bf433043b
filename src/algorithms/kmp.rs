//! Knuth-Morris-Pratt: the failure table is built on start, then each step is
//! one text/pattern comparison or one fallback along the table.

use tracing::instrument;

use super::naive_match::{TextInput, parse_text_input, text_cells};
use crate::error::ConfigError;
use crate::input::RawInput;
use crate::playback::Algorithm;
use crate::types::{Cell, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct Kmp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmpState {
  /// Longest proper prefix that is also a suffix, per pattern position.
  pub lps: Vec<usize>,
  pub i: usize,
  pub j: usize,
  pub matches: Vec<usize>,
  pub done: bool,
}

/// Builds the longest-prefix-suffix table for `pattern`.
pub fn failure_table(pattern: &[char]) -> Vec<usize> {
  let mut lps = vec![0; pattern.len()];
  let mut len = 0;
  let mut i = 1;
  while i < pattern.len() {
    if pattern[i] == pattern[len] {
      len += 1;
      lps[i] = len;
      i += 1;
    } else if len > 0 {
      len = lps[len - 1];
    } else {
      i += 1;
    }
  }
  lps
}

impl Algorithm for Kmp {
  type Input = TextInput;
  type State = KmpState;

  fn name(&self) -> &'static str {
    "kmp"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_text_input(raw)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let lps = failure_table(&input.pattern);
    let annotation = format!("failure table {:?}", lps);
    let state = KmpState {
      lps,
      i: 0,
      j: 0,
      matches: Vec::new(),
      done: false,
    };
    (state, annotation)
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let (n, m) = (input.text.len(), input.pattern.len());
    let (t, p) = (input.text[s.i], input.pattern[s.j]);
    let annotation = if t == p {
      s.i += 1;
      s.j += 1;
      if s.j == m {
        let at = s.i - m;
        s.matches.push(at);
        s.j = s.lps[m - 1];
        format!("match at {}; fall back to j={}", at, s.j)
      } else {
        format!("text[{}]='{}' == pattern[{}]", s.i - 1, t, s.j - 1)
      }
    } else if s.j > 0 {
      let from = s.j;
      s.j = s.lps[s.j - 1];
      format!("'{}' != '{}': fall back j {} -> {}", t, p, from, s.j)
    } else {
      s.i += 1;
      format!("'{}' != '{}' at j=0: advance text", t, p)
    };
    if s.i >= n {
      s.done = true;
      return StepOutcome::Completed(RunResult::Matches {
        positions: s.matches.clone(),
      });
    }
    StepOutcome::Continue(annotation)
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    match state {
      None => text_cells(input, None, None, &[]),
      Some(s) if s.done => text_cells(input, None, None, &s.matches),
      Some(s) => text_cells(input, Some(s.i - s.j), Some(s.i), &s.matches),
    }
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![
      Cursor::within("i", s.i, input.text.len()),
      Cursor::at("j", s.j),
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    2 * input.text.len()
  }
}
