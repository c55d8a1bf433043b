//! Rabin-Karp: one window alignment per step. Equal hashes are verified
//! character by character within the same step, then the hash rolls forward.
//!
//! The roll computes `BASE * (t - text[s] * h) + text[s + m]` before taking the
//! modulus, so the intermediate can be negative; it is corrected with a single
//! `+ MODULUS` afterwards.

use tracing::instrument;

use super::naive_match::{TextInput, parse_text_input, text_cells};
use crate::error::ConfigError;
use crate::input::RawInput;
use crate::playback::Algorithm;
use crate::types::{Cell, Cursor, RunResult, StepOutcome};

/// Radix for the polynomial hash.
pub const BASE: i64 = 256;
/// Prime modulus for the polynomial hash.
pub const MODULUS: i64 = 101;

#[derive(Debug, Clone, Copy, Default)]
pub struct RabinKarp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RabinKarpState {
  pub shift: usize,
  pub pattern_hash: i64,
  pub window_hash: i64,
  /// `BASE^(m-1) mod MODULUS`, weight of the outgoing character.
  pub high_order: i64,
  pub matches: Vec<usize>,
  /// Hash hits that failed character verification.
  pub spurious_hits: usize,
  pub done: bool,
}

fn code(c: char) -> i64 {
  i64::from(u32::from(c))
}

/// Hash of `chars` under [BASE] / [MODULUS].
pub fn hash(chars: &[char]) -> i64 {
  chars
    .iter()
    .fold(0, |acc, &c| (BASE * acc + code(c)) % MODULUS)
}

/// Rolls `window_hash` from the window starting at `shift` to `shift + 1`.
pub fn roll(window_hash: i64, outgoing: char, incoming: char, high_order: i64) -> i64 {
  let rolled = (BASE * (window_hash - code(outgoing) * high_order) + code(incoming)) % MODULUS;
  if rolled < 0 { rolled + MODULUS } else { rolled }
}

impl Algorithm for RabinKarp {
  type Input = TextInput;
  type State = RabinKarpState;

  fn name(&self) -> &'static str {
    "rabin-karp"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_text_input(raw)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let m = input.pattern.len();
    let high_order = (1..m).fold(1, |acc, _| (acc * BASE) % MODULUS);
    let state = RabinKarpState {
      shift: 0,
      pattern_hash: hash(&input.pattern),
      window_hash: hash(&input.text[..m]),
      high_order,
      matches: Vec::new(),
      spurious_hits: 0,
      done: false,
    };
    let annotation = format!(
      "pattern hash {}, first window hash {}",
      state.pattern_hash, state.window_hash
    );
    (state, annotation)
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let (n, m) = (input.text.len(), input.pattern.len());
    let window = &input.text[s.shift..s.shift + m];
    let mut annotation = if s.window_hash != s.pattern_hash {
      format!(
        "shift {}: window hash {} != {}",
        s.shift, s.window_hash, s.pattern_hash
      )
    } else if window == input.pattern.as_slice() {
      s.matches.push(s.shift);
      format!("shift {}: hashes equal, characters match", s.shift)
    } else {
      s.spurious_hits += 1;
      format!("shift {}: hashes equal but characters differ (spurious hit)", s.shift)
    };
    if s.shift + m >= n {
      s.done = true;
      return StepOutcome::Completed(RunResult::Matches {
        positions: s.matches.clone(),
      });
    }
    s.window_hash = roll(
      s.window_hash,
      input.text[s.shift],
      input.text[s.shift + m],
      s.high_order,
    );
    s.shift += 1;
    annotation.push_str(&format!("; next window hash {}", s.window_hash));
    StepOutcome::Continue(annotation)
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    match state {
      None => text_cells(input, None, None, &[]),
      Some(s) if s.done => text_cells(input, None, None, &s.matches),
      Some(s) => text_cells(input, Some(s.shift), None, &s.matches),
    }
  }

  fn cursors(&self, _input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![Cursor::at("shift", s.shift)]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    input.text.len() - input.pattern.len() + 1
  }
}
