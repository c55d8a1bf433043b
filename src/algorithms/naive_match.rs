//! Naive string matching: one character comparison per step, sliding the
//! pattern by one on a mismatch or a full match.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{RawInput, check_len};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

/// Text length bounds for the string-matching family.
pub const TEXT_LEN: std::ops::RangeInclusive<usize> = 2..=24;

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMatch;

/// Text to search and the pattern to find, both printable ASCII (spaces allowed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
  pub text: Vec<char>,
  pub pattern: Vec<char>,
}

fn printable(field: &str) -> Result<Vec<char>, ConfigError> {
  let chars: Vec<char> = field.trim().chars().collect();
  match chars.iter().find(|&&c| !(c.is_ascii_graphic() || c == ' ')) {
    Some(c) => Err(ConfigError::invalid(c.to_string(), "printable ASCII character")),
    None => Ok(chars),
  }
}

/// Parses the text from `values` and a required `pattern` parameter.
pub(crate) fn parse_text_input(raw: &RawInput) -> Result<TextInput, ConfigError> {
  let text = printable(&raw.values)?;
  check_len("text", text.len(), TEXT_LEN)?;
  let pattern = printable(
    raw
      .param("pattern")
      .ok_or(ConfigError::MissingParameter("pattern"))?,
  )?;
  check_len("pattern", pattern.len(), 1..=text.len())?;
  Ok(TextInput { text, pattern })
}

/// Shared cell classification for text matchers: current window, the
/// character under comparison and completed matches.
pub(crate) fn text_cells(
  input: &TextInput,
  window: Option<usize>,
  probe: Option<usize>,
  matches: &[usize],
) -> Vec<Cell> {
  let m = input.pattern.len();
  input
    .text
    .iter()
    .enumerate()
    .map(|(k, ch)| {
      let st = if probe == Some(k) {
        CellState::Active
      } else if matches.iter().any(|&p| k >= p && k < p + m) {
        CellState::Matched
      } else if window.is_some_and(|s| k >= s && k < s + m) {
        CellState::InWindow
      } else {
        CellState::Unchecked
      };
      Cell::new(ch, st)
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveMatchState {
  /// Alignment of the pattern in the text.
  pub shift: usize,
  /// Pattern position being compared.
  pub j: usize,
  pub matches: Vec<usize>,
  pub done: bool,
}

impl Algorithm for NaiveMatch {
  type Input = TextInput;
  type State = NaiveMatchState;

  fn name(&self) -> &'static str {
    "naive-match"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_text_input(raw)
  }

  fn start(&self, input: &Self::Input) -> (Self::State, String) {
    let state = NaiveMatchState {
      shift: 0,
      j: 0,
      matches: Vec::new(),
      done: false,
    };
    let pattern: String = input.pattern.iter().collect();
    (state, format!("Align \"{}\" at shift 0", pattern))
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let (n, m) = (input.text.len(), input.pattern.len());
    let (t, p) = (input.text[s.shift + s.j], input.pattern[s.j]);
    let annotation = if t == p {
      s.j += 1;
      if s.j == m {
        s.matches.push(s.shift);
        let msg = format!("match at shift {}", s.shift);
        s.shift += 1;
        s.j = 0;
        msg
      } else {
        format!("text[{}]='{}' == pattern[{}]", s.shift + s.j - 1, t, s.j - 1)
      }
    } else {
      let msg = format!(
        "text[{}]='{}' != pattern[{}]='{}': shift to {}",
        s.shift + s.j,
        t,
        s.j,
        p,
        s.shift + 1
      );
      s.shift += 1;
      s.j = 0;
      msg
    };
    if s.shift + m > n {
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
      Some(s) => text_cells(input, Some(s.shift), Some(s.shift + s.j), &s.matches),
    }
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![
      Cursor::within("shift", s.shift, input.text.len()),
      Cursor::within("i", s.shift + s.j, input.text.len()),
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    let (n, m) = (input.text.len(), input.pattern.len());
    (n - m + 1) * m
  }
}
