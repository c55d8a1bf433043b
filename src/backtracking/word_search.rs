//! Word search: every path of orthogonally adjacent, unreused cells that
//! spells the word. Letters compare case-insensitively.
//!
//! A board without enough of each letter yields nothing without searching.
//! Otherwise the search stops at [TRAIL_CAP] trails or when the node budget
//! runs out.

use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Budget, Generation, Generator};
use super::grid::{MOVES, offset, parse_rows};
use crate::error::ConfigError;
use crate::input::{RawInput, check_len};

pub const BOARD_DIMS: RangeInclusive<usize> = 1..=6;

/// Most trails kept for one word.
pub const TRAIL_CAP: usize = 256;

#[derive(Debug, Clone, Copy, Default)]
pub struct WordSearch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearchParams {
  pub board: Vec<Vec<char>>,
  pub word: Vec<char>,
}

/// Board coordinates `(row, col)` of each letter in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
  pub cells: Vec<(usize, usize)>,
}

impl fmt::Display for Trail {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let parts: Vec<String> = self
      .cells
      .iter()
      .map(|(r, c)| format!("({},{})", r, c))
      .collect();
    f.write_str(&parts.join(" -> "))
  }
}

fn letter_counts(letters: impl Iterator<Item = char>) -> HashMap<char, usize> {
  let mut counts = HashMap::new();
  for c in letters {
    *counts.entry(c).or_insert(0) += 1;
  }
  counts
}

/// Whether the board holds at least as many of each letter as the word.
fn board_covers(params: &WordSearchParams) -> bool {
  let board = letter_counts(params.board.iter().flatten().copied());
  letter_counts(params.word.iter().copied())
    .into_iter()
    .all(|(c, need)| board.get(&c).is_some_and(|&have| have >= need))
}

struct Search<'a> {
  params: &'a WordSearchParams,
  trail: Vec<(usize, usize)>,
  out: Vec<Trail>,
  budget: Budget,
}

impl Search<'_> {
  fn trace(&mut self, at: (usize, usize)) {
    let params = self.params;
    let (rows, cols) = (params.board.len(), params.board[0].len());
    if params.board[at.0][at.1] != params.word[self.trail.len()] || self.trail.contains(&at) {
      return;
    }
    if self.out.len() >= TRAIL_CAP || !self.budget.spend() {
      return;
    }
    self.trail.push(at);
    if self.trail.len() == params.word.len() {
      self.out.push(Trail {
        cells: self.trail.clone(),
      });
    } else {
      for (_, dr, dc) in MOVES {
        if let Some(next) = offset(at, (dr, dc), rows, cols) {
          self.trace(next);
        }
      }
    }
    self.trail.pop();
  }
}

impl Generator for WordSearch {
  type Params = WordSearchParams;
  type Solution = Trail;

  fn name(&self) -> &'static str {
    "word-search"
  }

  /// Board rows come from the `board` parameter (or the values field),
  /// separated by `;`; the word from the required `word` parameter.
  fn parse(&self, raw: &RawInput) -> Result<WordSearchParams, ConfigError> {
    let text = raw.param("board").unwrap_or(raw.values.as_str());
    let board: Vec<Vec<char>> = parse_rows(text, "board", BOARD_DIMS)?
      .into_iter()
      .map(|row| row.into_iter().map(|c| c.to_ascii_uppercase()).collect())
      .collect();
    if let Some(c) = board.iter().flatten().find(|c| !c.is_ascii_alphabetic()) {
      return Err(ConfigError::invalid(c.to_string(), "board letter"));
    }
    let word: Vec<char> = raw
      .param("word")
      .ok_or(ConfigError::MissingParameter("word"))?
      .chars()
      .map(|c| c.to_ascii_uppercase())
      .collect();
    if let Some(c) = word.iter().find(|c| !c.is_ascii_alphabetic()) {
      return Err(ConfigError::invalid(c.to_string(), "word letter"));
    }
    let cells = board.len() * board[0].len();
    check_len("word", word.len(), 1..=cells)?;
    Ok(WordSearchParams { board, word })
  }

  fn generate_all(&self, params: &WordSearchParams) -> Vec<Trail> {
    self.generate(params).solutions
  }

  #[instrument(level = "trace", skip(self, params))]
  fn generate(&self, params: &WordSearchParams) -> Generation<Trail> {
    if !board_covers(params) {
      debug!("board lacks letters of the word");
      return Generation::complete(Vec::new());
    }
    let mut search = Search {
      params,
      trail: Vec::with_capacity(params.word.len()),
      out: Vec::new(),
      budget: Budget::new(),
    };
    for r in 0..params.board.len() {
      for c in 0..params.board[r].len() {
        search.trace((r, c));
      }
    }
    let complete = search.out.len() < TRAIL_CAP && !search.budget.is_exhausted();
    if !complete {
      debug!(trails = search.out.len(), "search stopped early");
    }
    Generation {
      solutions: search.out,
      complete,
    }
  }
}
