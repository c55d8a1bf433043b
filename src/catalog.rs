//! Runtime lookup of every algorithm by name.
//!
//! Callers that choose an algorithm from user input (the CLI, a UI shell)
//! go through [AlgorithmId] to get a type-erased [Playback] or a navigator
//! over rendered backtracking solutions.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::algorithms::TEXT_LEN;
use crate::backtracking::{Generator, SolutionNavigator, explore};
use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput};
use crate::playback::{Algorithm, Playback, PlaybackController};

/// Grouping shown in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
  Sorting,
  Searching,
  ArrayTechnique,
  StringMatching,
  Backtracking,
}

impl fmt::Display for Family {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Family::Sorting => "sorting",
      Family::Searching => "searching",
      Family::ArrayTechnique => "array technique",
      Family::StringMatching => "string matching",
      Family::Backtracking => "backtracking",
    };
    f.write_str(s)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
  BubbleSort,
  SelectionSort,
  InsertionSort,
  QuickSort,
  MergeSort,
  LinearSearch,
  BinarySearch,
  Kadane,
  SlidingWindow,
  PrefixSum,
  MooreVoting,
  SubarraySum,
  TwoPointer,
  DutchFlag,
  NaiveMatch,
  RabinKarp,
  Kmp,
  NQueens,
  Sudoku,
  Permutations,
  Combinations,
  Subsets,
  RatMaze,
  WordSearch,
}

impl AlgorithmId {
  pub const ALL: [AlgorithmId; 24] = [
    AlgorithmId::BubbleSort,
    AlgorithmId::SelectionSort,
    AlgorithmId::InsertionSort,
    AlgorithmId::QuickSort,
    AlgorithmId::MergeSort,
    AlgorithmId::LinearSearch,
    AlgorithmId::BinarySearch,
    AlgorithmId::Kadane,
    AlgorithmId::SlidingWindow,
    AlgorithmId::PrefixSum,
    AlgorithmId::MooreVoting,
    AlgorithmId::SubarraySum,
    AlgorithmId::TwoPointer,
    AlgorithmId::DutchFlag,
    AlgorithmId::NaiveMatch,
    AlgorithmId::RabinKarp,
    AlgorithmId::Kmp,
    AlgorithmId::NQueens,
    AlgorithmId::Sudoku,
    AlgorithmId::Permutations,
    AlgorithmId::Combinations,
    AlgorithmId::Subsets,
    AlgorithmId::RatMaze,
    AlgorithmId::WordSearch,
  ];

  /// Kebab-case name, identical to the algorithm's own `name()`.
  pub fn name(self) -> &'static str {
    match self {
      AlgorithmId::BubbleSort => "bubble-sort",
      AlgorithmId::SelectionSort => "selection-sort",
      AlgorithmId::InsertionSort => "insertion-sort",
      AlgorithmId::QuickSort => "quick-sort",
      AlgorithmId::MergeSort => "merge-sort",
      AlgorithmId::LinearSearch => "linear-search",
      AlgorithmId::BinarySearch => "binary-search",
      AlgorithmId::Kadane => "kadane",
      AlgorithmId::SlidingWindow => "sliding-window",
      AlgorithmId::PrefixSum => "prefix-sum",
      AlgorithmId::MooreVoting => "moore-voting",
      AlgorithmId::SubarraySum => "subarray-sum",
      AlgorithmId::TwoPointer => "two-pointer",
      AlgorithmId::DutchFlag => "dutch-flag",
      AlgorithmId::NaiveMatch => "naive-match",
      AlgorithmId::RabinKarp => "rabin-karp",
      AlgorithmId::Kmp => "kmp",
      AlgorithmId::NQueens => "n-queens",
      AlgorithmId::Sudoku => "sudoku",
      AlgorithmId::Permutations => "permutations",
      AlgorithmId::Combinations => "combinations",
      AlgorithmId::Subsets => "subsets",
      AlgorithmId::RatMaze => "rat-maze",
      AlgorithmId::WordSearch => "word-search",
    }
  }

  pub fn family(self) -> Family {
    use AlgorithmId::*;
    match self {
      BubbleSort | SelectionSort | InsertionSort | QuickSort | MergeSort => Family::Sorting,
      LinearSearch | BinarySearch => Family::Searching,
      Kadane | SlidingWindow | PrefixSum | MooreVoting | SubarraySum | TwoPointer | DutchFlag => {
        Family::ArrayTechnique
      }
      NaiveMatch | RabinKarp | Kmp => Family::StringMatching,
      NQueens | Sudoku | Permutations | Combinations | Subsets | RatMaze | WordSearch => {
        Family::Backtracking
      }
    }
  }

  /// Input hint for listings: what goes in the values field and which params apply.
  pub fn usage(self) -> &'static str {
    use AlgorithmId::*;
    match self {
      BubbleSort | SelectionSort | InsertionSort | QuickSort | MergeSort | Kadane
      | MooreVoting => "values",
      LinearSearch | SubarraySum => "values, target=",
      BinarySearch | TwoPointer => "sorted values, target=",
      SlidingWindow => "values, window=",
      PrefixSum => "values [from= to=]",
      DutchFlag => "values in 0..=2",
      NaiveMatch | RabinKarp | Kmp => "text, pattern=",
      NQueens => "n=",
      Sudoku => "81 cells (0 or . for blank)",
      Permutations | Subsets => "values",
      Combinations => "values, k=",
      RatMaze => "grid= rows of 0/1 separated by ;",
      WordSearch => "board= rows separated by ;, word=",
    }
  }

  /// A fresh step-driven controller, or `None` for backtracking entries.
  pub fn playback(self) -> Option<Box<dyn Playback + Send>> {
    fn boxed<A>(algorithm: A) -> Option<Box<dyn Playback + Send>>
    where
      A: Algorithm + Send + 'static,
      A::Input: Send,
      A::State: Send,
    {
      Some(Box::new(PlaybackController::new(algorithm)))
    }
    use AlgorithmId::*;
    match self {
      BubbleSort => boxed(crate::algorithms::BubbleSort),
      SelectionSort => boxed(crate::algorithms::SelectionSort),
      InsertionSort => boxed(crate::algorithms::InsertionSort),
      QuickSort => boxed(crate::algorithms::QuickSort),
      MergeSort => boxed(crate::algorithms::MergeSort),
      LinearSearch => boxed(crate::algorithms::LinearSearch),
      BinarySearch => boxed(crate::algorithms::BinarySearch),
      Kadane => boxed(crate::algorithms::Kadane),
      SlidingWindow => boxed(crate::algorithms::SlidingWindow),
      PrefixSum => boxed(crate::algorithms::PrefixSum),
      MooreVoting => boxed(crate::algorithms::MooreVoting),
      SubarraySum => boxed(crate::algorithms::SubarraySum),
      TwoPointer => boxed(crate::algorithms::TwoPointer),
      DutchFlag => boxed(crate::algorithms::DutchFlag),
      NaiveMatch => boxed(crate::algorithms::NaiveMatch),
      RabinKarp => boxed(crate::algorithms::RabinKarp),
      Kmp => boxed(crate::algorithms::Kmp),
      NQueens | Sudoku | Permutations | Combinations | Subsets | RatMaze | WordSearch => None,
    }
  }

  /// Runs a backtracking generator over `raw`; `None` for step-driven entries.
  pub fn explore(self, raw: &RawInput) -> Option<Result<Solutions, ConfigError>> {
    fn rendered<G: Generator>(generator: G, raw: &RawInput) -> Option<Result<Solutions, ConfigError>> {
      Some(explore(&generator, raw).map(|nav| nav.map(RenderedSolution::from_solution)))
    }
    use AlgorithmId::*;
    match self {
      NQueens => rendered(crate::backtracking::NQueens, raw),
      Sudoku => rendered(crate::backtracking::Sudoku, raw),
      Permutations => rendered(crate::backtracking::Permutations, raw),
      Combinations => rendered(crate::backtracking::Combinations, raw),
      Subsets => rendered(crate::backtracking::Subsets, raw),
      RatMaze => rendered(crate::backtracking::RatMaze, raw),
      WordSearch => rendered(crate::backtracking::WordSearch, raw),
      _ => None,
    }
  }
}

impl fmt::Display for AlgorithmId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for AlgorithmId {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
    AlgorithmId::ALL
      .into_iter()
      .find(|id| id.name() == wanted)
      .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
  }
}

/// Navigator over rendered solutions of any generator.
pub type Solutions = SolutionNavigator<RenderedSolution>;

/// A backtracking solution in display and JSON form, independent of its generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSolution {
  pub text: String,
  pub value: serde_json::Value,
}

impl RenderedSolution {
  fn from_solution<S: Serialize + fmt::Display>(solution: S) -> Self {
    Self {
      text: solution.to_string(),
      value: serde_json::to_value(&solution).unwrap_or(serde_json::Value::Null),
    }
  }
}

impl fmt::Display for RenderedSolution {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

const RANDOM_VALUES: std::ops::RangeInclusive<i64> = -20..=30;
const RANDOM_ALPHABET: [char; 3] = ['A', 'B', 'C'];

/// Builds a random but valid input for a step-driven algorithm, filling in
/// any required parameters. `len` is clamped to the lengths the algorithm
/// accepts. `None` for backtracking.
pub fn random_input<R: Rng>(id: AlgorithmId, len: usize, rng: &mut R) -> Option<RawInput> {
  let bounds = match id.family() {
    Family::Backtracking => return None,
    Family::StringMatching => TEXT_LEN,
    _ => DEFAULT_LEN,
  };
  let len = len.clamp(*bounds.start(), *bounds.end());
  let mut values: Vec<i64> = match id.family() {
    Family::StringMatching => {
      let text: String = (0..len)
        .map(|_| RANDOM_ALPHABET[rng.gen_range(0..RANDOM_ALPHABET.len())])
        .collect();
      let m = rng.gen_range(1..=len.min(3));
      let at = rng.gen_range(0..=len - m);
      let pattern = text[at..at + m].to_string();
      return Some(RawInput::new(text).with_param("pattern", pattern));
    }
    _ if id == AlgorithmId::DutchFlag => (0..len).map(|_| rng.gen_range(0..=2)).collect(),
    _ => (0..len).map(|_| rng.gen_range(RANDOM_VALUES)).collect(),
  };
  if matches!(id, AlgorithmId::BinarySearch | AlgorithmId::TwoPointer) {
    values.sort_unstable();
  }
  let joined = values
    .iter()
    .map(|v| v.to_string())
    .collect::<Vec<_>>()
    .join(",");
  let raw = RawInput::new(joined);
  let raw = match id {
    AlgorithmId::LinearSearch | AlgorithmId::BinarySearch => {
      let target = values.choose(rng).copied().unwrap_or_default();
      raw.with_param("target", target)
    }
    AlgorithmId::TwoPointer => {
      let a = rng.gen_range(0..len - 1);
      let b = rng.gen_range(a + 1..len);
      raw.with_param("target", values[a] + values[b])
    }
    AlgorithmId::SubarraySum => {
      let a = rng.gen_range(0..len);
      let b = rng.gen_range(a..len);
      raw.with_param("target", values[a..=b].iter().sum::<i64>())
    }
    AlgorithmId::SlidingWindow => raw.with_param("window", rng.gen_range(1..=len.min(4))),
    AlgorithmId::PrefixSum => {
      let from = rng.gen_range(0..len);
      let to = rng.gen_range(from..len);
      raw.with_param("from", from).with_param("to", to)
    }
    _ => raw,
  };
  Some(raw)
}
