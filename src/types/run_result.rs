//! Terminal summary of a completed run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final value produced when a run reaches `Completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunResult {
  Sorted { values: Vec<i64> },
  /// Three-way partition (Dutch national flag) output.
  Partitioned { values: Vec<i64> },
  Found { index: usize },
  NotFound,
  MaxSubarray { sum: i64, start: usize, end: usize },
  MaxWindow { sum: i64, start: usize, end: usize },
  PrefixSums { sums: Vec<i64> },
  RangeSum { from: usize, to: usize, sum: i64 },
  Majority { value: i64, occurrences: usize },
  NoMajority { candidate: i64 },
  Subarray { start: usize, end: usize },
  NoSubarray,
  Pair { left: usize, right: usize },
  NoPair,
  Matches { positions: Vec<usize> },
}

fn join(values: &[impl fmt::Display]) -> String {
  values
    .iter()
    .map(|v| v.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}

impl fmt::Display for RunResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RunResult::Sorted { values } => write!(f, "sorted: [{}]", join(values)),
      RunResult::Partitioned { values } => write!(f, "partitioned: [{}]", join(values)),
      RunResult::Found { index } => write!(f, "found at index {}", index),
      RunResult::NotFound => write!(f, "not found"),
      RunResult::MaxSubarray { sum, start, end } => {
        write!(f, "max subarray sum {} (indices {}..={})", sum, start, end)
      }
      RunResult::MaxWindow { sum, start, end } => {
        write!(f, "max window sum {} (indices {}..={})", sum, start, end)
      }
      RunResult::PrefixSums { sums } => write!(f, "prefix sums: [{}]", join(sums)),
      RunResult::RangeSum { from, to, sum } => {
        write!(f, "sum of indices {}..={} is {}", from, to, sum)
      }
      RunResult::Majority { value, occurrences } => {
        write!(f, "majority element {} ({} occurrences)", value, occurrences)
      }
      RunResult::NoMajority { candidate } => {
        write!(f, "no majority element (candidate {} failed verification)", candidate)
      }
      RunResult::Subarray { start, end } => write!(f, "subarray spans indices {}..={}", start, end),
      RunResult::NoSubarray => write!(f, "no subarray matches the target"),
      RunResult::Pair { left, right } => write!(f, "pair found at indices {} and {}", left, right),
      RunResult::NoPair => write!(f, "no pair matches the target"),
      RunResult::Matches { positions } if positions.is_empty() => write!(f, "no matches"),
      RunResult::Matches { positions } => write!(f, "matches at [{}]", join(positions)),
    }
  }
}
