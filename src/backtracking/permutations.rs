//! Permutations of the input positions (duplicate values give duplicate rows).

use std::ops::RangeInclusive;

use tracing::instrument;

use super::{Generator, Sequence};
use crate::error::ConfigError;
use crate::input::{RawInput, parse_bounded_values};

pub const PERMUTATION_LEN: RangeInclusive<usize> = 1..=8;

#[derive(Debug, Clone, Copy, Default)]
pub struct Permutations;

fn permute(values: &[i64], used: &mut [bool], current: &mut Vec<i64>, out: &mut Vec<Sequence>) {
  if current.len() == values.len() {
    out.push(Sequence(current.clone()));
    return;
  }
  for k in 0..values.len() {
    if used[k] {
      continue;
    }
    used[k] = true;
    current.push(values[k]);
    permute(values, used, current, out);
    current.pop();
    used[k] = false;
  }
}

impl Generator for Permutations {
  type Params = Vec<i64>;
  type Solution = Sequence;

  fn name(&self) -> &'static str {
    "permutations"
  }

  fn parse(&self, raw: &RawInput) -> Result<Vec<i64>, ConfigError> {
    parse_bounded_values(&raw.values, PERMUTATION_LEN)
  }

  #[instrument(level = "trace", skip(self))]
  fn generate_all(&self, values: &Vec<i64>) -> Vec<Sequence> {
    let mut out = Vec::new();
    let mut used = vec![false; values.len()];
    permute(values, &mut used, &mut Vec::with_capacity(values.len()), &mut out);
    out
  }
}
