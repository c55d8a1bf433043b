//! Power set, emitted in depth-first order: each node of the search tree is a subset.

use std::ops::RangeInclusive;

use tracing::instrument;

use super::{Generator, Sequence};
use crate::error::ConfigError;
use crate::input::{RawInput, parse_bounded_values};

pub const SUBSET_LEN: RangeInclusive<usize> = 1..=12;

#[derive(Debug, Clone, Copy, Default)]
pub struct Subsets;

fn expand(values: &[i64], start: usize, current: &mut Vec<i64>, out: &mut Vec<Sequence>) {
  out.push(Sequence(current.clone()));
  for idx in start..values.len() {
    current.push(values[idx]);
    expand(values, idx + 1, current, out);
    current.pop();
  }
}

impl Generator for Subsets {
  type Params = Vec<i64>;
  type Solution = Sequence;

  fn name(&self) -> &'static str {
    "subsets"
  }

  fn parse(&self, raw: &RawInput) -> Result<Vec<i64>, ConfigError> {
    parse_bounded_values(&raw.values, SUBSET_LEN)
  }

  #[instrument(level = "trace", skip(self))]
  fn generate_all(&self, values: &Vec<i64>) -> Vec<Sequence> {
    let mut out = Vec::with_capacity(1 << values.len());
    expand(values, 0, &mut Vec::new(), &mut out);
    out
  }
}
