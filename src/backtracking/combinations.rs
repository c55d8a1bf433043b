//! k-element combinations of the input, in index order.

use std::ops::RangeInclusive;

use tracing::instrument;

use super::{Generator, Sequence};
use crate::error::ConfigError;
use crate::input::{RawInput, check_range, parse_bounded_values, require_int};

pub const COMBINATION_LEN: RangeInclusive<usize> = 1..=12;

#[derive(Debug, Clone, Copy, Default)]
pub struct Combinations;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationParams {
  pub values: Vec<i64>,
  pub k: usize,
}

fn choose(
  params: &CombinationParams,
  start: usize,
  current: &mut Vec<i64>,
  out: &mut Vec<Sequence>,
) {
  if current.len() == params.k {
    out.push(Sequence(current.clone()));
    return;
  }
  let remaining = params.k - current.len();
  for idx in start..=params.values.len() - remaining {
    current.push(params.values[idx]);
    choose(params, idx + 1, current, out);
    current.pop();
  }
}

impl Generator for Combinations {
  type Params = CombinationParams;
  type Solution = Sequence;

  fn name(&self) -> &'static str {
    "combinations"
  }

  /// Values plus a required `k` in `1..=n`.
  fn parse(&self, raw: &RawInput) -> Result<CombinationParams, ConfigError> {
    let values = parse_bounded_values(&raw.values, COMBINATION_LEN)?;
    let k = require_int(raw, "k")?;
    check_range("k", k, 1..=values.len() as i64)?;
    Ok(CombinationParams {
      values,
      k: k as usize,
    })
  }

  #[instrument(level = "trace", skip(self))]
  fn generate_all(&self, params: &CombinationParams) -> Vec<Sequence> {
    let mut out = Vec::new();
    choose(params, 0, &mut Vec::with_capacity(params.k), &mut out);
    out
  }
}
