//! Raw user input and the validation helpers every algorithm parses it with.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use tracing::instrument;

use crate::error::ConfigError;

/// Default element-count bounds for array inputs.
pub const DEFAULT_LEN: RangeInclusive<usize> = 2..=12;

/// Bounds on individual values so labels stay short when rendered.
pub const VALUE_RANGE: RangeInclusive<i64> = -999..=999;

/// Unvalidated input as typed by a user: a primary text field plus named parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
  /// The main field, e.g. `"4, 7, 1, 9"` or the text to search in.
  pub values: String,
  /// Named scalar parameters such as `target`, `window` or `pattern`.
  pub params: BTreeMap<String, String>,
}

impl RawInput {
  pub fn new(values: impl Into<String>) -> Self {
    Self {
      values: values.into(),
      params: BTreeMap::new(),
    }
  }

  pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
    self.params.insert(key.into(), value.to_string());
    self
  }

  /// Returns a trimmed, non-empty parameter value.
  pub fn param(&self, key: &str) -> Option<&str> {
    self
      .params
      .get(key)
      .map(|v| v.trim())
      .filter(|v| !v.is_empty())
  }

  /// Parses `key=value` pairs as given on a command line.
  pub fn parse_param(pair: &str) -> Result<(String, String), ConfigError> {
    match pair.split_once('=') {
      Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.trim().to_string())),
      _ => Err(ConfigError::invalid(pair, "key=value pair")),
    }
  }
}

/// Parses a comma and/or whitespace separated list of integers.
#[instrument(level = "trace")]
pub fn parse_values(raw: &str) -> Result<Vec<i64>, ConfigError> {
  raw
    .split(|c: char| c == ',' || c.is_whitespace())
    .filter(|t| !t.is_empty())
    .map(|t| t.parse::<i64>().map_err(|_| ConfigError::invalid(t, "integer")))
    .collect()
}

/// Parses integers and checks both the element count and each value's range.
pub fn parse_bounded_values(
  raw: &str,
  len: RangeInclusive<usize>,
) -> Result<Vec<i64>, ConfigError> {
  let values = parse_values(raw)?;
  check_len("values", values.len(), len)?;
  for v in &values {
    check_range("value", *v, VALUE_RANGE)?;
  }
  Ok(values)
}

/// Reads a required integer parameter.
pub fn require_int(raw: &RawInput, key: &'static str) -> Result<i64, ConfigError> {
  let token = raw.param(key).ok_or(ConfigError::MissingParameter(key))?;
  token
    .parse::<i64>()
    .map_err(|_| ConfigError::invalid(token, "integer"))
}

/// Reads an optional integer parameter.
pub fn optional_int(raw: &RawInput, key: &'static str) -> Result<Option<i64>, ConfigError> {
  match raw.param(key) {
    Some(_) => require_int(raw, key).map(Some),
    None => Ok(None),
  }
}

pub fn check_len(
  what: &'static str,
  len: usize,
  bounds: RangeInclusive<usize>,
) -> Result<(), ConfigError> {
  if bounds.contains(&len) {
    Ok(())
  } else {
    Err(ConfigError::out_of_bounds(
      what,
      format!(
        "expected {}..={} elements, got {}",
        bounds.start(),
        bounds.end(),
        len
      ),
    ))
  }
}

pub fn check_range(
  what: &'static str,
  value: i64,
  bounds: RangeInclusive<i64>,
) -> Result<(), ConfigError> {
  if bounds.contains(&value) {
    Ok(())
  } else {
    Err(ConfigError::out_of_bounds(
      what,
      format!(
        "expected {}..={}, got {}",
        bounds.start(),
        bounds.end(),
        value
      ),
    ))
  }
}

/// Fails with [ConfigError::NotSorted] unless `values` is non-decreasing.
pub fn check_sorted(values: &[i64]) -> Result<(), ConfigError> {
  if values.windows(2).all(|w| w[0] <= w[1]) {
    Ok(())
  } else {
    Err(ConfigError::NotSorted)
  }
}
