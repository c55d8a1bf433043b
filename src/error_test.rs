//! Tests for error display and conversions.

use crate::error::{ConfigError, Error, StateError};
use crate::types::Phase;

#[test]
fn invalid_format_names_token() {
  let e = ConfigError::invalid("x7", "integer");
  assert_eq!(e.to_string(), "invalid format: \"x7\" is not a valid integer");
}

#[test]
fn out_of_bounds_names_field() {
  let e = ConfigError::out_of_bounds("values", "expected 2..=12 elements, got 1");
  assert!(e.to_string().starts_with("values out of bounds"));
}

#[test]
fn invalid_state_mentions_phase() {
  let e = StateError::InvalidState {
    phase: Phase::Completed,
  };
  assert_eq!(e.to_string(), "operation not valid while completed");
}

#[test]
fn umbrella_error_converts_from_both_kinds() {
  let c: Error = ConfigError::NotSorted.into();
  let s: Error = StateError::AlreadyRunning.into();
  assert!(matches!(c, Error::Config(ConfigError::NotSorted)));
  assert!(matches!(s, Error::State(StateError::AlreadyRunning)));
  assert_eq!(c.to_string(), "input must be sorted in ascending order");
}
