//! Tests for `PrefixSum`.

use super::PrefixSum;
use crate::error::{ConfigError, Error};
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::RunResult;

fn play(raw: RawInput) -> PlaybackController<PrefixSum> {
  let mut c = PlaybackController::new(PrefixSum);
  c.configure(&raw).unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  c
}

#[test]
fn builds_table_in_n_steps() {
  let c = play(RawInput::new("3,1,4,1,5"));
  assert_eq!(
    c.result(),
    Some(&RunResult::PrefixSums {
      sums: vec![3, 4, 8, 9, 14]
    })
  );
  assert_eq!(c.steps_taken(), 5);
}

#[test]
fn answers_range_query_with_one_extra_step() {
  let c = play(
    RawInput::new("3,1,4,1,5")
      .with_param("from", 1)
      .with_param("to", 3),
  );
  assert_eq!(
    c.result(),
    Some(&RunResult::RangeSum {
      from: 1,
      to: 3,
      sum: 6
    })
  );
  assert_eq!(c.steps_taken(), 6);
}

#[test]
fn query_from_zero() {
  let c = play(RawInput::new("2,2,2").with_param("from", 0).with_param("to", 1));
  assert_eq!(
    c.result(),
    Some(&RunResult::RangeSum {
      from: 0,
      to: 1,
      sum: 4
    })
  );
}

#[test]
fn half_a_query_is_rejected() {
  let mut c = PlaybackController::new(PrefixSum);
  let err = c
    .configure(&RawInput::new("1,2").with_param("from", 0))
    .unwrap_err();
  assert_eq!(err, Error::Config(ConfigError::MissingParameter("to")));
}

#[test]
fn reversed_range_is_out_of_bounds() {
  let mut c = PlaybackController::new(PrefixSum);
  let err = c
    .configure(&RawInput::new("1,2,3").with_param("from", 2).with_param("to", 1))
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Config(ConfigError::OutOfBounds { what: "to", .. })
  ));
}
