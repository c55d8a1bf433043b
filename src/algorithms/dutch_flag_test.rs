//! Tests for `DutchFlag`.

use super::DutchFlag;
use crate::error::{ConfigError, Error};
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::RunResult;

#[test]
fn partitions_in_at_most_n_steps() {
  let mut c = PlaybackController::new(DutchFlag);
  c.configure(&RawInput::new("2,0,2,1,1,0")).unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  assert_eq!(
    c.result(),
    Some(&RunResult::Partitioned {
      values: vec![0, 0, 1, 1, 2, 2]
    })
  );
  assert!(c.steps_taken() <= 6);
}

#[test]
fn rejects_values_outside_zero_to_two() {
  let mut c = PlaybackController::new(DutchFlag);
  let err = c.configure(&RawInput::new("0,1,3")).unwrap_err();
  assert!(matches!(
    err,
    Error::Config(ConfigError::OutOfBounds { what: "value", .. })
  ));
}
