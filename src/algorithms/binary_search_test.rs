//! Tests for `BinarySearch`.

use super::BinarySearch;
use crate::error::{ConfigError, Error};
use crate::input::RawInput;
use crate::playback::{Algorithm, PlaybackController};
use crate::types::{RunResult, StepOutcome};

fn play(values: &str, target: i64) -> PlaybackController<BinarySearch> {
  let mut c = PlaybackController::new(BinarySearch);
  c.configure(&RawInput::new(values).with_param("target", target))
    .unwrap();
  c.start().unwrap();
  while c.step().map(|o| !o.is_completed()).unwrap() {}
  c
}

#[test]
fn finds_eighteen_at_index_five() {
  let c = play("3,5,7,9,15,18,22", 18);
  assert_eq!(c.result(), Some(&RunResult::Found { index: 5 }));
  assert_eq!(c.state().unwrap().probes, vec![3, 5]);
}

#[test]
fn probes_stay_within_log_bound() {
  let values = "1,2,3,4,5,6,7,8,9,10,11,12";
  for target in [0, 1, 6, 12, 13] {
    let c = play(values, target);
    let bound = c.step_bound().unwrap();
    assert!(c.steps_taken() <= bound, "target {}", target);
  }
  let input = super::SearchInput {
    values: (0..12).collect(),
    target: 0,
  };
  assert_eq!(BinarySearch.step_bound(&input), 4);
}

#[test]
fn missing_target_reports_not_found() {
  let c = play("3,5,7,9", 8);
  assert_eq!(c.result(), Some(&RunResult::NotFound));
  assert_eq!(c.state().unwrap().probes, vec![2, 3]);
}

#[test]
fn rejects_unsorted_input() {
  let mut c = PlaybackController::new(BinarySearch);
  let err = c
    .configure(&RawInput::new("3,1,2").with_param("target", 1))
    .unwrap_err();
  assert_eq!(err, Error::Config(ConfigError::NotSorted));
  assert_eq!(c.last_error(), Some(&ConfigError::NotSorted));
}

#[test]
fn first_step_discards_left_half() {
  let mut c = PlaybackController::new(BinarySearch);
  c.configure(&RawInput::new("3,5,7,9,15,18,22").with_param("target", 18))
    .unwrap();
  c.start().unwrap();
  assert_eq!(
    c.step().unwrap(),
    StepOutcome::Continue("a[3]=9 < 18: discard left half".to_string())
  );
}
