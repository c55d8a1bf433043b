//! Tests for `TwoPointer`.

use super::TwoPointer;
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::RunResult;

fn play(values: &str, target: i64) -> PlaybackController<TwoPointer> {
  let mut c = PlaybackController::new(TwoPointer);
  c.configure(&RawInput::new(values).with_param("target", target))
    .unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  c
}

#[test]
fn finds_pair() {
  let c = play("1,2,4,7,11,15", 15);
  assert_eq!(c.result(), Some(&RunResult::Pair { left: 2, right: 4 }));
}

#[test]
fn no_pair_within_bound() {
  let c = play("1,2,3,4", 100);
  assert_eq!(c.result(), Some(&RunResult::NoPair));
  assert!(c.steps_taken() <= 3);
}
