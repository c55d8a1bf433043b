//! Tests for `SubarraySum`.

use super::SubarraySum;
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::{CellState, RunResult};

fn play(values: &str, target: i64) -> PlaybackController<SubarraySum> {
  let mut c = PlaybackController::new(SubarraySum);
  c.configure(&RawInput::new(values).with_param("target", target))
    .unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  c
}

#[test]
fn finds_two_three_four() {
  let c = play("1,2,3,4,5", 9);
  assert_eq!(c.result(), Some(&RunResult::Subarray { start: 1, end: 3 }));
  assert_eq!(c.steps_taken(), 4);
  let matched: Vec<_> = c
    .snapshot()
    .cells
    .iter()
    .filter(|c| c.state == CellState::Matched)
    .map(|c| c.label.clone())
    .collect();
  assert_eq!(matched, vec!["2", "3", "4"]);
}

#[test]
fn handles_negative_values() {
  let c = play("10,2,-2,-20,10", -10);
  assert_eq!(c.result(), Some(&RunResult::Subarray { start: 0, end: 3 }));
}

#[test]
fn prefix_from_start_matches() {
  let c = play("4,5,1", 9);
  assert_eq!(c.result(), Some(&RunResult::Subarray { start: 0, end: 1 }));
}

#[test]
fn reports_no_subarray() {
  let c = play("1,2,3", 7);
  assert_eq!(c.result(), Some(&RunResult::NoSubarray));
  assert_eq!(c.steps_taken(), 3);
}
