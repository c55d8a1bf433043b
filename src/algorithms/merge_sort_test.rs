//! Tests for `MergeSort`.

use super::MergeSort;
use crate::input::RawInput;
use crate::playback::{Algorithm, PlaybackController};
use crate::types::{RunResult, StepOutcome};

fn play(values: &str) -> (RunResult, usize, usize) {
  let mut c = PlaybackController::new(MergeSort);
  c.configure(&RawInput::new(values)).unwrap();
  let bound = c.step_bound().unwrap();
  c.start().unwrap();
  loop {
    if let StepOutcome::Completed(r) = c.step().unwrap() {
      return (r, c.steps_taken(), bound);
    }
  }
}

#[test]
fn sorts_odd_length_input() {
  let (r, steps, bound) = play("38,27,43,3,9,82,10");
  assert_eq!(
    r,
    RunResult::Sorted {
      values: vec![3, 9, 10, 27, 38, 43, 82]
    }
  );
  assert!(steps <= bound);
}

#[test]
fn power_of_two_writes_every_element_per_level() {
  let (_, steps, bound) = play("4,3,2,1");
  assert_eq!(steps, 8);
  assert_eq!(bound, 8);
}

#[test]
fn bound_for_two_elements() {
  assert_eq!(MergeSort.step_bound(&vec![2, 1]), 2);
}

#[test]
fn merge_is_stable_for_equal_keys() {
  let (r, _, _) = play("2,2,1");
  assert_eq!(
    r,
    RunResult::Sorted {
      values: vec![1, 2, 2]
    }
  );
}
