//! Tests for `QuickSort`.

use super::QuickSort;
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::{CellState, RunResult, StepOutcome};

fn play(values: &str) -> (RunResult, usize) {
  let mut c = PlaybackController::new(QuickSort);
  c.configure(&RawInput::new(values)).unwrap();
  c.start().unwrap();
  loop {
    if let StepOutcome::Completed(r) = c.step().unwrap() {
      return (r, c.steps_taken());
    }
  }
}

#[test]
fn sorts_mixed_input() {
  let (r, steps) = play("10,80,30,90,40,50,70");
  assert_eq!(
    r,
    RunResult::Sorted {
      values: vec![10, 30, 40, 50, 70, 80, 90]
    }
  );
  assert!(steps <= 21);
}

#[test]
fn two_elements_take_one_step() {
  let (r, steps) = play("2,1");
  assert_eq!(r, RunResult::Sorted { values: vec![1, 2] });
  assert_eq!(steps, 1);
}

#[test]
fn sorted_input_hits_quadratic_bound() {
  let (_, steps) = play("1,2,3,4,5");
  assert_eq!(steps, 10);
}

#[test]
fn pivot_is_highlighted_at_start() {
  let mut c = PlaybackController::new(QuickSort);
  c.configure(&RawInput::new("3,1,2")).unwrap();
  c.start().unwrap();
  let snap = c.snapshot();
  assert_eq!(snap.cells[2].state, CellState::Pivot);
  assert_eq!(snap.annotation, "Partition 0..=2 around pivot 2");
}
