//! Tests for `Kadane`.

use super::Kadane;
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::{CellState, RunResult, StepOutcome};

fn play(values: &str) -> PlaybackController<Kadane> {
  let mut c = PlaybackController::new(Kadane);
  c.configure(&RawInput::new(values)).unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  c
}

#[test]
fn classic_example_sums_to_six() {
  let c = play("-2,1,-3,4,-1,2,1,-5,4");
  assert_eq!(
    c.result(),
    Some(&RunResult::MaxSubarray {
      sum: 6,
      start: 3,
      end: 6
    })
  );
  assert_eq!(c.steps_taken(), 8);
  let matched: Vec<_> = c
    .snapshot()
    .cells
    .iter()
    .enumerate()
    .filter(|(_, c)| c.state == CellState::Matched)
    .map(|(k, _)| k)
    .collect();
  assert_eq!(matched, vec![3, 4, 5, 6]);
}

#[test]
fn all_negative_picks_largest_element() {
  let c = play("-8,-3,-6,-2,-5");
  assert_eq!(
    c.result(),
    Some(&RunResult::MaxSubarray {
      sum: -2,
      start: 3,
      end: 3
    })
  );
}

#[test]
fn restart_is_annotated() {
  let mut c = PlaybackController::new(Kadane);
  c.configure(&RawInput::new("-2,1,3")).unwrap();
  c.start().unwrap();
  assert_eq!(
    c.step().unwrap(),
    StepOutcome::Continue(
      "running sum was negative: restart at a[1]=1; new best 1".to_string()
    )
  );
}
