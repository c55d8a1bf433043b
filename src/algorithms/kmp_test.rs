//! Tests for `Kmp`.

use super::Kmp;
use super::kmp::failure_table;
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::RunResult;

#[test]
fn failure_table_examples() {
  let chars = |s: &str| s.chars().collect::<Vec<_>>();
  assert_eq!(failure_table(&chars("AAAA")), vec![0, 1, 2, 3]);
  assert_eq!(failure_table(&chars("ABABCABAB")), vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
  assert_eq!(failure_table(&chars("AABAACAABAA")), vec![0, 1, 0, 1, 2, 0, 1, 2, 3, 4, 5]);
}

#[test]
fn finds_matches_within_two_n_steps() {
  let mut c = PlaybackController::new(Kmp);
  c.configure(&RawInput::new("ABABDABACDABABCABAB").with_param("pattern", "ABABCABAB"))
    .unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  assert_eq!(
    c.result(),
    Some(&RunResult::Matches {
      positions: vec![10]
    })
  );
  assert!(c.steps_taken() <= c.step_bound().unwrap());
}

#[test]
fn overlapping_matches() {
  let mut c = PlaybackController::new(Kmp);
  c.configure(&RawInput::new("AAAAA").with_param("pattern", "AA"))
    .unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  assert_eq!(
    c.result(),
    Some(&RunResult::Matches {
      positions: vec![0, 1, 2, 3]
    })
  );
}
