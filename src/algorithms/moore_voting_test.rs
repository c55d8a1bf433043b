//! Tests for `MooreVoting`.

use super::{MooreVoting, VotePass};
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::RunResult;

fn controller(values: &str) -> PlaybackController<MooreVoting> {
  let mut c = PlaybackController::new(MooreVoting);
  c.configure(&RawInput::new(values)).unwrap();
  c.start().unwrap();
  c
}

#[test]
fn candidate_two_survives_voting_pass() {
  let mut c = controller("2,2,1,1,1,2,2");
  for _ in 0..7 {
    c.step().unwrap();
  }
  let s = c.state().unwrap();
  assert_eq!(s.pass, VotePass::Verifying);
  assert_eq!(s.candidate, Some(2));
  assert_eq!(s.count, 1);
  assert_eq!(s.candidate_index, Some(6));
}

#[test]
fn majority_is_verified() {
  let mut c = controller("2,2,1,1,1,2,2");
  while !c.step().unwrap().is_completed() {}
  assert_eq!(
    c.result(),
    Some(&RunResult::Majority {
      value: 2,
      occurrences: 4
    })
  );
  assert_eq!(c.steps_taken(), 14);
}

#[test]
fn no_majority_fails_verification() {
  let mut c = controller("1,2,3,3");
  while !c.step().unwrap().is_completed() {}
  assert_eq!(c.result(), Some(&RunResult::NoMajority { candidate: 3 }));
}
