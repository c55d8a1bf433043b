//! Tests for auto-run: timed stepping, cancellation and the snapshot stream.

use std::time::Duration;

use futures::StreamExt;
use tokio_test::{assert_pending, assert_ready, task};

use super::{
  AutoRun, AutoRunOutcome, CancelHandle, CancelToken, PlaybackController, PlaybackOptions,
  run_to_completion, step_stream,
};
use crate::algorithms::{Kadane, LinearSearch};
use crate::error::StateError;
use crate::input::RawInput;
use crate::types::{Phase, RunResult};

const DELAY: Duration = Duration::from_millis(400);

fn kadane() -> PlaybackController<Kadane> {
  let mut c = PlaybackController::new(Kadane);
  c.configure(&RawInput::new("-2,1,-3,4,-1,2,1,-5,4"))
    .unwrap();
  c.start().unwrap();
  c
}

fn kadane_result() -> RunResult {
  RunResult::MaxSubarray {
    sum: 6,
    start: 3,
    end: 6,
  }
}

#[tokio::test(start_paused = true)]
async fn runs_to_completion() {
  let mut c = kadane();
  let outcome = run_to_completion(&mut c, DELAY, &CancelToken::never())
    .await
    .unwrap();
  assert_eq!(outcome, AutoRunOutcome::Completed(kadane_result()));
  assert_eq!(c.phase(), Phase::Completed);
}

#[tokio::test(start_paused = true)]
async fn waits_the_delay_before_each_step() {
  let mut c = kadane();
  let started = tokio::time::Instant::now();
  run_to_completion(&mut c, DELAY, &CancelToken::never())
    .await
    .unwrap();
  let steps = c.steps_taken() as u32;
  assert_eq!(steps, 8);
  assert!(started.elapsed() >= DELAY * steps);
  assert!(started.elapsed() < DELAY * (steps + 1));
}

#[tokio::test(start_paused = true)]
async fn rejects_runs_that_are_not_running() {
  let mut c = PlaybackController::new(Kadane);
  let err = run_to_completion(&mut c, DELAY, &CancelToken::never())
    .await
    .unwrap_err();
  assert_eq!(
    err,
    StateError::InvalidState {
      phase: Phase::NotStarted
    }
  );
}

#[tokio::test(start_paused = true)]
async fn cancelled_before_first_step_does_not_advance() {
  let mut c = kadane();
  let handle = CancelHandle::new();
  handle.cancel();
  let outcome = run_to_completion(&mut c, DELAY, &handle.token())
    .await
    .unwrap();
  assert_eq!(outcome, AutoRunOutcome::Cancelled { steps: 0 });
  assert_eq!(c.steps_taken(), 0);
  assert_eq!(c.phase(), Phase::Running);
}

#[tokio::test(start_paused = true)]
async fn cancel_then_manual_steps_reach_the_same_result() {
  let run = AutoRun::spawn(kadane(), PlaybackOptions { step_delay: DELAY });
  tokio::time::sleep(DELAY * 3 + DELAY / 2).await;
  run.cancel();
  let (mut c, outcome) = run.join().await.unwrap();
  let Ok(AutoRunOutcome::Cancelled { steps }) = outcome else {
    panic!("expected cancellation, got {:?}", outcome);
  };
  assert_eq!(steps, 3);
  assert_eq!(c.phase(), Phase::Running);

  while !c.step().unwrap().is_completed() {}
  assert_eq!(c.result(), Some(&kadane_result()));
}

#[tokio::test(start_paused = true)]
async fn spawned_run_hands_the_controller_back() {
  let run = AutoRun::spawn(kadane(), PlaybackOptions::default());
  let (c, outcome) = run.join().await.unwrap();
  assert_eq!(outcome, Ok(AutoRunOutcome::Completed(kadane_result())));
  assert_eq!(c.snapshot().result.as_deref(), Some("max subarray sum 6 (indices 3..=6)"));
}

#[tokio::test(start_paused = true)]
async fn step_stream_yields_one_snapshot_per_step() {
  let mut c = PlaybackController::new(LinearSearch);
  c.configure(&RawInput::new("4,7,1,9,3,6").with_param("target", 9))
    .unwrap();
  c.start().unwrap();
  let frames: Vec<_> = step_stream(&mut c, DELAY, CancelToken::never())
    .collect()
    .await;
  assert_eq!(frames.len(), 4);
  assert_eq!(
    frames.iter().map(|f| f.steps).collect::<Vec<_>>(),
    vec![1, 2, 3, 4]
  );
  let last = frames.last().unwrap();
  assert_eq!(last.phase, Phase::Completed);
  assert_eq!(last.result.as_deref(), Some("found at index 3"));
}

#[tokio::test(start_paused = true)]
async fn step_stream_is_pending_until_the_delay_elapses() {
  let mut c = kadane();
  let mut stream = task::spawn(step_stream(&mut c, DELAY, CancelToken::never()));
  assert_pending!(stream.poll_next());
  tokio::time::advance(DELAY + Duration::from_millis(1)).await;
  let frame = assert_ready!(stream.poll_next()).expect("first frame");
  assert_eq!(frame.steps, 1);
}

#[tokio::test(start_paused = true)]
async fn step_stream_ends_when_cancelled() {
  let mut c = kadane();
  let handle = CancelHandle::new();
  handle.cancel();
  let frames: Vec<_> = step_stream(&mut c, DELAY, handle.token()).collect().await;
  assert!(frames.is_empty());
  assert_eq!(c.phase(), Phase::Running);
}
