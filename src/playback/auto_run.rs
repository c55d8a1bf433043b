//! Timed auto-play: the same discrete step, repeated on a fixed cadence until
//! completion or cancellation.
//!
//! - [run_to_completion]: drive a borrowed playback in the current task.
//! - [AutoRun]: move a playback into a background task and get it back on join.
//! - [step_stream]: the same loop as a stream of snapshots, one per step.

use std::time::Duration;

use async_stream::stream;
use futures::Stream;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, instrument};

use super::{CancelHandle, CancelToken, Playback};
use crate::error::StateError;
use crate::types::{Phase, RunResult, Snapshot, StepOutcome};

/// Delay between auto-run steps when none is configured.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(400);

/// How an auto-run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoRunOutcome {
  Completed(RunResult),
  /// Stopped between steps; the run is still `Running` and can be resumed.
  Cancelled { steps: usize },
}

/// Auto-run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackOptions {
  pub step_delay: Duration,
}

impl Default for PlaybackOptions {
  fn default() -> Self {
    Self {
      step_delay: DEFAULT_STEP_DELAY,
    }
  }
}

/// Sleeps `delay`, then steps, until the run completes or `cancel` fires.
///
/// Cancellation is checked before every step, so a cancelled run is never
/// advanced again by this loop.
#[instrument(level = "trace", skip(playback, cancel), fields(algorithm = playback.name()))]
pub async fn run_to_completion<P: Playback + ?Sized>(
  playback: &mut P,
  delay: Duration,
  cancel: &CancelToken,
) -> Result<AutoRunOutcome, StateError> {
  let phase = playback.phase();
  if phase != Phase::Running {
    return Err(StateError::InvalidState { phase });
  }
  let mut steps = 0;
  loop {
    tokio::select! {
      biased;
      _ = cancel.cancelled() => {
        info!(steps, "auto-run cancelled");
        return Ok(AutoRunOutcome::Cancelled { steps });
      }
      _ = tokio::time::sleep(delay) => {}
    }
    match playback.step()? {
      StepOutcome::Continue(annotation) => {
        steps += 1;
        debug!(steps, %annotation, "auto-run step");
      }
      StepOutcome::Completed(result) => return Ok(AutoRunOutcome::Completed(result)),
    }
  }
}

/// An auto-run executing on a background tokio task.
///
/// The playback is moved into the task, so nothing else can step it while
/// the run is in flight; [AutoRun::join] hands it back.
pub struct AutoRun<P> {
  handle: CancelHandle,
  task: JoinHandle<(P, Result<AutoRunOutcome, StateError>)>,
}

impl<P> AutoRun<P>
where
  P: Playback + Send + 'static,
{
  /// Spawns the auto-run. Must be called within a tokio runtime.
  pub fn spawn(mut playback: P, options: PlaybackOptions) -> Self {
    let handle = CancelHandle::new();
    let token = handle.token();
    let task = tokio::spawn(async move {
      let outcome = run_to_completion(&mut playback, options.step_delay, &token).await;
      (playback, outcome)
    });
    Self { handle, task }
  }

  /// Requests cancellation; takes effect before the next step fires.
  pub fn cancel(&self) {
    self.handle.cancel();
  }

  pub fn is_finished(&self) -> bool {
    self.task.is_finished()
  }

  /// Waits for the task and returns the playback with the auto-run outcome.
  pub async fn join(self) -> Result<(P, Result<AutoRunOutcome, StateError>), JoinError> {
    self.task.await
  }
}

/// Auto-run as a stream: yields a snapshot after each step and ends on
/// completion, cancellation or if the playback is not `Running`.
pub fn step_stream<'a, P: Playback + ?Sized + 'a>(
  playback: &'a mut P,
  delay: Duration,
  cancel: CancelToken,
) -> impl Stream<Item = Snapshot> + 'a {
  stream! {
    while playback.phase() == Phase::Running {
      tokio::select! {
        biased;
        _ = cancel.cancelled() => break,
        _ = tokio::time::sleep(delay) => {}
      }
      if playback.step().is_err() {
        break;
      }
      yield playback.snapshot();
    }
  }
}
