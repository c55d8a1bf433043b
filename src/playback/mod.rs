//! Playback: the generic step-driven state machine and its timed auto-run.

mod algorithm;
mod auto_run;
#[cfg(test)]
mod auto_run_test;
mod cancel;
mod controller;

pub use algorithm::Algorithm;
pub use auto_run::{
  AutoRun, AutoRunOutcome, DEFAULT_STEP_DELAY, PlaybackOptions, run_to_completion, step_stream,
};
pub use cancel::{CancelHandle, CancelToken};
pub use controller::{Playback, PlaybackController};
