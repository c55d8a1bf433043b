//! # algolens
//!
//! Step-driven playback of classic algorithms, for visualization and teaching.
//!
//! ## Architecture
//!
//! - [playback]: a generic state machine ([PlaybackController]) that drives any
//!   [Algorithm] one animatable step at a time, plus a timed auto-run on tokio
//!   that can be cancelled between steps.
//! - [algorithms]: sorts, searches, array techniques and string matchers, each
//!   a small strategy implementing [Algorithm].
//! - [backtracking]: eager exhaustive generators (N-Queens, Sudoku, ...) and a
//!   cyclic [SolutionNavigator] over their results.
//! - [catalog]: runtime lookup by name, for callers that pick an algorithm
//!   from user input.
//!
//! A renderer reads [Snapshot]s: cells with a [CellState], named cursors, the
//! current annotation and, once complete, the result.
//!
//! Set `RUST_LOG=algolens=trace` for per-step spans and events.

pub mod algorithms;
pub mod backtracking;
pub mod catalog;
pub mod error;
#[cfg(test)]
mod error_test;
pub mod input;
#[cfg(test)]
mod input_test;
pub mod playback;
pub mod transcript_io;
pub mod types;

pub use backtracking::{Generation, Generator, SolutionNavigator, explore};
pub use catalog::{AlgorithmId, Family, RenderedSolution, Solutions, random_input};
pub use error::{ConfigError, Error, StateError, TranscriptError};
pub use input::RawInput;
pub use playback::{
  Algorithm, AutoRun, AutoRunOutcome, CancelHandle, CancelToken, Playback, PlaybackController,
  PlaybackOptions, run_to_completion, step_stream,
};
pub use transcript_io::{load_transcript, save_transcript};
pub use types::{Cell, CellState, Cursor, Phase, RunResult, Snapshot, StepOutcome, Transcript};
