//! Published playback types: phases, cells, cursors, results and snapshots.
//!
//! These are what a renderer reads; they serialize with serde.

mod cell;
mod cursor;
mod phase;
mod run_result;
mod snapshot;
#[cfg(test)]
mod snapshot_test;
mod step_outcome;
mod transcript;
#[cfg(test)]
mod transcript_test;

pub use cell::{Cell, CellState};
pub use cursor::Cursor;
pub use phase::Phase;
pub use run_result::RunResult;
pub use snapshot::Snapshot;
pub use step_outcome::StepOutcome;
pub use transcript::{TRANSCRIPT_VERSION, Transcript};
