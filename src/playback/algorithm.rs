//! The strategy a [PlaybackController](super::PlaybackController) drives.

use std::fmt;

use crate::error::ConfigError;
use crate::input::RawInput;
use crate::types::{Cell, Cursor, StepOutcome};

/// A textbook algorithm body split into individually animatable steps.
///
/// Implementations are small stateless values; all run state lives in
/// [Algorithm::State], owned by the controller.
pub trait Algorithm {
  /// Validated input, fixed for the lifetime of a run.
  type Input: Clone + fmt::Debug;
  /// Cursor positions, aggregates and any working copy of the data.
  type State: Clone + fmt::Debug;

  /// Catalog name, e.g. `bubble-sort`.
  fn name(&self) -> &'static str;

  /// Validates raw user input.
  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError>;

  /// Initial state plus the annotation published on start.
  fn start(&self, input: &Self::Input) -> (Self::State, String);

  /// Performs exactly one unit of work.
  fn step(&self, input: &Self::Input, state: &mut Self::State) -> StepOutcome;

  /// Classifies every position. `state` is `None` before the run starts.
  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell>;

  fn cursors(&self, input: &Self::Input, state: &Self::State) -> Vec<Cursor>;

  /// Upper bound on the number of `step` calls before completion.
  fn step_bound(&self, input: &Self::Input) -> usize;
}
