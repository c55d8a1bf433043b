//! Outcome of a single step.

use super::RunResult;

/// What one call to `step()` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
  /// More work remains; carries the annotation for this step.
  Continue(String),
  Completed(RunResult),
}

impl StepOutcome {
  pub fn is_completed(&self) -> bool {
    matches!(self, StepOutcome::Completed(_))
  }
}
