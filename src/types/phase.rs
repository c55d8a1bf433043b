//! Coarse lifecycle phase of a playback run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle phase. Transitions only forward, except `reset` back to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
  #[default]
  NotStarted,
  Running,
  Completed,
}

impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Phase::NotStarted => write!(f, "not started"),
      Phase::Running => write!(f, "running"),
      Phase::Completed => write!(f, "completed"),
    }
  }
}
