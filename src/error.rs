//! Error taxonomy for playback: bad user input versus calls made in the wrong
//! phase, plus failures reading or writing transcripts.

use thiserror::Error;

use crate::types::Phase;

/// Malformed or out-of-bounds user input. Surfaced inline, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("invalid format: {token:?} is not a valid {expected}")]
  InvalidFormat {
    token: String,
    expected: &'static str,
  },
  #[error("{what} out of bounds: {detail}")]
  OutOfBounds { what: &'static str, detail: String },
  #[error("missing parameter: {0}")]
  MissingParameter(&'static str),
  #[error("input must be sorted in ascending order")]
  NotSorted,
  #[error("unknown algorithm: {0}")]
  UnknownAlgorithm(String),
}

impl ConfigError {
  pub(crate) fn invalid(token: impl Into<String>, expected: &'static str) -> Self {
    ConfigError::InvalidFormat {
      token: token.into(),
      expected,
    }
  }

  pub(crate) fn out_of_bounds(what: &'static str, detail: impl Into<String>) -> Self {
    ConfigError::OutOfBounds {
      what,
      detail: detail.into(),
    }
  }
}

/// An operation invoked in a phase that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
  #[error("run already started; reset before starting again")]
  AlreadyRunning,
  #[error("no validated input; configure before starting")]
  NotConfigured,
  #[error("operation not valid while {phase}")]
  InvalidState { phase: Phase },
}

/// Either kind of playback failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error(transparent)]
  State(#[from] StateError),
}

/// A transcript that could not be written or read back.
#[derive(Debug, Error)]
pub enum TranscriptError {
  #[error("transcript i/o: {0}")]
  Io(#[from] std::io::Error),
  #[error("malformed transcript: {0}")]
  Json(#[from] serde_json::Error),
  #[error("unsupported transcript version {found}")]
  UnsupportedVersion { found: u32 },
  #[error("frame {frame} was published by {algorithm}")]
  ForeignFrame { frame: usize, algorithm: String },
}
