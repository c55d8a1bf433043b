//! DTOs for a playback transcript: the snapshots a front end observed, in order.
//!
//! Recorded outside the controller, which itself keeps only the latest annotation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::Snapshot;

/// Current transcript format version.
pub const TRANSCRIPT_VERSION: u32 = 1;

/// Root structure for a saved transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
  /// Format version.
  pub version: u32,
  /// Catalog name of the algorithm played.
  pub algorithm: String,
  /// The raw input the run was configured with.
  pub input: String,
  /// RFC 3339 timestamp when recording started.
  pub started_at: String,
  /// RFC 3339 timestamp when the run completed (None if cancelled).
  pub finished_at: Option<String>,
  /// Result text when the run completed.
  pub result: Option<String>,
  /// Snapshots in the order they were published.
  pub frames: Vec<Snapshot>,
}

impl Transcript {
  pub fn new(algorithm: impl Into<String>, input: impl Into<String>) -> Self {
    Self {
      version: TRANSCRIPT_VERSION,
      algorithm: algorithm.into(),
      input: input.into(),
      started_at: Utc::now().to_rfc3339(),
      finished_at: None,
      result: None,
      frames: Vec::new(),
    }
  }

  pub fn record(&mut self, snapshot: &Snapshot) {
    self.frames.push(snapshot.clone());
  }

  /// Marks the transcript finished, taking the result from the last frame.
  pub fn finish(&mut self) {
    self.result = self.frames.last().and_then(|f| f.result.clone());
    self.finished_at = Some(Utc::now().to_rfc3339());
  }

  /// Annotations in order; two runs over the same input must agree on these.
  pub fn annotations(&self) -> Vec<&str> {
    self.frames.iter().map(|f| f.annotation.as_str()).collect()
  }
}
