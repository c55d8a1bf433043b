//! Reading and writing playback transcripts as pretty-printed JSON files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::TranscriptError;
use crate::types::{TRANSCRIPT_VERSION, Transcript};

/// Just enough of a transcript to reject other format versions before
/// decoding frames.
#[derive(Deserialize)]
struct Header {
  version: u32,
}

/// Writes `transcript` to `path`, creating missing parent directories.
#[instrument(level = "trace", skip(transcript), fields(frames = transcript.frames.len()))]
pub fn save_transcript(path: &Path, transcript: &Transcript) -> Result<(), TranscriptError> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }
  let mut out = BufWriter::new(File::create(path)?);
  serde_json::to_writer_pretty(&mut out, transcript)?;
  out.write_all(b"\n")?;
  out.flush()?;
  Ok(())
}

/// Reads a transcript back, checking its format version and that every
/// frame was published by the algorithm the transcript names.
#[instrument(level = "trace")]
pub fn load_transcript(path: &Path) -> Result<Transcript, TranscriptError> {
  let text = fs::read_to_string(path)?;
  let header: Header = serde_json::from_str(&text)?;
  if header.version != TRANSCRIPT_VERSION {
    return Err(TranscriptError::UnsupportedVersion {
      found: header.version,
    });
  }
  let transcript: Transcript = serde_json::from_str(&text)?;
  if let Some((frame, snapshot)) = transcript
    .frames
    .iter()
    .enumerate()
    .find(|(_, s)| s.algorithm != transcript.algorithm)
  {
    return Err(TranscriptError::ForeignFrame {
      frame,
      algorithm: snapshot.algorithm.clone(),
    });
  }
  debug!(algorithm = %transcript.algorithm, frames = transcript.frames.len(), "transcript loaded");
  Ok(transcript)
}
