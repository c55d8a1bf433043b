//! Generic step-driven playback state machine.

use tracing::{debug, info, instrument};

use super::Algorithm;
use crate::error::{ConfigError, Error, StateError};
use crate::input::RawInput;
use crate::types::{Phase, RunResult, Snapshot, StepOutcome};

/// Drives one [Algorithm] through `NotStarted -> Running -> Completed`.
///
/// The controller is the single writer of its run; readers take a [Snapshot].
#[derive(Debug, Clone)]
pub struct PlaybackController<A: Algorithm> {
  algorithm: A,
  input: Option<A::Input>,
  state: Option<A::State>,
  phase: Phase,
  annotation: String,
  result: Option<RunResult>,
  last_error: Option<ConfigError>,
  steps: usize,
}

impl<A: Algorithm> PlaybackController<A> {
  pub fn new(algorithm: A) -> Self {
    Self {
      algorithm,
      input: None,
      state: None,
      phase: Phase::NotStarted,
      annotation: String::new(),
      result: None,
      last_error: None,
      steps: 0,
    }
  }

  /// Validates and stores input without starting. On failure the error is
  /// kept in [Self::last_error] and any previous input is discarded.
  #[instrument(level = "trace", skip(self, raw), fields(algorithm = self.algorithm.name()))]
  pub fn configure(&mut self, raw: &RawInput) -> Result<(), Error> {
    if self.phase != Phase::NotStarted {
      return Err(StateError::AlreadyRunning.into());
    }
    match self.algorithm.parse(raw) {
      Ok(input) => {
        debug!(input = ?input, "configured");
        self.input = Some(input);
        self.last_error = None;
        Ok(())
      }
      Err(e) => {
        debug!(error = %e, "configure rejected input");
        self.input = None;
        self.last_error = Some(e.clone());
        Err(e.into())
      }
    }
  }

  #[instrument(level = "trace", skip(self), fields(algorithm = self.algorithm.name()))]
  pub fn start(&mut self) -> Result<(), StateError> {
    if self.phase != Phase::NotStarted {
      return Err(StateError::AlreadyRunning);
    }
    let input = self.input.as_ref().ok_or(StateError::NotConfigured)?;
    let (state, annotation) = self.algorithm.start(input);
    self.state = Some(state);
    self.annotation = annotation;
    self.phase = Phase::Running;
    self.steps = 0;
    info!(algorithm = self.algorithm.name(), "run started");
    Ok(())
  }

  /// Performs one step. Outside `Running` nothing changes and
  /// [StateError::InvalidState] is returned.
  #[instrument(level = "trace", skip(self), fields(algorithm = self.algorithm.name()))]
  pub fn step(&mut self) -> Result<StepOutcome, StateError> {
    let invalid = StateError::InvalidState { phase: self.phase };
    if self.phase != Phase::Running {
      return Err(invalid);
    }
    let (Some(input), Some(state)) = (self.input.as_ref(), self.state.as_mut()) else {
      return Err(invalid);
    };
    let outcome = self.algorithm.step(input, state);
    self.steps += 1;
    match &outcome {
      StepOutcome::Continue(annotation) => {
        debug!(step = self.steps, %annotation, "step");
        self.annotation = annotation.clone();
      }
      StepOutcome::Completed(result) => {
        info!(steps = self.steps, %result, "run completed");
        self.annotation = format!("Done: {}", result);
        self.result = Some(result.clone());
        self.phase = Phase::Completed;
      }
    }
    Ok(outcome)
  }

  /// Returns to the freshly constructed state from any phase.
  #[instrument(level = "trace", skip(self), fields(algorithm = self.algorithm.name()))]
  pub fn reset(&mut self) {
    self.input = None;
    self.state = None;
    self.phase = Phase::NotStarted;
    self.annotation.clear();
    self.result = None;
    self.last_error = None;
    self.steps = 0;
  }

  pub fn algorithm(&self) -> &A {
    &self.algorithm
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  pub fn input(&self) -> Option<&A::Input> {
    self.input.as_ref()
  }

  pub fn state(&self) -> Option<&A::State> {
    self.state.as_ref()
  }

  pub fn annotation(&self) -> &str {
    &self.annotation
  }

  pub fn result(&self) -> Option<&RunResult> {
    self.result.as_ref()
  }

  pub fn last_error(&self) -> Option<&ConfigError> {
    self.last_error.as_ref()
  }

  pub fn steps_taken(&self) -> usize {
    self.steps
  }

  /// Step bound for the configured input, if any.
  pub fn step_bound(&self) -> Option<usize> {
    self.input.as_ref().map(|i| self.algorithm.step_bound(i))
  }

  pub fn snapshot(&self) -> Snapshot {
    let (cells, cursors) = match self.input.as_ref() {
      Some(input) => (
        self.algorithm.cells(input, self.state.as_ref()),
        self
          .state
          .as_ref()
          .map(|s| self.algorithm.cursors(input, s))
          .unwrap_or_default(),
      ),
      None => (Vec::new(), Vec::new()),
    };
    Snapshot {
      algorithm: self.algorithm.name().to_string(),
      phase: self.phase,
      cells,
      cursors,
      annotation: self.annotation.clone(),
      result: self.result.as_ref().map(|r| r.to_string()),
      steps: self.steps,
    }
  }
}

/// Object-safe control surface over any controller, for callers that pick
/// an algorithm at runtime.
pub trait Playback {
  fn name(&self) -> &'static str;
  fn configure(&mut self, raw: &RawInput) -> Result<(), Error>;
  fn start(&mut self) -> Result<(), StateError>;
  fn step(&mut self) -> Result<StepOutcome, StateError>;
  fn reset(&mut self);
  fn phase(&self) -> Phase;
  fn last_error(&self) -> Option<&ConfigError>;
  fn step_bound(&self) -> Option<usize>;
  fn snapshot(&self) -> Snapshot;
}

impl<A: Algorithm> Playback for PlaybackController<A> {
  fn name(&self) -> &'static str {
    self.algorithm.name()
  }

  fn configure(&mut self, raw: &RawInput) -> Result<(), Error> {
    PlaybackController::configure(self, raw)
  }

  fn start(&mut self) -> Result<(), StateError> {
    PlaybackController::start(self)
  }

  fn step(&mut self) -> Result<StepOutcome, StateError> {
    PlaybackController::step(self)
  }

  fn reset(&mut self) {
    PlaybackController::reset(self)
  }

  fn phase(&self) -> Phase {
    self.phase
  }

  fn last_error(&self) -> Option<&ConfigError> {
    self.last_error.as_ref()
  }

  fn step_bound(&self) -> Option<usize> {
    PlaybackController::step_bound(self)
  }

  fn snapshot(&self) -> Snapshot {
    PlaybackController::snapshot(self)
  }
}

impl<P: Playback + ?Sized> Playback for Box<P> {
  fn name(&self) -> &'static str {
    (**self).name()
  }

  fn configure(&mut self, raw: &RawInput) -> Result<(), Error> {
    (**self).configure(raw)
  }

  fn start(&mut self) -> Result<(), StateError> {
    (**self).start()
  }

  fn step(&mut self) -> Result<StepOutcome, StateError> {
    (**self).step()
  }

  fn reset(&mut self) {
    (**self).reset()
  }

  fn phase(&self) -> Phase {
    (**self).phase()
  }

  fn last_error(&self) -> Option<&ConfigError> {
    (**self).last_error()
  }

  fn step_bound(&self) -> Option<usize> {
    (**self).step_bound()
  }

  fn snapshot(&self) -> Snapshot {
    (**self).snapshot()
  }
}
