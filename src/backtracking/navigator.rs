//! Cyclic pagination over precomputed solutions.

use tracing::{debug, instrument};

use super::{Generation, Generator};
use crate::error::ConfigError;
use crate::input::RawInput;

/// Holds every solution and a current index. Navigation wraps at both ends
/// and is a no-op when there are no solutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionNavigator<S> {
  solutions: Vec<S>,
  index: usize,
  complete: bool,
}

impl<S> SolutionNavigator<S> {
  pub fn from_solutions(solutions: Vec<S>) -> Self {
    Self {
      solutions,
      index: 0,
      complete: true,
    }
  }

  pub fn from_generation(generation: Generation<S>) -> Self {
    Self {
      solutions: generation.solutions,
      index: 0,
      complete: generation.complete,
    }
  }

  /// False when the search stopped early, so more solutions may exist.
  pub fn is_complete(&self) -> bool {
    self.complete
  }

  pub fn len(&self) -> usize {
    self.solutions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.solutions.is_empty()
  }

  /// Current position, or `None` when there is nothing to show.
  pub fn index(&self) -> Option<usize> {
    (!self.is_empty()).then_some(self.index)
  }

  pub fn current(&self) -> Option<&S> {
    self.solutions.get(self.index)
  }

  pub fn solutions(&self) -> &[S] {
    &self.solutions
  }

  #[allow(clippy::should_implement_trait)]
  pub fn next(&mut self) -> Option<&S> {
    if !self.is_empty() {
      self.index = (self.index + 1) % self.solutions.len();
    }
    self.current()
  }

  pub fn previous(&mut self) -> Option<&S> {
    if !self.is_empty() {
      let len = self.solutions.len();
      self.index = (self.index + len - 1) % len;
    }
    self.current()
  }

  /// Jumps to `index`; out-of-range indices leave the position unchanged.
  pub fn select(&mut self, index: usize) -> Option<&S> {
    if index < self.solutions.len() {
      self.index = index;
      self.current()
    } else {
      None
    }
  }

  pub fn map<T>(self, f: impl FnMut(S) -> T) -> SolutionNavigator<T> {
    SolutionNavigator {
      solutions: self.solutions.into_iter().map(f).collect(),
      index: self.index,
      complete: self.complete,
    }
  }
}

/// Parses `raw`, runs the generator and wraps the result.
#[instrument(level = "trace", skip(generator, raw), fields(generator = generator.name()))]
pub fn explore<G: Generator>(
  generator: &G,
  raw: &RawInput,
) -> Result<SolutionNavigator<G::Solution>, ConfigError> {
  let params = generator.parse(raw)?;
  let generation = generator.generate(&params);
  debug!(
    count = generation.solutions.len(),
    complete = generation.complete,
    "solutions generated"
  );
  Ok(SolutionNavigator::from_generation(generation))
}
