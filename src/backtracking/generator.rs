//! The eager generator contract shared by every backtracking search.

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::RawInput;

/// Search nodes one generation may visit before it gives up.
pub const NODE_BUDGET: usize = 200_000;

/// The outcome of one search: solutions in search order, and whether the
/// search ran to the end rather than stopping at a cap or [NODE_BUDGET].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation<S> {
  pub solutions: Vec<S>,
  pub complete: bool,
}

impl<S> Generation<S> {
  pub fn complete(solutions: Vec<S>) -> Self {
    Self {
      solutions,
      complete: true,
    }
  }
}

/// Counts visited nodes against [NODE_BUDGET].
#[derive(Debug)]
pub(crate) struct Budget {
  left: usize,
  exhausted: bool,
}

impl Budget {
  pub(crate) fn new() -> Self {
    Self {
      left: NODE_BUDGET,
      exhausted: false,
    }
  }

  /// Spends one node; `false` once the budget is gone.
  pub(crate) fn spend(&mut self) -> bool {
    if self.left == 0 {
      self.exhausted = true;
      return false;
    }
    self.left -= 1;
    true
  }

  pub(crate) fn is_exhausted(&self) -> bool {
    self.exhausted
  }
}

/// Exhaustive search that produces every solution up front.
///
/// Generation is synchronous and not interruptible. Small searches run to
/// the end; searches over larger spaces stop at a solution cap or at
/// [NODE_BUDGET] and say so through [Generation::complete].
pub trait Generator {
  type Params: Clone + Debug;
  type Solution: Clone + Debug + Serialize + Display;

  fn name(&self) -> &'static str;

  /// Validates raw input into generator parameters.
  fn parse(&self, raw: &RawInput) -> Result<Self::Params, ConfigError>;

  /// Returns all solutions in search order.
  fn generate_all(&self, params: &Self::Params) -> Vec<Self::Solution>;

  /// Runs the search and reports whether it was cut short.
  fn generate(&self, params: &Self::Params) -> Generation<Self::Solution> {
    Generation::complete(self.generate_all(params))
  }
}

/// An ordered selection of input values (permutation, combination or subset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(pub Vec<i64>);

impl Display for Sequence {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (k, v) in self.0.iter().enumerate() {
      if k > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}", v)?;
    }
    write!(f, "]")
  }
}
