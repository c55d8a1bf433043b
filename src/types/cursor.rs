//! Named pointer into the input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named index the visualization highlights, e.g. `low`, `mid`, `high`.
/// `position` is `None` when the pointer has left the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
  pub name: String,
  pub position: Option<usize>,
}

impl Cursor {
  pub fn at(name: &str, position: usize) -> Self {
    Self {
      name: name.to_string(),
      position: Some(position),
    }
  }

  /// A cursor that is only shown while `position < len`.
  pub fn within(name: &str, position: usize, len: usize) -> Self {
    Self {
      name: name.to_string(),
      position: (position < len).then_some(position),
    }
  }
}

impl fmt::Display for Cursor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.position {
      Some(p) => write!(f, "{}={}", self.name, p),
      None => write!(f, "{}=-", self.name),
    }
  }
}
