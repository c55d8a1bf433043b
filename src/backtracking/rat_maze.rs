//! Rat in a maze: every self-avoiding path from the top-left to the
//! bottom-right corner of a square 0/1 grid.

use std::collections::VecDeque;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Budget, Generation, Generator};
use super::grid::{MOVES, offset, parse_rows};
use crate::error::ConfigError;
use crate::input::RawInput;

pub const MAZE_SIZE: RangeInclusive<usize> = 2..=8;

/// Most paths kept for one maze; open grids have far more.
pub const PATH_CAP: usize = 256;

#[derive(Debug, Clone, Copy, Default)]
pub struct RatMaze;

/// Square grid; `true` cells are open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
  pub open: Vec<Vec<bool>>,
}

/// Moves taken, as `D`/`L`/`R`/`U` letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazePath {
  pub moves: String,
}

impl fmt::Display for MazePath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.moves)
  }
}

struct Search<'a> {
  maze: &'a Maze,
  visited: Vec<Vec<bool>>,
  moves: String,
  out: Vec<MazePath>,
  budget: Budget,
}

impl Search<'_> {
  /// Whether some open, unvisited route leads from `from` to the exit.
  fn exit_reachable(&self, from: (usize, usize)) -> bool {
    let n = self.maze.open.len();
    let mut seen = self.visited.clone();
    seen[from.0][from.1] = true;
    let mut queue = VecDeque::from([from]);
    while let Some(at) = queue.pop_front() {
      if at == (n - 1, n - 1) {
        return true;
      }
      for (_, dr, dc) in MOVES {
        let Some((r, c)) = offset(at, (dr, dc), n, n) else {
          continue;
        };
        if self.maze.open[r][c] && !seen[r][c] {
          seen[r][c] = true;
          queue.push_back((r, c));
        }
      }
    }
    false
  }

  fn walk(&mut self, at: (usize, usize)) {
    let n = self.maze.open.len();
    if self.out.len() >= PATH_CAP || !self.budget.spend() {
      return;
    }
    if at == (n - 1, n - 1) {
      self.out.push(MazePath {
        moves: self.moves.clone(),
      });
      return;
    }
    if !self.exit_reachable(at) {
      return;
    }
    self.visited[at.0][at.1] = true;
    for (letter, dr, dc) in MOVES {
      let Some((r, c)) = offset(at, (dr, dc), n, n) else {
        continue;
      };
      if self.maze.open[r][c] && !self.visited[r][c] {
        self.moves.push(letter);
        self.walk((r, c));
        self.moves.pop();
      }
    }
    self.visited[at.0][at.1] = false;
  }
}

impl Generator for RatMaze {
  type Params = Maze;
  type Solution = MazePath;

  fn name(&self) -> &'static str {
    "rat-maze"
  }

  /// Reads the `grid` parameter (falling back to the values field): rows of
  /// `0`/`1` separated by `;`.
  fn parse(&self, raw: &RawInput) -> Result<Maze, ConfigError> {
    let text = raw.param("grid").unwrap_or(raw.values.as_str());
    let rows = parse_rows(text, "maze", MAZE_SIZE)?;
    if rows.len() != rows[0].len() {
      return Err(ConfigError::out_of_bounds(
        "maze",
        format!("grid must be square, got {}x{}", rows.len(), rows[0].len()),
      ));
    }
    let open = rows
      .into_iter()
      .map(|row| {
        row
          .into_iter()
          .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            c => Err(ConfigError::invalid(c.to_string(), "maze cell (0 or 1)")),
          })
          .collect::<Result<Vec<_>, _>>()
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Maze { open })
  }

  fn generate_all(&self, maze: &Maze) -> Vec<MazePath> {
    self.generate(maze).solutions
  }

  /// Stops at [PATH_CAP] paths. Branches that can no longer reach the exit
  /// are cut, so a maze with an unreachable exit ends at the entrance.
  #[instrument(level = "trace", skip(self, maze))]
  fn generate(&self, maze: &Maze) -> Generation<MazePath> {
    let n = maze.open.len();
    if n == 0 || !maze.open[0][0] || !maze.open[n - 1][n - 1] {
      debug!("entrance or exit blocked");
      return Generation::complete(Vec::new());
    }
    let mut search = Search {
      maze,
      visited: vec![vec![false; n]; n],
      moves: String::new(),
      out: Vec::new(),
      budget: Budget::new(),
    };
    search.walk((0, 0));
    let complete = search.out.len() < PATH_CAP && !search.budget.is_exhausted();
    if !complete {
      debug!(paths = search.out.len(), "search stopped early");
    }
    Generation {
      solutions: search.out,
      complete,
    }
  }
}
