//! Precompute-then-paginate: backtracking generators produce every solution
//! eagerly and a [SolutionNavigator] pages through them.

mod combinations;
mod generator;
mod grid;
mod n_queens;
mod navigator;
#[cfg(test)]
mod navigator_test;
mod permutations;
mod rat_maze;
mod subsets;
mod sudoku;
mod word_search;

pub use combinations::{COMBINATION_LEN, CombinationParams, Combinations};
pub use generator::{Generation, Generator, NODE_BUDGET, Sequence};
pub(crate) use generator::Budget;
pub use grid::MOVES;
pub use n_queens::{BOARD_SIZE, NQueens, Placement};
pub use navigator::{SolutionNavigator, explore};
pub use permutations::{PERMUTATION_LEN, Permutations};
pub use rat_maze::{MAZE_SIZE, Maze, MazePath, PATH_CAP, RatMaze};
pub use subsets::{SUBSET_LEN, Subsets};
pub use sudoku::{Grid, SOLUTION_CAP, Sudoku};
pub use word_search::{BOARD_DIMS, TRAIL_CAP, Trail, WordSearch, WordSearchParams};
