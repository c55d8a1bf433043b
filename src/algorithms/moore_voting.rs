//! Boyer-Moore majority vote: a voting pass that keeps one candidate and a
//! count, then a verification pass counting the candidate's occurrences.

use tracing::instrument;

use crate::error::ConfigError;
use crate::input::{DEFAULT_LEN, RawInput, parse_bounded_values};
use crate::playback::Algorithm;
use crate::types::{Cell, CellState, Cursor, RunResult, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct MooreVoting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotePass {
  Voting,
  Verifying,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MooreVotingState {
  pub pass: VotePass,
  pub i: usize,
  pub candidate: Option<i64>,
  /// Where the current candidate was adopted.
  pub candidate_index: Option<usize>,
  pub count: usize,
  pub occurrences: usize,
  pub done: bool,
}

impl Algorithm for MooreVoting {
  type Input = Vec<i64>;
  type State = MooreVotingState;

  fn name(&self) -> &'static str {
    "moore-voting"
  }

  fn parse(&self, raw: &RawInput) -> Result<Self::Input, ConfigError> {
    parse_bounded_values(&raw.values, DEFAULT_LEN)
  }

  fn start(&self, _input: &Self::Input) -> (Self::State, String) {
    let state = MooreVotingState {
      pass: VotePass::Voting,
      i: 0,
      candidate: None,
      candidate_index: None,
      count: 0,
      occurrences: 0,
      done: false,
    };
    (state, "Voting pass: no candidate yet".to_string())
  }

  #[instrument(level = "trace", skip(self, input))]
  fn step(&self, input: &Self::Input, s: &mut Self::State) -> StepOutcome {
    let n = input.len();
    let x = input[s.i];
    match s.pass {
      VotePass::Voting => {
        let annotation = match s.candidate {
          Some(c) if s.count > 0 && c == x => {
            s.count += 1;
            format!("a[{}]={} matches candidate: count {}", s.i, x, s.count)
          }
          Some(c) if s.count > 0 => {
            s.count -= 1;
            format!("a[{}]={} differs from {}: count {}", s.i, x, c, s.count)
          }
          _ => {
            s.candidate = Some(x);
            s.candidate_index = Some(s.i);
            s.count = 1;
            format!("count is 0: adopt a[{}]={} as candidate", s.i, x)
          }
        };
        s.i += 1;
        if s.i >= n {
          s.pass = VotePass::Verifying;
          s.i = 0;
          return StepOutcome::Continue(format!(
            "{}; verify candidate {}",
            annotation,
            s.candidate.unwrap_or(x)
          ));
        }
        StepOutcome::Continue(annotation)
      }
      VotePass::Verifying => {
        let candidate = s.candidate.unwrap_or(x);
        if x == candidate {
          s.occurrences += 1;
        }
        let annotation = format!(
          "a[{}]={}: {} occurrences of {} so far",
          s.i, x, s.occurrences, candidate
        );
        s.i += 1;
        if s.i < n {
          return StepOutcome::Continue(annotation);
        }
        s.done = true;
        if s.occurrences * 2 > n {
          StepOutcome::Completed(RunResult::Majority {
            value: candidate,
            occurrences: s.occurrences,
          })
        } else {
          StepOutcome::Completed(RunResult::NoMajority { candidate })
        }
      }
    }
  }

  fn cells(&self, input: &Self::Input, state: Option<&Self::State>) -> Vec<Cell> {
    input
      .iter()
      .enumerate()
      .map(|(k, v)| {
        let st = match state {
          None => CellState::Unchecked,
          Some(s) if s.pass == VotePass::Verifying && s.candidate == Some(*v) && (s.done || k < s.i) => {
            CellState::Matched
          }
          Some(s) if s.done => CellState::Eliminated,
          Some(s) if k == s.i => CellState::Active,
          Some(s) if s.pass == VotePass::Voting && s.candidate_index == Some(k) => {
            CellState::Candidate
          }
          Some(s) if k < s.i => CellState::Eliminated,
          Some(_) => CellState::Unchecked,
        };
        Cell::new(v, st)
      })
      .collect()
  }

  fn cursors(&self, input: &Self::Input, s: &Self::State) -> Vec<Cursor> {
    vec![
      Cursor::within("i", s.i, input.len()),
      Cursor {
        name: "candidate".to_string(),
        position: s.candidate_index,
      },
    ]
  }

  fn step_bound(&self, input: &Self::Input) -> usize {
    2 * input.len()
  }
}
