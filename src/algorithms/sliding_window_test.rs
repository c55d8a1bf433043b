//! Tests for `SlidingWindow`.

use super::SlidingWindow;
use crate::error::{ConfigError, Error};
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::{CellState, RunResult};

fn play(values: &str, window: usize) -> PlaybackController<SlidingWindow> {
  let mut c = PlaybackController::new(SlidingWindow);
  c.configure(&RawInput::new(values).with_param("window", window))
    .unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  c
}

#[test]
fn finds_best_window_of_three() {
  let c = play("2,1,5,1,3,2", 3);
  assert_eq!(
    c.result(),
    Some(&RunResult::MaxWindow {
      sum: 9,
      start: 2,
      end: 4
    })
  );
  assert_eq!(c.steps_taken(), 6);
}

#[test]
fn window_equal_to_length_is_whole_array() {
  let c = play("-1,-2,-3", 3);
  assert_eq!(
    c.result(),
    Some(&RunResult::MaxWindow {
      sum: -6,
      start: 0,
      end: 2
    })
  );
}

#[test]
fn window_larger_than_array_is_rejected() {
  let mut c = PlaybackController::new(SlidingWindow);
  let err = c
    .configure(&RawInput::new("1,2,3").with_param("window", 4))
    .unwrap_err();
  assert!(matches!(
    err,
    Error::Config(ConfigError::OutOfBounds { what: "window", .. })
  ));
}

#[test]
fn current_window_is_highlighted() {
  let mut c = PlaybackController::new(SlidingWindow);
  c.configure(&RawInput::new("1,2,3,4").with_param("window", 2))
    .unwrap();
  c.start().unwrap();
  c.step().unwrap();
  c.step().unwrap();
  c.step().unwrap();
  let states: Vec<_> = c.snapshot().cells.iter().map(|c| c.state).collect();
  assert_eq!(
    states,
    vec![
      CellState::Unchecked,
      CellState::InWindow,
      CellState::InWindow,
      CellState::Active
    ]
  );
}
