//! Tests for `RabinKarp`.

use super::RabinKarp;
use super::rabin_karp::{MODULUS, hash, roll};
use crate::input::RawInput;
use crate::playback::PlaybackController;
use crate::types::RunResult;

fn play(text: &str, pattern: &str) -> PlaybackController<RabinKarp> {
  let mut c = PlaybackController::new(RabinKarp);
  c.configure(&RawInput::new(text).with_param("pattern", pattern))
    .unwrap();
  c.start().unwrap();
  while !c.step().unwrap().is_completed() {}
  c
}

#[test]
fn rolling_hash_matches_direct_hash() {
  let text: Vec<char> = "GEEKSFORGEEKS".chars().collect();
  let m = 4;
  let high_order = (1..m).fold(1, |acc, _| (acc * 256) % MODULUS);
  let mut h = hash(&text[..m]);
  for s in 0..text.len() - m {
    h = roll(h, text[s], text[s + m], high_order);
    assert_eq!(h, hash(&text[s + 1..s + 1 + m]), "shift {}", s + 1);
    assert!((0..MODULUS).contains(&h));
  }
}

#[test]
fn finds_all_occurrences_in_n_minus_m_plus_one_steps() {
  let c = play("GEEKSFORGEEKS", "GEEK");
  assert_eq!(
    c.result(),
    Some(&RunResult::Matches {
      positions: vec![0, 8]
    })
  );
  assert_eq!(c.steps_taken(), 10);
}

#[test]
fn single_character_pattern() {
  let c = play("abcab", "b");
  assert_eq!(
    c.result(),
    Some(&RunResult::Matches {
      positions: vec![1, 4]
    })
  );
}
