//! Tests for `SolutionNavigator`.

use super::{Generation, SolutionNavigator};

#[test]
fn next_and_previous_wrap_around() {
  let mut nav = SolutionNavigator::from_solutions(vec!['a', 'b', 'c']);
  assert_eq!(nav.current(), Some(&'a'));
  assert_eq!(nav.previous(), Some(&'c'));
  assert_eq!(nav.next(), Some(&'a'));
  assert_eq!(nav.next(), Some(&'b'));
  assert_eq!(nav.next(), Some(&'c'));
  assert_eq!(nav.next(), Some(&'a'));
  assert_eq!(nav.index(), Some(0));
}

#[test]
fn empty_navigator_is_a_no_op() {
  let mut nav: SolutionNavigator<u8> = SolutionNavigator::from_solutions(Vec::new());
  assert!(nav.is_empty());
  assert_eq!(nav.index(), None);
  assert_eq!(nav.next(), None);
  assert_eq!(nav.previous(), None);
  assert_eq!(nav.current(), None);
}

#[test]
fn select_ignores_out_of_range() {
  let mut nav = SolutionNavigator::from_solutions(vec![10, 20, 30]);
  assert_eq!(nav.select(2), Some(&30));
  assert_eq!(nav.select(3), None);
  assert_eq!(nav.index(), Some(2));
}

#[test]
fn map_keeps_position() {
  let mut nav = SolutionNavigator::from_solutions(vec![1, 2, 3]);
  nav.next();
  let nav = nav.map(|v| v * 10);
  assert_eq!(nav.current(), Some(&20));
  assert_eq!(nav.solutions(), &[10, 20, 30]);
}

#[test]
fn incomplete_generation_is_reported() {
  assert!(SolutionNavigator::from_solutions(vec![1]).is_complete());
  let nav = SolutionNavigator::from_generation(Generation {
    solutions: vec![1, 2],
    complete: false,
  });
  assert_eq!(nav.len(), 2);
  assert!(!nav.clone().map(|v| v + 1).is_complete());
  assert!(!nav.is_complete());
}
