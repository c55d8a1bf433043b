//! Tests for `Snapshot` rendering.

use super::{Cell, CellState, Cursor, Phase, Snapshot};

fn sample() -> Snapshot {
  Snapshot {
    algorithm: "linear-search".to_string(),
    phase: Phase::Running,
    cells: vec![
      Cell::new(4, CellState::Eliminated),
      Cell::new(7, CellState::Active),
      Cell::new(1, CellState::Unchecked),
    ],
    cursors: vec![Cursor::at("i", 1), Cursor::within("j", 3, 3)],
    annotation: "a[0]=4 is not 9".to_string(),
    result: None,
    steps: 1,
  }
}

#[test]
fn render_cells_joins_markers() {
  assert_eq!(sample().render_cells(), "~4~ >7<  1 ");
}

#[test]
fn display_includes_cursors_and_annotation() {
  let line = sample().to_string();
  assert!(line.starts_with("[  1]"));
  assert!(line.contains("(i=1 j=-)"));
  assert!(line.ends_with("a[0]=4 is not 9"));
}

#[test]
fn json_roundtrip_keeps_equality() {
  let s = sample();
  let json = serde_json::to_string(&s).unwrap();
  let back: Snapshot = serde_json::from_str(&json).unwrap();
  assert_eq!(back, s);
}
