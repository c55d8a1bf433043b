//! Tests for `Transcript`.

use super::{Phase, Snapshot, Transcript};

fn frame(step: usize, annotation: &str, result: Option<&str>) -> Snapshot {
  Snapshot {
    algorithm: "kadane".to_string(),
    phase: if result.is_some() {
      Phase::Completed
    } else {
      Phase::Running
    },
    cells: vec![],
    cursors: vec![],
    annotation: annotation.to_string(),
    result: result.map(String::from),
    steps: step,
  }
}

#[test]
fn finish_takes_result_from_last_frame() {
  let mut t = Transcript::new("kadane", "1,-2,3");
  t.record(&frame(0, "start", None));
  t.record(&frame(1, "extend", None));
  t.record(&frame(2, "done", Some("max subarray sum 3 (indices 2..=2)")));
  assert!(t.finished_at.is_none());
  t.finish();
  assert!(t.finished_at.is_some());
  assert_eq!(
    t.result.as_deref(),
    Some("max subarray sum 3 (indices 2..=2)")
  );
  assert_eq!(t.annotations(), vec!["start", "extend", "done"]);
}

#[test]
fn serializes_to_json() {
  let mut t = Transcript::new("kadane", "1,2");
  t.record(&frame(0, "start", None));
  let parsed: serde_json::Value = serde_json::to_value(&t).unwrap();
  assert_eq!(parsed["version"], 1);
  assert_eq!(parsed["algorithm"], "kadane");
  assert_eq!(parsed["input"], "1,2");
  assert_eq!(parsed["frames"].as_array().unwrap().len(), 1);
  assert!(parsed["finished_at"].is_null());
}
