//! Integration tests for the algolens CLI, run via `cargo run --bin algolens`.

use std::process::Command;

/// Run `cargo run --bin algolens -- <args...>` from the crate root. Returns (stdout, stderr, success).
fn run_algolens(args: &[&str]) -> (String, String, bool) {
  run_algolens_with_env(args, &[("ALGOLENS_STEP_DELAY_MS", "0")])
}

fn run_algolens_with_env(args: &[&str], env: &[(&str, &str)]) -> (String, String, bool) {
  let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
  let mut cmd = Command::new(cargo.as_str());
  cmd
    .args(["run", "--quiet", "--bin", "algolens", "--"])
    .args(args)
    .current_dir(env!("CARGO_MANIFEST_DIR"))
    .env_remove("RUST_LOG");
  for (k, v) in env {
    cmd.env(k, v);
  }
  let out = cmd.output().expect("cargo run --bin algolens");
  (
    String::from_utf8_lossy(&out.stdout).into_owned(),
    String::from_utf8_lossy(&out.stderr).into_owned(),
    out.status.success(),
  )
}

#[test]
fn prints_usage_without_subcommand() {
  let (_, stderr, ok) = run_algolens(&[]);
  assert!(!ok);
  assert!(stderr.contains("Usage") || stderr.contains("usage"));
}

#[test]
fn list_names_every_family() {
  let (stdout, stderr, ok) = run_algolens(&["list"]);
  assert!(ok, "stderr: {}", stderr);
  for name in ["bubble-sort", "binary-search", "kadane", "kmp", "n-queens", "word-search"] {
    assert!(stdout.contains(name), "missing {} in {}", name, stdout);
  }
  assert!(stdout.contains("backtracking"));
}

#[test]
fn play_linear_search_prints_each_step() {
  let (stdout, stderr, ok) = run_algolens(&[
    "play",
    "linear-search",
    "--values",
    "4,7,1,9,3,6",
    "--param",
    "target=9",
  ]);
  assert!(ok, "stderr: {}", stderr);
  let lines: Vec<&str> = stdout.lines().collect();
  assert_eq!(lines.len(), 5, "stdout: {}", stdout);
  assert!(lines[0].starts_with("[  0]"));
  assert!(lines[4].contains("Done: found at index 3"));
}

#[test]
fn play_json_emits_one_snapshot_per_line() {
  let (stdout, stderr, ok) = run_algolens(&[
    "play",
    "binary-search",
    "--values",
    "3,5,7,9,15,18,22",
    "--param",
    "target=18",
    "--json",
  ]);
  assert!(ok, "stderr: {}", stderr);
  let last = stdout.lines().last().expect("snapshot line");
  let v: serde_json::Value = serde_json::from_str(last).expect("json");
  assert_eq!(v["phase"], "completed");
  assert_eq!(v["result"], "found at index 5");
  assert_eq!(v["algorithm"], "binary-search");
}

#[test]
fn play_writes_transcript() {
  let dir = tempfile::tempdir().expect("temp dir");
  let path = dir.path().join("out").join("transcript.json");
  let path_str = path.to_str().expect("path");
  let (_, stderr, ok) = run_algolens(&[
    "play",
    "bubble-sort",
    "--values",
    "5 1 4 2 8",
    "--transcript",
    path_str,
  ]);
  assert!(ok, "stderr: {}", stderr);
  let t = algolens::load_transcript(&path).expect("transcript");
  assert_eq!(t.algorithm, "bubble-sort");
  assert_eq!(t.result.as_deref(), Some("sorted: [1, 2, 4, 5, 8]"));
  assert!(t.finished_at.is_some());
  assert_eq!(t.frames.first().map(|f| f.steps), Some(0));
}

#[test]
fn play_random_input_completes() {
  let (stdout, stderr, ok) = run_algolens(&["play", "kmp", "--random", "10"]);
  assert!(ok, "stderr: {}", stderr);
  assert!(stdout.contains("Done:"));
}

#[test]
fn play_rejects_bad_input_with_exit_1() {
  let (_, stderr, ok) = run_algolens(&["play", "bubble-sort", "--values", "3,x,1"]);
  assert!(!ok);
  assert!(stderr.contains("invalid format"), "stderr: {}", stderr);

  let (_, stderr, ok) = run_algolens(&["play", "bogo-sort", "--values", "1,2"]);
  assert!(!ok);
  assert!(stderr.contains("unknown algorithm"), "stderr: {}", stderr);

  let (_, stderr, ok) = run_algolens(&["play", "n-queens", "--param", "n=4"]);
  assert!(!ok);
  assert!(stderr.contains("solve"), "stderr: {}", stderr);
}

#[test]
fn invalid_delay_env_falls_back_to_flag() {
  let (stdout, stderr, ok) = run_algolens_with_env(
    &["play", "kadane", "--values", "1,-2,3", "--delay-ms", "0"],
    &[("ALGOLENS_STEP_DELAY_MS", "soon")],
  );
  assert!(ok, "stderr: {}", stderr);
  assert!(stderr.contains("ignoring invalid ALGOLENS_STEP_DELAY_MS"));
  assert!(stdout.contains("Done: max subarray sum 3"));
}

#[test]
fn solve_shows_selected_solution() {
  let (stdout, stderr, ok) = run_algolens(&["solve", "n-queens", "--param", "n=4", "--index", "1"]);
  assert!(ok, "stderr: {}", stderr);
  assert!(stdout.starts_with("2 solutions"));
  assert!(stdout.contains(". . Q ."));
}

#[test]
fn solve_all_as_json() {
  let (stdout, stderr, ok) = run_algolens(&[
    "solve",
    "rat-maze",
    "--param",
    "grid=1000;1101;1100;0111",
    "--all",
    "--json",
  ]);
  assert!(ok, "stderr: {}", stderr);
  let lines: Vec<&str> = stdout.lines().collect();
  assert_eq!(lines[0], "2 solutions");
  assert_eq!(lines[1], r#"{"moves":"DDRDRR"}"#);
  assert_eq!(lines[2], r#"{"moves":"DRDDRR"}"#);
}

#[test]
fn solve_out_of_range_index_fails() {
  let (_, stderr, ok) = run_algolens(&["solve", "n-queens", "--param", "n=4", "--index", "5"]);
  assert!(!ok);
  assert!(stderr.contains("out of range"), "stderr: {}", stderr);
}

#[test]
fn solve_notes_a_truncated_search() {
  let blank = ".".repeat(81);
  let (stdout, stderr, ok) = run_algolens(&["solve", "sudoku", "--values", blank.as_str()]);
  assert!(ok, "stderr: {}", stderr);
  assert!(stdout.starts_with("32 solutions"));
  assert!(stderr.contains("Search stopped early"), "stderr: {}", stderr);
}
