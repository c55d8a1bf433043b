//! CLI: play step-driven algorithms or browse backtracking solutions.
//!
//! Usage:
//!   `algolens list`
//!   `algolens play <algorithm> --values "4,7,1,9" --param target=9`
//!   `algolens solve <algorithm> --param n=6 --index 2`
//!
//! Playback prints one line per step (or one JSON snapshot with `--json`).
//! Ctrl-C cancels between steps.
//!
//! Set RUST_LOG=algolens=trace for TRACE-level span enter/exit and events.

use std::env;
use std::path::PathBuf;
use std::pin::pin;
use std::process;
use std::time::Duration;

use algolens::transcript_io::save_transcript;
use algolens::{
  AlgorithmId, CancelHandle, Phase, Playback, RawInput, Snapshot, Transcript, random_input,
  step_stream,
};
use clap::{Args, Parser, Subcommand};
use futures::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const DELAY_ENV: &str = "ALGOLENS_STEP_DELAY_MS";

/// Step-driven algorithm playback for the terminal.
#[derive(Parser, Debug)]
#[command(name = "algolens")]
#[command(
  after_help = r#"Environment variables:
  ALGOLENS_STEP_DELAY_MS   Delay between auto-run steps; overrides --delay-ms when set.
  RUST_LOG                 Log filter (default: info). Logs go to stderr.

Examples:
  algolens play bubble-sort --values "5 1 4 2 8"
  algolens play binary-search --values 3,5,7,9,15,18,22 --param target=18 --delay-ms 0
  algolens play kmp --random 12 --json
  algolens solve n-queens --param n=4 --index 1"#
)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List every algorithm with its family and expected input.
  List,
  /// Configure, start and auto-run a step-driven algorithm.
  Play(PlayArgs),
  /// Precompute every solution of a backtracking algorithm and show one.
  Solve(SolveArgs),
}

#[derive(Args, Debug)]
struct PlayArgs {
  /// Algorithm name, e.g. bubble-sort (see `algolens list`)
  algorithm: String,

  /// Comma or whitespace separated values (the text, for string matchers)
  #[arg(long, default_value = "", allow_hyphen_values = true)]
  values: String,

  /// Named parameter, repeatable
  #[arg(long = "param", value_name = "KEY=VALUE", value_parser = RawInput::parse_param)]
  params: Vec<(String, String)>,

  /// Delay between steps. Overridden by ALGOLENS_STEP_DELAY_MS if set.
  #[arg(long, value_name = "MS", default_value_t = 400)]
  delay_ms: u64,

  /// Print each snapshot as a JSON line instead of text
  #[arg(long)]
  json: bool,

  /// Save a JSON transcript of every snapshot to this path
  #[arg(long, value_name = "PATH")]
  transcript: Option<PathBuf>,

  /// Generate a random valid input of N elements instead of --values/--param
  #[arg(long, value_name = "N", conflicts_with_all = ["values", "params"])]
  random: Option<usize>,
}

#[derive(Args, Debug)]
struct SolveArgs {
  /// Algorithm name, e.g. n-queens (see `algolens list`)
  algorithm: String,

  /// Values, grid or board, depending on the algorithm
  #[arg(long, default_value = "", allow_hyphen_values = true)]
  values: String,

  /// Named parameter, repeatable
  #[arg(long = "param", value_name = "KEY=VALUE", value_parser = RawInput::parse_param)]
  params: Vec<(String, String)>,

  /// Zero-based solution to show
  #[arg(long, default_value_t = 0)]
  index: usize,

  /// Print every solution
  #[arg(long, conflicts_with = "index")]
  all: bool,

  /// Print solutions as JSON
  #[arg(long)]
  json: bool,
}

fn raw_input(values: &str, params: &[(String, String)]) -> RawInput {
  params
    .iter()
    .fold(RawInput::new(values), |raw, (k, v)| raw.with_param(k.clone(), v))
}

fn fail(msg: impl std::fmt::Display) -> ! {
  eprintln!("Error: {}", msg);
  process::exit(1);
}

fn algorithm_id(name: &str) -> AlgorithmId {
  name.parse().unwrap_or_else(|e| fail(e))
}

fn print_snapshot(snapshot: &Snapshot, json: bool) {
  if json {
    match serde_json::to_string(snapshot) {
      Ok(line) => println!("{}", line),
      Err(e) => fail(e),
    }
  } else {
    println!("{}", snapshot);
  }
}

/// Env var overrides the flag; an unparseable value is ignored with a warning.
fn step_delay(flag_ms: u64) -> Duration {
  let ms = match env::var(DELAY_ENV) {
    Ok(v) => v.trim().parse::<u64>().unwrap_or_else(|_| {
      warn!(value = %v, "ignoring invalid {}", DELAY_ENV);
      flag_ms
    }),
    Err(_) => flag_ms,
  };
  Duration::from_millis(ms)
}

fn list() {
  for id in AlgorithmId::ALL {
    println!("{:<16} {:<16} {}", id.name(), id.family().to_string(), id.usage());
  }
}

async fn play(args: PlayArgs) {
  let id = algorithm_id(&args.algorithm);
  let Some(mut playback) = id.playback() else {
    fail(format!("{} is a backtracking algorithm; use `algolens solve {}`", id, id));
  };
  let raw = match args.random {
    Some(n) => random_input(id, n, &mut rand::thread_rng())
      .unwrap_or_else(|| fail(format!("no random input for {}", id))),
    None => raw_input(&args.values, &args.params),
  };
  let delay = step_delay(args.delay_ms);
  info!(algorithm = %id, values = %raw.values, params = ?raw.params, delay_ms = delay.as_millis() as u64, "options (env or flags)");

  if let Err(e) = playback.configure(&raw) {
    fail(e);
  }
  if let Err(e) = playback.start() {
    fail(e);
  }

  let mut transcript = args
    .transcript
    .as_ref()
    .map(|_| Transcript::new(id.name(), raw.values.clone()));
  let first = playback.snapshot();
  print_snapshot(&first, args.json);
  if let Some(t) = transcript.as_mut() {
    t.record(&first);
  }

  let handle = CancelHandle::new();
  let token = handle.token();
  tokio::spawn(async move {
    if tokio::signal::ctrl_c().await.is_ok() {
      handle.cancel();
    }
  });

  {
    let mut frames = pin!(step_stream(&mut playback, delay, token));
    while let Some(frame) = frames.next().await {
      print_snapshot(&frame, args.json);
      if let Some(t) = transcript.as_mut() {
        t.record(&frame);
      }
    }
  }

  let completed = playback.phase() == Phase::Completed;
  if let (Some(path), Some(mut t)) = (args.transcript.as_ref(), transcript) {
    if completed {
      t.finish();
    }
    if let Err(e) = save_transcript(path, &t) {
      fail(format!("writing {}: {}", path.display(), e));
    }
    info!(path = %path.display(), frames = t.frames.len(), "transcript saved");
  }
  if !completed {
    eprintln!("Cancelled after {} steps.", playback.snapshot().steps);
    process::exit(130);
  }
}

fn solve(args: SolveArgs) {
  let id = algorithm_id(&args.algorithm);
  let raw = raw_input(&args.values, &args.params);
  let mut nav = match id.explore(&raw) {
    Some(Ok(nav)) => nav,
    Some(Err(e)) => fail(e),
    None => fail(format!("{} is step-driven; use `algolens play {}`", id, id)),
  };
  info!(algorithm = %id, solutions = nav.len(), complete = nav.is_complete(), "solutions generated");
  println!("{} solutions", nav.len());
  if !nav.is_complete() {
    eprintln!("Search stopped early; more solutions may exist.");
  }
  if nav.is_empty() {
    return;
  }
  if args.all {
    for (k, s) in nav.solutions().iter().enumerate() {
      if args.json {
        println!("{}", s.value);
      } else {
        println!("#{}\n{}", k, s);
      }
    }
    return;
  }
  let len = nav.len();
  let Some(s) = nav.select(args.index) else {
    fail(format!("index {} out of range (0..{})", args.index, len));
  };
  if args.json {
    println!("{}", s.value);
  } else {
    println!("#{} of {}\n{}", args.index, len, s);
  }
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  match cli.command {
    Command::List => list(),
    Command::Play(args) => play(args).await,
    Command::Solve(args) => solve(args),
  }
}
