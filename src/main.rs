use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use shamir_recover::{FieldElement, RecoverError, TestCase};
use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};
use tracing::{error, info, info_span};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Recover threshold secret-sharing secrets from JSON share documents")]
struct Args {
  /// Number of k-subsets that must reconstruct the same secret (1 disables the check)
  #[arg(long, default_value_t = 1)]
  check: usize,
  /// Print one JSON object per case instead of `<path>: <secret>`
  #[arg(long)]
  json: bool,
  /// Share documents to process
  #[arg(required = true)]
  paths: Vec<PathBuf>,
}

#[derive(Serialize)]
struct CaseReport<'a> {
  case: String,
  n: usize,
  k: usize,
  secret: &'a FieldElement,
}

fn run_case(path: &Path, check_subsets: usize) -> Result<(TestCase, FieldElement), RecoverError> {
  let span = info_span!("case", path = %path.display());
  let _enter = span.enter();

  let case = TestCase::from_path(path)?;
  let secret = case.secret(check_subsets)?;
  info!(n = case.n, k = case.k, %secret, "recovered secret");
  Ok((case, secret))
}

/// Processes every path, returning the report lines of the cases that succeeded and
/// the number of cases that failed.
fn run(args: &Args) -> (Vec<String>, usize) {
  let results: Vec<_> = args
    .paths
    .par_iter()
    .map(|path| run_case(path, args.check))
    .collect();

  let mut reports = Vec::with_capacity(results.len());
  let mut failed = 0;
  for (path, result) in args.paths.iter().zip(results) {
    match result {
      Ok((case, secret)) if args.json => {
        let report = CaseReport {
          case: path.display().to_string(),
          n: case.n,
          k: case.k,
          secret: &secret,
        };
        match serde_json::to_string(&report) {
          Ok(line) => reports.push(line),
          Err(e) => {
            error!(path = %path.display(), error = %e, "failed to serialize report");
            failed += 1;
          }
        }
      }
      Ok((_, secret)) => reports.push(format!("{}: {secret}", path.display())),
      Err(e) => {
        error!(path = %path.display(), error = %e, "skipping case");
        failed += 1;
      }
    }
  }
  (reports, failed)
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let (reports, failed) = run(&args);
  for line in reports {
    println!("{line}");
  }

  if failed > 0 {
    error!(failed, total = args.paths.len(), "some cases failed");
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}
