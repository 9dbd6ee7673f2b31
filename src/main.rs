//! Interactive partial-year annual leave calculator.
//!
//! Prompts for the full-year allowance and two dates, then prints the
//! prorated entitlement. Logs go to stderr and are filtered by `RUST_LOG`.

use std::io::{self, IsTerminal};
use std::process;

use chrono::Local;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use leave_calculator::cli::{Args, report_outcome, run_session};
use leave_calculator::config::ConfigLoader;
use leave_calculator::error::{LeaveError, LeaveResult};
use leave_calculator::input::Prompter;
use leave_calculator::models::ProrationResult;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let args = Args::parse();
    let json = args.json;

    let outcome = run(args).await;
    let code = report_outcome(outcome, json, &mut io::stdout(), &mut io::stderr());

    // The blocking prompt thread may still be waiting on stdin.
    process::exit(code);
}

async fn run(args: Args) -> LeaveResult<ProrationResult> {
    let loader = ConfigLoader::load_or_default(args.config.as_ref())?;
    let config = loader.config().clone();
    let today = Local::now().date_naive();
    let mode = args.mode;
    debug!(?mode, %today, "Starting leave calculation session");

    let session = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        run_session(&mut prompter, &config, mode, today)
    });

    tokio::select! {
        joined = session => joined.map_err(io::Error::other)?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            Err(LeaveError::Interrupted)
        }
    }
}
