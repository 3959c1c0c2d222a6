//! Room catalogue demonstration binary.
//!
//! This binary delegates to `room_catalog::demo_cli` for parsing and
//! rendering, keeping the behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use room_catalog::demo_cli::{Options, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let options = Options::parse();
    match run(&options) {
        Ok(output) => {
            if let Err(err) = io::stdout().lock().write_all(output.as_bytes()) {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
