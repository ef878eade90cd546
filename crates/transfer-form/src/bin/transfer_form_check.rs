//! Form checker CLI: validates a saved form file and prints its errors.
//!
//! This binary loads [`CheckSettings`] and delegates to
//! `transfer_form::check_cli`, keeping the behaviour testable without
//! spawning a process. Logs go to stderr as JSON; the error object goes to
//! stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use transfer_form::CheckSettings;
use transfer_form::check_cli::{CheckError, run_check};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool, CheckError> {
    let settings = CheckSettings::load().map_err(|err| CheckError::Config {
        message: err.to_string(),
    })?;
    let report = run_check(&settings)?;
    if let Err(err) = writeln!(io::stdout().lock(), "{}", report.errors_json) {
        drop(err);
    }
    Ok(report.valid)
}
