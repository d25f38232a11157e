//! inigen: interactive INI file generator.
//!
//! This is the main entry point for the `inigen` CLI. It parses arguments,
//! runs the generator, and reports errors on stdout with the matching exit code.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod spec;

#[cfg(test)]
mod test_support;

use cli::Cli;
use commands::Outcome;
use error::GeneratorError;
use std::error::Error as _;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, warn};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(outcome) => {
            if let Outcome::Created { bytes } = outcome {
                debug!(bytes, "done");
            }
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            if let GeneratorError::Write { path, source } = &err {
                warn!(path = %path.display(), error = %source, "write failed");
            } else if let Some(source) = err.source() {
                debug!(error = %source, "generator failed");
            }

            // All user-facing messages, errors included, go to stdout
            let _ = writeln!(io::stdout(), "{}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
