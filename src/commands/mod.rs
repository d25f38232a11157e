//! Command implementations for inigen.
//!
//! inigen has a single command; this module wires it to the real terminal.

mod generate;

pub use generate::Outcome;

use crate::cli::Cli;
use crate::error::Result;
use std::io;

/// Run the generator against stdin/stdout.
pub fn dispatch(cli: Cli) -> Result<Outcome> {
    let options = generate::GenerateOptions {
        dry_run: cli.dry_run,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    generate::cmd_generate(cli.spec.as_deref(), options, stdin.lock(), &mut stdout)
}
