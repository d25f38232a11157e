//! Implementation of the generate command.
//!
//! # Flow
//!
//! 1. Decode the JSON spec argument
//! 2. Require `file`
//! 3. Stop successfully if something already exists at `file`
//! 4. Require a non-empty `input`
//! 5. Print the banner, then ask each field in declaration order
//! 6. Append the rendered lines to `file` under an exclusive lock
//!
//! The target is only touched in step 6, so any earlier failure or interrupt
//! leaves the filesystem unchanged.

mod prompt;


use crate::error::{GeneratorError, Result};
use crate::fs::append_locked;
use crate::spec::{RawSpec, render};
use prompt::Prompter;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const BANNER: &str = concat!(
    "\n",
    "\x1b[1;37m\x1b[44m                                         \x1b[0m\n",
    "\x1b[1;37m\x1b[44m    Welcome to the INI file generator    \x1b[0m\n",
    "\x1b[1;37m\x1b[44m                                         \x1b[0m\n",
    "\n",
);

/// Options for a generate run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Print the rendered file instead of writing it.
    pub dry_run: bool,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target already existed; nothing was asked or written.
    AlreadyExists,
    /// The file was written.
    Created { bytes: usize },
    /// The content was printed instead of written.
    DryRun,
}

/// Execute the generate command.
///
/// `arg` is the raw JSON argument. Prompts and messages go to `out`, answers
/// are read from `input`. Errors are returned unprinted; the caller reports
/// them.
pub fn cmd_generate<R: BufRead, W: Write>(
    arg: Option<&str>,
    options: GenerateOptions,
    input: R,
    out: &mut W,
) -> Result<Outcome> {
    let arg = arg.ok_or(GeneratorError::Usage)?;
    let mut spec = RawSpec::parse(arg)?;

    let target = spec.target()?.to_path_buf();
    let file = target.display().to_string();

    if target.exists() {
        debug!(file = %file, "target exists, leaving it untouched");
        say(out, "INI file already exists")?;
        return Ok(Outcome::AlreadyExists);
    }

    let fields = spec.take_fields()?;
    debug!(file = %file, fields = fields.len(), "spec accepted");

    write!(out, "{BANNER}").map_err(GeneratorError::Input)?;
    say(
        out,
        &format!("This command will guide you through creating your {file} file.\n"),
    )?;

    let answers = Prompter::new(input, &mut *out).ask_all(&fields)?;
    let content = render(&answers);

    if options.dry_run {
        write!(out, "\n{content}").map_err(GeneratorError::Input)?;
        return Ok(Outcome::DryRun);
    }

    let bytes = append_locked(&target, content.as_bytes())?;
    info!(file = %file, bytes, "file written");

    // The file exists now; a lost confirmation must not turn into a failure.
    if let Err(err) = say(out, &format!("{file} created successfully!")) {
        warn!(file = %file, error = ?err, "could not print confirmation");
    }

    Ok(Outcome::Created { bytes })
}

/// Write one message line to the operator.
fn say<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{message}").map_err(GeneratorError::Input)
}
