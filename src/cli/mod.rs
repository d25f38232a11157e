//! CLI argument parsing for inigen.
//!
//! Uses clap derive macros. The spec argument is optional at the clap level so
//! that its absence is reported with the generator's own message and exit code.

use clap::Parser;

/// Interactively create an INI file from a JSON description of its fields.
///
/// Each field is asked for in declaration order; a blank answer takes the
/// field's default. Nothing is written if the target file already exists.
///
/// Example:
///
///   inigen '{"file":"conf/database.ini","input":{"host":{"question":"MySQL hostname:"}}}'
#[derive(Parser, Debug)]
#[command(name = "inigen")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// JSON spec with the target `file` and the `input` fields to ask for.
    #[arg(value_name = "SPEC")]
    pub spec: Option<String>,

    /// Print the generated content instead of writing the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
