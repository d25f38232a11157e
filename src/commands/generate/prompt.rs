//! Interactive question/answer loop.

use crate::error::{GeneratorError, Result};
use crate::spec::{Answer, Field};
use std::io::{BufRead, Write};
use tracing::debug;

/// Asks fields one at a time over a line-oriented input and an output sink.
pub struct Prompter<'a, R, W> {
    input: R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    /// Show `"{question} [{default}]: "` and read one line.
    ///
    /// End of input counts as a blank answer, so the default is used.
    pub fn ask(&mut self, field: &Field) -> Result<Answer> {
        write!(self.output, "{} [{}]: ", field.question, field.default)
            .and_then(|()| self.output.flush())
            .map_err(GeneratorError::Input)?;

        let mut reply = String::new();
        let read = self
            .input
            .read_line(&mut reply)
            .map_err(GeneratorError::Input)?;
        if read == 0 {
            debug!(field = %field.name, "end of input");
        }

        debug!(
            field = %field.name,
            used_default = Answer::used_default(&reply),
            "answered"
        );
        Ok(Answer::from_reply(&field.name, &reply, &field.default))
    }

    /// Ask every field in order, stopping at the first I/O failure.
    pub fn ask_all<'f, I>(&mut self, fields: I) -> Result<Vec<Answer>>
    where
        I: IntoIterator<Item = &'f Field>,
    {
        fields.into_iter().map(|field| self.ask(field)).collect()
    }
}
