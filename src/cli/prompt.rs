//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Input ended before a required answer was given.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Input closed")]
pub struct InputClosed;

/// Asks one question at a time and reads one trimmed line per answer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `Enter {label}: ` and read the answer.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "Enter {}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`ask`](Self::ask), but running out of input is an error.
    pub fn ask_required(&mut self, label: &str) -> anyhow::Result<String> {
        self.ask(label)?.ok_or_else(|| InputClosed.into())
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
