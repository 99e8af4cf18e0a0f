//! Line-oriented console
//!
//! Generic over the reader and writer so sessions can be driven from
//! in-memory buffers.

use crate::core::{FlowError, FlowResult};
use shared::error::{DiningError, DiningResult};
use std::fmt::Display;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line
    pub fn say(&mut self, line: impl Display) -> FlowResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Read one line without its terminator
    ///
    /// Fails with [`FlowError::InputClosed`] at EOF.
    pub fn read_line(&mut self) -> FlowResult<String> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(FlowError::InputClosed);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(buf)
    }

    /// Print `text` without a newline, then read the answer
    pub fn prompt(&mut self, text: &str) -> FlowResult<String> {
        write!(self.output, "{}", text)?;
        self.read_line()
    }

    /// Read a line and parse it as a whole number
    ///
    /// The outer result carries I/O failures, the inner one bad numbers.
    pub fn read_number(&mut self) -> FlowResult<DiningResult<i64>> {
        Ok(parse_number(&self.read_line()?))
    }

    pub fn prompt_number(&mut self, text: &str) -> FlowResult<DiningResult<i64>> {
        Ok(parse_number(&self.prompt(text)?))
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a console answer as a whole number
pub fn parse_number(answer: &str) -> DiningResult<i64> {
    let answer = answer.trim();
    answer
        .parse()
        .map_err(|_| DiningError::selection(format!("'{}' is not a whole number", answer)))
}
