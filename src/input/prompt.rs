//! Console prompting.
//!
//! A [`Prompter`] writes a question with its default in brackets, reads a
//! single line, and resolves it with [`resolve_input`]. It is generic over
//! its reader and writer so sessions can be driven from in-memory buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{LeaveError, LeaveResult};

use super::resolve::resolve_input;

/// Asks questions on a writer and reads answers from a reader.
///
/// # Example
///
/// ```
/// use leave_calculator::input::{Prompter, parse_allowance};
/// use leave_calculator::models::LeaveAllowance;
/// use rust_decimal::Decimal;
///
/// let statutory = LeaveAllowance::new(Decimal::new(28, 0)).unwrap();
/// let mut prompter = Prompter::new(&b"\n"[..], Vec::new());
///
/// let answer = prompter
///     .ask("How many days?", "allowance", statutory, parse_allowance)
///     .unwrap();
/// assert_eq!(answer, statutory);
/// assert_eq!(prompter.into_writer(), b"How many days? [28]: ");
/// ```
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading answers from `reader` and writing
    /// questions to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Asks one question and resolves the answer.
    ///
    /// Returns [`LeaveError::Interrupted`] at end of input and
    /// [`LeaveError::InvalidInput`] for a non-empty answer `parser` rejects.
    pub fn ask<T, F>(
        &mut self,
        message: &str,
        field: &str,
        default: T,
        parser: F,
    ) -> LeaveResult<T>
    where
        T: Display,
        F: Fn(&str) -> Result<T, String>,
    {
        write!(self.writer, "{} [{}]: ", message, default)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!(field, "End of input at prompt");
            return Err(LeaveError::Interrupted);
        }

        resolve_input(&line, default, field, parser)
    }

    /// Consumes the prompter, returning its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
