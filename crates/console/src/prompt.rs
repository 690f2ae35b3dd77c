// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line-oriented prompts over any buffered reader and writer.
//!
//! Parse failures for dates, room types and yes/no answers are handled
//! here by printing a hint and asking again. Only I/O failures and end of
//! input reach the caller.

use hotel_booking_domain::{RoomType, parse_iso_date};
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use time::Date;
use tracing::debug;

/// Console errors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input ended while a value was still expected.
    #[error("input closed before a value was entered")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompts a user for values on a pair of streams.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompt, returning the underlying streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Shows `message` and reads one line, without surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputClosed` at end of input.
    pub fn read_line(&mut self, message: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;

        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Reads an ISO date (`yyyy-MM-dd`), asking again until one parses.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputClosed` at end of input.
    pub fn read_date(&mut self, message: &str) -> Result<Date, ConsoleError> {
        let question: String = format!("{message} (yyyy-MM-dd)");
        loop {
            let line: String = self.read_line(&question)?;
            match parse_iso_date(&line) {
                Ok(date) => return Ok(date),
                Err(err) => {
                    debug!(%err, "rejected date input");
                    self.say("Invalid date. Please enter the date as yyyy-MM-dd.")?;
                }
            }
        }
    }

    /// Reads a room type, asking again until one is recognized.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputClosed` at end of input.
    pub fn read_room_type(&mut self) -> Result<RoomType, ConsoleError> {
        let choices: Vec<&str> = RoomType::ALL.iter().map(RoomType::as_str).collect();
        let question: String = format!("Room type ({})", choices.join("/"));
        loop {
            let line: String = self.read_line(&question)?;
            match RoomType::from_str(&line) {
                Ok(room_type) => return Ok(room_type),
                Err(err) => self.say(&err.to_string())?,
            }
        }
    }

    /// Reads a yes/no answer, asking again until one is recognized.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputClosed` at end of input.
    pub fn read_yes_no(&mut self, message: &str) -> Result<bool, ConsoleError> {
        let question: String = format!("{message} (y/n)");
        loop {
            let line: String = self.read_line(&question)?;
            match line.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }
}
