//! Blitz-mode turn deadline and the prompts that poll it.
//!
//! The deadline is cooperative: it is checked right before and right after
//! each blocking read. A read already in progress is never interrupted, so a
//! turn can run over its limit by however long the last read took.

use std::fmt;
use std::io;
use std::time::{Duration, Instant};

use log::trace;

use crate::input::{parse_char, parse_coord, parse_int, parse_placement, InputSource};

/// Start time and optional limit of one turn.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// A deadline that never expires (classic mode, setup menus).
    pub fn unbounded() -> Self {
        Self {
            started: Instant::now(),
            limit: None,
        }
    }

    pub fn starting_now(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn is_expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.elapsed() >= limit)
    }

    /// `Err(TimedOut)` once the limit has passed.
    pub fn check(&self) -> Result<(), ReadError> {
        if self.is_expired() {
            trace!("deadline passed after {:?}", self.elapsed());
            Err(ReadError::TimedOut)
        } else {
            Ok(())
        }
    }
}

/// Why a prompt produced no value.
#[derive(Debug)]
pub enum ReadError {
    /// The turn deadline passed at a checkpoint.
    TimedOut,
    /// The input stream ended.
    Closed,
    Io(io::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::TimedOut => write!(f, "turn time limit reached"),
            ReadError::Closed => write!(f, "input closed"),
            ReadError::Io(e) => write!(f, "failed to read input: {}", e),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

/// Prompts bound to one input source and one deadline.
pub struct Prompter<'a> {
    input: &'a mut dyn InputSource,
    deadline: Deadline,
}

impl<'a> Prompter<'a> {
    pub fn new(input: &'a mut dyn InputSource, deadline: Deadline) -> Self {
        Self { input, deadline }
    }

    /// Prompts for the setup phase, which has no timer.
    pub fn untimed(input: &'a mut dyn InputSource) -> Self {
        Self::new(input, Deadline::unbounded())
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn checkpoint(&self) -> Result<(), ReadError> {
        self.deadline.check()
    }

    /// Print `prompt` and read lines until `parse` accepts one.
    ///
    /// Malformed lines re-prompt in place. The deadline is checked before
    /// every read and after it returns; a line read past the deadline is
    /// discarded.
    pub fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, ReadError> {
        println!("{}", prompt);
        loop {
            self.checkpoint()?;
            let line = self.input.read_line()?.ok_or(ReadError::Closed)?;
            self.checkpoint()?;
            match parse(&line) {
                Some(value) => return Ok(value),
                None => println!("Invalid input. Try again."),
            }
        }
    }

    pub fn ask_int(&mut self, prompt: &str) -> Result<i32, ReadError> {
        self.ask(prompt, parse_int)
    }

    pub fn ask_char(&mut self, prompt: &str) -> Result<char, ReadError> {
        self.ask(prompt, parse_char)
    }

    pub fn ask_coord(&mut self, prompt: &str) -> Result<(i32, i32), ReadError> {
        self.ask(prompt, parse_coord)
    }

    pub fn ask_placement(&mut self, prompt: &str) -> Result<(i32, i32, char), ReadError> {
        self.ask(prompt, parse_placement)
    }
}
