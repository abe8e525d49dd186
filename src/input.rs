//! Line-oriented input sources and the token parsers used by the prompts.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Source of blocking line reads.
pub trait InputSource {
    /// Block until a full line is available. `Ok(None)` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// Reads from the process's standard input.
pub struct StdinInput {
    stdin: io::Stdin,
}

impl StdinInput {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        io::stdout().flush()?;
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Pre-recorded lines, optionally delayed, standing in for a human at the
/// keyboard.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<(Duration, String)>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = Self::default();
        input.extend(lines);
        input
    }

    /// Queue a line that is returned immediately.
    pub fn push(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push_back((Duration::ZERO, line.into()));
        self
    }

    /// Queue a line that only arrives after `delay`, like a slow typist.
    pub fn push_delayed(&mut self, line: impl Into<String>, delay: Duration) -> &mut Self {
        self.lines.push_back((delay, line.into()));
        self
    }

    pub fn extend<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line);
        }
        self
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.pop_front() {
            Some((delay, line)) => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }
}

/// A whole line holding one integer.
pub fn parse_int(line: &str) -> Option<i32> {
    line.trim().parse().ok()
}

/// A whole line holding exactly one character.
pub fn parse_char(line: &str) -> Option<char> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// `row col`, separated by whitespace or a comma.
pub fn parse_coord(line: &str) -> Option<(i32, i32)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    match parts.next() {
        None => Some((row, col)),
        Some(_) => None,
    }
}

/// `row col direction`, e.g. `3 4 h`.
pub fn parse_placement(line: &str) -> Option<(i32, i32, char)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let direction = parse_char(parts.next()?)?;
    match parts.next() {
        None => Some((row, col, direction)),
        Some(_) => None,
    }
}
