//! Append-only game event log.
//!
//! The file `GameLog_HH_MM_SS.txt` is created on the first recorded event.
//! Logging is best effort: I/O failures are reported once through `log`
//! and the game carries on without the file.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};

/// One line of the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    actor: &'a str,
    message: &'a str,
    at: Option<(i32, i32)>,
    direction: Option<char>,
}

impl<'a> Entry<'a> {
    /// Event attributed to the console.
    pub fn new(message: &'a str) -> Self {
        Self {
            actor: "Console",
            message,
            at: None,
            direction: None,
        }
    }

    pub fn by(mut self, actor: &'a str) -> Self {
        self.actor = actor;
        self
    }

    pub fn at(mut self, row: i32, col: i32) -> Self {
        self.at = Some((row, col));
        self
    }

    pub fn facing(mut self, direction: char) -> Self {
        self.direction = Some(direction);
        self
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.actor, self.message)?;
        if let Some((row, col)) = self.at {
            write!(f, " ({}, {})", row, col)?;
        }
        if let Some(d) = self.direction {
            write!(f, " Direction: {}", d)?;
        }
        Ok(())
    }
}

enum Sink {
    Disabled,
    Pending(PathBuf),
    Open { path: PathBuf, file: File },
    Failed,
}

/// Event logger owned by the session for the lifetime of the process.
pub struct EventLog {
    sink: Sink,
}

impl EventLog {
    /// Log into a new file under `dir`, created when the first event arrives.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            sink: Sink::Pending(dir.into()),
        }
    }

    /// Logger that records nothing.
    pub fn disabled() -> Self {
        Self { sink: Sink::Disabled }
    }

    /// Path of the log file once it has been created.
    pub fn path(&self) -> Option<&Path> {
        match &self.sink {
            Sink::Open { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn record(&mut self, entry: Entry<'_>) {
        info!("{}", entry);
        if let Sink::Pending(dir) = &self.sink {
            self.sink = match create(dir) {
                Ok((path, file)) => Sink::Open { path, file },
                Err(e) => {
                    warn!("event log disabled: cannot create file in {}: {}", dir.display(), e);
                    Sink::Failed
                }
            };
        }
        if let Sink::Open { path, file } = &mut self.sink {
            let stamp = Local::now().format("%H:%M:%S");
            if let Err(e) = writeln!(file, "[{}] {}", stamp, entry) {
                warn!("event log disabled: write to {} failed: {}", path.display(), e);
                self.sink = Sink::Failed;
            }
        }
    }
}

fn create(dir: &Path) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let name = format!("GameLog_{}.txt", Local::now().format("%H_%M_%S"));
    let path = dir.join(name);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}
