//! Append-only JSON-lines event log.
//!
//! Enabled by `BITRIS_LOG_PATH`. One JSON object per line, tagged with `type`.
//! A write failure disables the log for the rest of the run; the error is kept
//! so the driver can report it once the terminal is restored.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    Start {
        episode_id: u32,
        columns: u8,
        rows: u8,
        /// Only on the first game; restarts continue the same piece stream
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u32>,
    },
    Input {
        episode_id: u32,
        action: &'static str,
        changed: bool,
    },
    Fusion {
        episode_id: u32,
        piece: &'static str,
        lines_cleared: u32,
        topped_out: bool,
        pieces_spawned: u32,
    },
    GameOver {
        episode_id: u32,
        pieces_spawned: u32,
        lines_cleared: u32,
    },
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
    error: Option<io::Error>,
}

impl EventLog<BufWriter<File>> {
    /// Open (or create) `path` for appending
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn to_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
            error: None,
        }
    }

    /// A log that drops every record
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            error: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, record) {
            self.error = Some(e.into());
            self.out = None;
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = out.write_all(&self.buf).and_then(|_| out.flush()) {
            self.error = Some(e);
            self.out = None;
        }
    }

    /// The error that disabled the log, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
