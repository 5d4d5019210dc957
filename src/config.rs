//! Runtime settings for the terminal driver.
//!
//! Everything has a default; environment variables override:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BITRIS_COLUMNS` | 10 | Board width, clamped to 4..=24 |
//! | `BITRIS_TICK_MS` | 1000 | Gravity interval (min 10) |
//! | `BITRIS_SEED` | clock | Piece RNG seed |
//! | `BITRIS_LOG_PATH` | unset | JSON-lines event log file |
//!
//! Unparseable values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{
    Dimensions, DEFAULT_COLUMNS, MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS, TICK_MS,
};

const MIN_TICK_MS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub columns: u8,
    pub tick_ms: u32,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            tick_ms: TICK_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl Settings {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let columns = lookup("BITRIS_COLUMNS")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .map(|c| c.clamp(MIN_COLUMNS, MAX_COLUMNS))
            .unwrap_or(DEFAULT_COLUMNS);

        let tick_ms = lookup("BITRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|t| t.max(MIN_TICK_MS))
            .unwrap_or(TICK_MS);

        let seed = lookup("BITRIS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("BITRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            columns,
            tick_ms,
            seed,
            log_path,
        }
    }

    /// Configured seed, or one derived from the wall clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    /// Board size for the configured width and `available_rows` of vertical space
    pub fn dimensions(&self, available_rows: u16) -> Dimensions {
        let rows = available_rows.clamp(MIN_ROWS as u16, MAX_ROWS as u16) as u8;
        Dimensions::new(self.columns, rows).unwrap_or_default()
    }
}
