//! Driver glue between input events, the game session and the event log.
//!
//! The terminal loop in `main.rs` owns timing and drawing; everything that
//! touches game state goes through [`Driver`] so it can run headless in tests.

use std::io::Write;

use crate::config::Settings;
use crate::core::{GameSession, RenderState};
use crate::event_log::{EventLog, LogRecord};
use crate::types::GameAction;

pub struct Driver<W: Write> {
    settings: Settings,
    session: GameSession,
    log: EventLog<W>,
}

impl<W: Write> Driver<W> {
    /// Start the first game on a board that fits `available_rows`
    pub fn new(settings: Settings, available_rows: u16, log: EventLog<W>) -> Self {
        let seed = settings.seed_or_clock();
        let dims = settings.dimensions(available_rows);
        let mut driver = Self {
            session: GameSession::new(dims, seed),
            settings,
            log,
        };
        driver.log_start(Some(seed));
        driver
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn render_state_into(&self, out: &mut RenderState) {
        self.session.render_state_into(out);
    }

    /// Apply one input event. A restart re-derives the board height from
    /// `available_rows`, like a fresh start.
    pub fn apply(&mut self, action: GameAction, available_rows: u16) -> bool {
        if action == GameAction::Restart {
            self.session.reset(self.settings.dimensions(available_rows));
            self.log_start(None);
            return true;
        }

        let was_over = self.session.game_over();
        let changed = self.session.handle_input(action);
        if !was_over {
            self.log.record(&LogRecord::Input {
                episode_id: self.session.episode_id(),
                action: action.as_str(),
                changed,
            });
        }
        self.observe();
        changed
    }

    /// One gravity step
    pub fn tick(&mut self) -> bool {
        let changed = self.session.tick();
        self.observe();
        changed
    }

    pub fn log_mut(&mut self) -> &mut EventLog<W> {
        &mut self.log
    }

    pub fn into_log(self) -> EventLog<W> {
        self.log
    }

    fn observe(&mut self) {
        let Some(event) = self.session.take_last_event() else {
            return;
        };

        let episode_id = self.session.episode_id();
        self.log.record(&LogRecord::Fusion {
            episode_id,
            piece: event.kind.as_str(),
            lines_cleared: event.lines_cleared,
            topped_out: event.topped_out,
            pieces_spawned: self.session.pieces_spawned(),
        });

        if event.topped_out {
            self.log.record(&LogRecord::GameOver {
                episode_id,
                pieces_spawned: self.session.pieces_spawned(),
                lines_cleared: self.session.lines_cleared(),
            });
        }
    }

    fn log_start(&mut self, seed: Option<u32>) {
        let dims = self.session.dimensions();
        self.log.record(&LogRecord::Start {
            episode_id: self.session.episode_id(),
            columns: dims.columns(),
            rows: dims.rows(),
            seed,
        });
    }
}
