//! Terminal runner (default binary).
//!
//! Reads settings from the environment, then loops: draw, poll input until the
//! next gravity tick, apply. The terminal is restored before any diagnostics
//! are printed.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use bitris::config::Settings;
use bitris::core::RenderState;
use bitris::driver::Driver;
use bitris::event_log::EventLog;
use bitris::input::{handle_key_event, should_quit};
use bitris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

type FileDriver = Driver<BufWriter<File>>;

fn main() -> Result<()> {
    let settings = Settings::from_env();
    let log = match settings.log_path.as_deref() {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };

    let view = GameView::default();
    let (_, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut driver = Driver::new(settings, view.rows_for_height(h), log);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &view, &mut driver);

    // Restore the terminal even when the loop failed.
    let _ = term.exit();

    if let Some(err) = driver.log_mut().take_error() {
        eprintln!("[bitris] event log disabled: {err}");
    }
    let session = driver.session();
    eprintln!(
        "[bitris] {} game(s), last: {} pieces, {} lines",
        session.episode_id() + 1,
        session.pieces_spawned(),
        session.lines_cleared()
    );
    result
}

fn run(term: &mut TerminalRenderer, view: &GameView, driver: &mut FileDriver) -> Result<()> {
    let tick_duration = Duration::from_millis(driver.settings().tick_ms as u64);
    let mut last_tick = Instant::now();
    let mut state = RenderState::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        driver.render_state_into(&mut state);
        view.render_into(&state, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Wait for a key, but no longer than the time left in this tick.
        if event::poll(tick_duration.saturating_sub(last_tick.elapsed()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        driver.apply(action, view.rows_for_height(h));
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            driver.tick();
        }
    }
}
