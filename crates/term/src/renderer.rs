//! TerminalRenderer: puts frames on a real terminal.
//!
//! Each [`Tone`] maps to one palette entry. A frame is compared row by row with
//! the one on screen and only the span between the first and last changed cell
//! of each row is rewritten. The first frame, and any frame after a size change
//! or [`TerminalRenderer::invalidate`], is drawn in full.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, FrameBuffer, Tone};

const PLAY_BG: Color = Color::Rgb {
    r: 158,
    g: 173,
    b: 134,
};
const SCREEN_BG: Color = Color::Rgb { r: 0, g: 0, b: 0 };

/// Colors and weight for one tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ink {
    fg: Color,
    bg: Color,
    weight: Option<Attribute>,
}

const fn ink(r: u8, g: u8, b: u8, bg: Color, weight: Option<Attribute>) -> Ink {
    Ink {
        fg: Color::Rgb { r, g, b },
        bg,
        weight,
    }
}

fn ink_for(tone: Tone) -> Ink {
    match tone {
        Tone::Blank => ink(220, 220, 220, SCREEN_BG, None),
        Tone::Border => ink(200, 200, 200, SCREEN_BG, None),
        Tone::Settled => ink(20, 24, 16, PLAY_BG, None),
        Tone::Falling => ink(0, 0, 0, PLAY_BG, Some(Attribute::Bold)),
        Tone::Empty => ink(120, 134, 100, PLAY_BG, Some(Attribute::Dim)),
        Tone::Label => ink(220, 220, 220, SCREEN_BG, Some(Attribute::Bold)),
        Tone::Value => ink(200, 200, 200, SCREEN_BG, None),
        Tone::Hint => ink(200, 200, 200, SCREEN_BG, Some(Attribute::Dim)),
        Tone::Overlay => ink(255, 255, 255, SCREEN_BG, Some(Attribute::Bold)),
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )
        .context("entering alternate screen")?;
        self.shown = None;
        Ok(())
    }

    /// Undo [`enter`](Self::enter)
    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )
        .context("leaving alternate screen")?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        Ok(())
    }

    /// Draw the next frame in full (after a terminal resize)
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `frame`, then hand back the previous frame's buffer in its place so
    /// the caller can draw into it next time.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.shown.as_ref(), frame, &mut self.bytes)?;
        self.stdout
            .write_all(&self.bytes)
            .and_then(|_| self.stdout.flush())
            .context("writing frame to terminal")?;

        match self.shown.as_mut() {
            Some(shown) => std::mem::swap(shown, frame),
            None => self.shown = Some(std::mem::replace(frame, FrameBuffer::new(0, 0))),
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `shown` into `next`.
///
/// With no previous frame, or one of another size, the screen is cleared and
/// every row is written.
pub fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current: Option<Tone> = None;
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match shown {
            Some(s) => dirty_span(s.row(y), row),
            None => Some((0, row.len())),
        };
        let Some((start, end)) = span else {
            continue;
        };

        out.queue(cursor::MoveTo(start as u16, y))?;
        for cell in &row[start..end] {
            if current != Some(cell.tone) {
                set_ink(out, ink_for(cell.tone))?;
                current = Some(cell.tone);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    Ok(())
}

/// Half-open range from the first to just past the last differing cell
fn dirty_span(old: &[Cell], new: &[Cell]) -> Option<(usize, usize)> {
    let differs = |i: &usize| old.get(*i) != new.get(*i);
    let first = (0..new.len()).find(differs)?;
    let last = (first..new.len()).rev().find(differs)?;
    Some((first, last + 1))
}

fn set_ink(out: &mut Vec<u8>, ink: Ink) -> io::Result<()> {
    // Attribute reset also drops colors, so it goes first.
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetColors(Colors::new(ink.fg, ink.bg)))?;
    if let Some(weight) = ink.weight {
        out.queue(SetAttribute(weight))?;
    }
    Ok(())
}
