//! Board layout: turns a core [`RenderState`] into cells of a [`FrameBuffer`].
//!
//! Nothing here touches the terminal, so layouts are checked in plain tests.

use crate::core::RenderState;
use crate::fb::{FrameBuffer, Tone};

/// Size of the area the view may draw into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Vertical placement of the board when the viewport is taller than it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub const SETTLED_GLYPH: char = '█';
pub const FALLING_GLYPH: char = '▓';
pub const EMPTY_GLYPH: char = '·';

const PANEL_MIN_WIDTH: u16 = 12;

/// Screen rectangle of the bordered board
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Frame {
    fn right(self) -> u16 {
        self.x.saturating_add(self.w)
    }

    fn bottom(self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

/// Draws the board, the side panel and the game-over banner.
///
/// Each board cell is `cell_w` columns by one row; two columns keep cells
/// roughly square in most terminal fonts.
pub struct GameView {
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board rows that fit in `height` terminal rows once the border is drawn
    pub fn rows_for_height(&self, height: u16) -> u16 {
        height.saturating_sub(2)
    }

    /// Draw `snap` into `fb`, resizing it to `viewport` when needed
    pub fn render_into(&self, snap: &RenderState, viewport: Viewport, fb: &mut FrameBuffer) {
        if (fb.width(), fb.height()) == (viewport.width, viewport.height) {
            fb.clear();
        } else {
            fb.resize(viewport.width, viewport.height);
        }

        let frame = self.frame(snap, viewport);
        draw_border(fb, frame);
        self.draw_cells(fb, snap, frame);
        draw_panel(fb, snap, frame, viewport);
        if snap.game_over {
            draw_banner(fb, frame, "GAME OVER");
        }
    }

    pub fn render(&self, snap: &RenderState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, snap: &RenderState, viewport: Viewport) -> Frame {
        let w = snap.dimensions.columns() as u16 * self.cell_w + 2;
        let h = snap.dimensions.rows() as u16 + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, snap: &RenderState, frame: Frame) {
        let dims = snap.dimensions;
        for row in 0..dims.rows() {
            let py = frame.y + 1 + row as u16;
            for col in 0..dims.columns() {
                let (ch, tone) = if snap.active_cell(col, row as usize) {
                    (FALLING_GLYPH, Tone::Falling)
                } else if snap.field_cell(col, row as usize) {
                    (SETTLED_GLYPH, Tone::Settled)
                } else {
                    (EMPTY_GLYPH, Tone::Empty)
                };
                let px = frame.x + 1 + col as u16 * self.cell_w;
                fb.fill(px, py, self.cell_w, 1, ch, tone);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame) {
    if frame.w < 2 || frame.h < 2 {
        return;
    }
    let (left, top) = (frame.x, frame.y);
    let (right, bottom) = (frame.right() - 1, frame.bottom() - 1);

    for x in left + 1..right {
        fb.put(x, top, '─', Tone::Border);
        fb.put(x, bottom, '─', Tone::Border);
    }
    for y in top + 1..bottom {
        fb.put(left, y, '│', Tone::Border);
        fb.put(right, y, '│', Tone::Border);
    }
    for (x, y, ch) in [
        (left, top, '┌'),
        (right, top, '┐'),
        (left, bottom, '└'),
        (right, bottom, '┘'),
    ] {
        fb.put(x, y, ch, Tone::Border);
    }
}

/// Counters and key hints to the right of the board, when there is room
fn draw_panel(fb: &mut FrameBuffer, snap: &RenderState, frame: Frame, viewport: Viewport) {
    let x = frame.right().saturating_add(2);
    if viewport.width.saturating_sub(x) < PANEL_MIN_WIDTH {
        return;
    }

    let mut y = frame.y;
    for (label, value) in [
        ("PIECES", snap.pieces_spawned),
        ("LINES", snap.lines_cleared),
        ("GAME", snap.episode_id + 1),
    ] {
        fb.text(x, y, label, Tone::Label);
        fb.number(x, y + 1, value, Tone::Value);
        y = y.saturating_add(3);
    }

    let hints: &[&str] = if snap.game_over {
        &["r restart", "q quit"]
    } else {
        &["←→ move", "↑ rotate", "↓ drop", "q quit"]
    };
    for (i, hint) in hints.iter().enumerate() {
        fb.text(x, y.saturating_add(i as u16), hint, Tone::Hint);
    }
}

/// `text` centered on the middle row of the board
fn draw_banner(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let width = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(width) / 2);
    fb.text(x, frame.y.saturating_add(frame.h / 2), text, Tone::Overlay);
}
