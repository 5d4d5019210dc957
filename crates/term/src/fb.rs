//! Character grid the game view draws into.
//!
//! Cells carry a [`Tone`] naming what they show rather than concrete colors; the
//! renderer owns the palette.

/// What a cell depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Blank,
    Border,
    Settled,
    Falling,
    Empty,
    Label,
    Value,
    Hint,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        tone: Tone::Blank,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of cells. Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change size and blank every cell. The allocation is reused.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::BLANK);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cells of row `y`; empty past the bottom edge
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(x as usize).copied()
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, tone: Tone) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.cells[i] = Cell { ch, tone };
        }
    }

    /// Write `s` from `x` rightwards; returns the column after the last char
    pub fn text(&mut self, x: u16, y: u16, s: &str, tone: Tone) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            self.put(cx, y, ch, tone);
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Write `n` in decimal without allocating
    pub fn number(&mut self, x: u16, y: u16, n: u32, tone: Tone) -> u16 {
        let mut buf = [0u8; 10];
        let mut start = buf.len();
        let mut rest = n;
        loop {
            start -= 1;
            buf[start] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        match std::str::from_utf8(&buf[start..]) {
            Ok(digits) => self.text(x, y, digits, tone),
            Err(_) => x,
        }
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, tone: Tone) {
        for cy in y..y.saturating_add(h) {
            for cx in x..x.saturating_add(w) {
                self.put(cx, cy, ch, tone);
            }
        }
    }

    /// Characters of one line, for tests and debugging
    pub fn line(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}
