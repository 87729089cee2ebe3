use super::Cell;
use crate::layout::Rect;
use crate::types::Rgb;

/// A grid of cells the size of the terminal. Rendering draws into one
/// buffer while the previous frame is kept around, so only changed
/// cells are written to the terminal.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Paint the background of every cell in `rect`, leaving glyphs alone.
    /// Out-of-bounds parts of the rect are clipped.
    pub fn fill_bg(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                let idx = self.index(x, y);
                self.cells[idx].bg = bg;
            }
        }
    }

    /// Place a glyph, keeping whatever background is already there, so
    /// borders and labels sit on their panel's fill.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            let cell = &mut self.cells[idx];
            cell.char = ch;
            cell.fg = fg;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Cells in self that differ from the same position in other.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
