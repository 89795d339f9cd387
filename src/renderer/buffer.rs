//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells holding a visual root's latest
//! output. Flat storage with row-major indexing: `index = y * width + x`.

use unicode_width::UnicodeWidthChar;

use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, Rgba::TERMINAL_DEFAULT)
    }

    /// Create a new buffer with a specific background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let size = width as usize * height as usize;
        let cell = Cell { bg, ..Cell::default() };
        Self {
            width,
            height,
            cells: vec![cell; size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row, or an empty slice when out of bounds.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = self.index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// Draw text at a position, keeping each cell's background.
    ///
    /// Returns the number of cells used (wide characters take two).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgba, attrs: Attr) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            let char_width = ch.width().unwrap_or(0) as u16;
            if char_width == 0 {
                continue;
            }
            let Some(end) = col.checked_add(char_width).filter(|&end| end <= self.width) else {
                break;
            };

            if let Some(cell) = self.get_mut(col, y) {
                cell.char = ch as u32;
                cell.fg = fg;
                cell.attrs = attrs;
            }
            if char_width == 2 {
                if let Some(next) = self.get_mut(col.saturating_add(1), y) {
                    next.char = 0; // Continuation marker
                    next.fg = fg;
                    next.attrs = attrs;
                }
            }

            col = end;
        }

        col.saturating_sub(x)
    }

    /// Plain text of one row with trailing spaces removed.
    pub fn row_text(&self, y: u16) -> String {
        let text: String = self
            .row(y)
            .iter()
            .filter(|cell| cell.char != 0)
            .filter_map(|cell| char::from_u32(cell.char))
            .collect();
        text.trim_end().to_string()
    }
}

/// Display width of a string in cells.
pub fn string_width(s: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(s)
}
