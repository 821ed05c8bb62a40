//! ASCII rendering surface.
//!
//! Scales the editor's canvas-unit coordinate space down onto a fixed
//! character grid. Lit nodes render as `#`, unlit as `o`, edges as `.`
//! runs plotted with Bresenham's algorithm. Node glyphs win over edge
//! cells so endpoints stay readable.

use lumigraph_core::{Renderer, Result};

const GRID_COLS: usize = 72;
const GRID_ROWS: usize = 24;

const LIT_NODE: char = '#';
const UNLIT_NODE: char = 'o';
const EDGE_CELL: char = '.';

/// A character-grid implementation of the core's rendering seam.
#[derive(Debug)]
pub struct AsciiCanvas {
    width: i64,
    height: i64,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// Creates a canvas covering `width × height` canvas units.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: i64::from(width),
            height: i64::from(height),
            cells: vec![' '; GRID_COLS * GRID_ROWS],
        }
    }

    /// Renders the current frame with a border, for terminal output.
    pub fn frame(&self) -> String {
        let horizontal = "-".repeat(GRID_COLS);
        let mut out = String::with_capacity((GRID_COLS + 3) * (GRID_ROWS + 2));
        out.push('+');
        out.push_str(&horizontal);
        out.push_str("+\n");
        for row in 0..GRID_ROWS {
            out.push('|');
            out.extend(&self.cells[row * GRID_COLS..(row + 1) * GRID_COLS]);
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&horizontal);
        out.push('+');
        out
    }

    /// Maps canvas units onto the character grid, clamping out-of-canvas
    /// coordinates to the border cells.
    fn project(&self, x: i64, y: i64) -> (i64, i64) {
        let col = x * (GRID_COLS as i64 - 1) / self.width.max(1);
        let row = y * (GRID_ROWS as i64 - 1) / self.height.max(1);
        (
            col.clamp(0, GRID_COLS as i64 - 1),
            row.clamp(0, GRID_ROWS as i64 - 1),
        )
    }

    fn plot(&mut self, col: i64, row: i64, glyph: char, overwrite_nodes: bool) {
        #[allow(clippy::cast_sign_loss)] // clamped to grid bounds above
        let idx = row as usize * GRID_COLS + col as usize;
        let cell = &mut self.cells[idx];
        if overwrite_nodes || (*cell != LIT_NODE && *cell != UNLIT_NODE) {
            *cell = glyph;
        }
    }
}

impl Renderer for AsciiCanvas {
    fn clear(&mut self) -> Result<()> {
        self.cells.fill(' ');
        Ok(())
    }

    fn draw_circle(&mut self, x: i64, y: i64, filled: bool) -> Result<()> {
        let (col, row) = self.project(x, y);
        self.plot(col, row, if filled { LIT_NODE } else { UNLIT_NODE }, true);
        Ok(())
    }

    fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> Result<()> {
        let (mut col, mut row) = self.project(x1, y1);
        let (end_col, end_row) = self.project(x2, y2);

        let dx = (end_col - col).abs();
        let dy = -(end_row - row).abs();
        let step_col = if col < end_col { 1 } else { -1 };
        let step_row = if row < end_row { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(col, row, EDGE_CELL, false);
            if col == end_col && row == end_row {
                break;
            }
            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                col += step_col;
            }
            if doubled <= dx {
                err += dx;
                row += step_row;
            }
        }
        Ok(())
    }
}
