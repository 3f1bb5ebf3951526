//! Text rendering of a grid.

use core::fmt::{self, Write};

use crate::coord::Coordinate;
use crate::grid::{Cell, Grid};

/// Glyph drawn for `cell`. Intact ship cells are hidden unless `reveal`.
pub fn glyph(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship if reveal => 'S',
        Cell::Ship => '.',
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Contour => '·',
    }
}

/// Write `grid` as a table with 1-based row and column labels.
pub fn render_grid<W: Write>(out: &mut W, grid: &Grid, reveal: bool) -> fmt::Result {
    let n = grid.size();
    write!(out, "   ")?;
    for c in 0..n {
        write!(out, " {:>2}", c + 1)?;
    }
    writeln!(out)?;
    for r in 0..n {
        write!(out, "{:>2} ", r + 1)?;
        for c in 0..n {
            let cell = grid
                .cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(Cell::Empty);
            write!(out, "  {}", glyph(cell, reveal))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_grid(f, self, self.reveal_ships())
    }
}
