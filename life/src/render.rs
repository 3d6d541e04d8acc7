//! Plain-text form of a board: `X` for a live cell, a space for a dead one,
//! every row terminated by a newline.

use std::fmt;

use crate::cell::Cell;
use crate::grid::Grid;

pub const ALIVE: char = 'X';
pub const DEAD: char = ' ';

pub fn symbol(cell: &Cell) -> char {
    if cell.is_alive() {
        ALIVE
    } else {
        DEAD
    }
}

pub fn render(grid: &Grid) -> String {
    grid.to_string()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", symbol(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
