use crate::cell::CellState::Alive;
use crate::error::GridError;
use crate::grid::Grid;

/// A named set of live cells, given relative to the pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(1, 0), (1, 1), (1, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn extent(&self) -> (isize, isize) {
        let width = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (width, height)
    }

    /// Live cells translated so the pattern's corner sits at `(x, y)`.
    pub fn cells_at(&self, x: isize, y: isize) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.cells.iter().map(move |&(dx, dy)| (x + dx, y + dy))
    }

    /// Brings the pattern to life on `grid` with its corner at `(x, y)`.
    ///
    /// Nothing is written unless every cell fits.
    pub fn place(&self, grid: &mut Grid, x: isize, y: isize) -> Result<(), GridError> {
        if self.cells_at(x, y).any(|(cx, cy)| grid.get(cx, cy).is_err()) {
            return Err(GridError::PatternOutOfBounds {
                name: self.name,
                x,
                y,
            });
        }
        for (cx, cy) in self.cells_at(x, y) {
            grid.set(cx, cy, Alive)?;
        }
        Ok(())
    }

    /// Places the pattern in the middle of `grid`.
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), GridError> {
        let (width, height) = self.extent();
        let x = (grid.width() as isize - width) / 2;
        let y = (grid.height() as isize - height) / 2;
        self.place(grid, x, y)
    }
}
