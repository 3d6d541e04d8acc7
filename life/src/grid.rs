use crate::cell::CellState::{Alive, Dead};
use crate::cell::{Cell, CellState};
use crate::error::GridError;
use rand::Rng;

/// Offsets of the Moore neighbourhood, self excluded.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size, bounded board stored row-major.
///
/// Coordinates are `(x, y)` with `0 <= x < width` and `0 <= y < height`.
/// They are signed so a caller stepping off the board gets an
/// [`GridError::OutOfRange`] instead of an underflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid. Both sides must be at least one cell, and
    /// the cell count must fit in an `isize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::default(); len],
        })
    }

    /// A grid of the same size filled, row-major, from `states`.
    /// Cells past the end of `states` are dead.
    pub(crate) fn with_states<I>(&self, states: I) -> Self
    where
        I: IntoIterator<Item = CellState>,
    {
        let mut cells = vec![Cell::default(); self.cells.len()];
        for (cell, state) in cells.iter_mut().zip(states) {
            cell.set(state);
        }
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: isize, y: isize) -> Result<CellState, GridError> {
        let index = self.checked_index(x, y)?;
        Ok(self.cells[index].state())
    }

    /// Updates a single cell; no other cell is touched.
    pub fn set(&mut self, x: isize, y: isize, state: CellState) -> Result<(), GridError> {
        let index = self.checked_index(x, y)?;
        self.cells[index].set(state);
        Ok(())
    }

    /// Count the number of alive neighbours for a cell.
    ///
    /// Neighbours that would lie beyond the edge are not counted, so a
    /// corner has three candidates and an edge cell five.
    pub fn count_live_neighbours(&self, x: isize, y: isize) -> Result<u8, GridError> {
        self.checked_index(x, y)?;
        Ok(self.live_neighbours(x, y))
    }

    /// Caller guarantees `(x, y)` is on the board.
    pub(crate) fn live_neighbours(&self, x: isize, y: isize) -> u8 {
        let mut count = 0;

        for (dx, dy) in NEIGHBOUR_OFFSETS {
            if let Some(index) = self.index(x + dx, y + dy) {
                if self.cells[index].is_alive() {
                    count += 1;
                }
            }
        }

        count
    }

    /// Every cell state in row-major order: y from top to bottom, x left to right.
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().map(Cell::state)
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// All coordinates on the board in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (isize, isize)> {
        let (width, height) = (self.width as isize, self.height as isize);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Coordinates of the live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.coordinates()
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.is_alive())
            .map(|(coordinate, _)| coordinate)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Sets every cell alive with probability `density`.
    ///
    /// # Panics
    ///
    /// If `density` is not within `0.0..=1.0`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        for cell in self.cells.iter_mut() {
            cell.set(if rng.random_bool(density) { Alive } else { Dead });
        }
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let in_bounds =
            (0..self.width as isize).contains(&x) && (0..self.height as isize).contains(&y);
        in_bounds.then(|| y as usize * self.width + x as usize)
    }

    fn checked_index(&self, x: isize, y: isize) -> Result<usize, GridError> {
        self.index(x, y).ok_or(GridError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }
}
