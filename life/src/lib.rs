/**
* A live cell dies if it has fewer than two live neighbours.
* A live cell with two or three live neighbours lives on to the next generation.
* A live cell with more than three live neighbours dies.
* A dead cell will be brought back to life if it has exactly three live neighbours.
*
* The board is bounded: cells beyond the edge are never neighbours.
*/

pub mod cell;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod simulation;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use grid::Grid;
pub use simulation::Simulation;
