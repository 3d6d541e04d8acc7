use crate::cell::CellState::{self, Alive, Dead};

/// The state a cell takes in the next generation, given its current state
/// and how many of its neighbours are alive.
pub fn next_state(current: CellState, live_neighbours: u8) -> CellState {
    match (current, live_neighbours) {
        (_, 3) => Alive,     // Survives or becomes alive
        (Alive, 2) => Alive, // Survives
        _ => Dead,           // Dies or remains dead
    }
}
