use crate::cell::CellState::{Alive, Dead};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

/// A single square of the board. Knows its state and nothing else.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Cell {
    state: CellState,
}

impl Cell {
    pub fn new(state: CellState) -> Self {
        Cell { state }
    }

    pub fn set(&mut self, state: CellState) {
        self.state = state;
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_dead() {
        assert!(!Cell::default().is_alive());
        assert_eq!(Cell::default().state(), Dead);
    }

    #[test]
    fn set_replaces_state_unconditionally() {
        let mut cell = Cell::new(Dead);
        cell.set(Alive);
        assert!(cell.is_alive());
        cell.set(Alive);
        assert!(cell.is_alive());
        cell.set(Dead);
        assert!(!cell.is_alive());
    }

    #[test]
    fn state_from_bool() {
        assert_eq!(CellState::from(true), Alive);
        assert_eq!(CellState::from(false), Dead);
    }
}
