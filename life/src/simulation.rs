use std::sync::Arc;

use log::{debug, info, trace};

use crate::cell::CellState::Alive;
use crate::error::GridError;
use crate::grid::Grid;
use crate::render;
use crate::rules::next_state;

/// Computes the generation following `current`.
///
/// Every count is taken from `current`, which is never written to; the
/// results go into a fresh grid of the same size.
pub fn next_generation(current: &Grid) -> Grid {
    let states = current
        .coordinates()
        .zip(current.cells())
        .map(|((x, y), state)| next_state(state, current.live_neighbours(x, y)));

    current.with_states(states)
}

/// Owns the settled generation and advances it one tick at a time.
///
/// The current grid sits behind an [`Arc`]: a [`Simulation::snapshot`] taken
/// by a renderer stays exactly as it was while later ticks swap in new grids.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Arc<Grid>,
    generation: u64,
}

impl Simulation {
    /// An all-dead board of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Simulation {
            current: Arc::new(grid),
            generation: 0,
        }
    }

    /// Brings the cell at `(x, y)` to life in the current generation.
    pub fn seed(&mut self, x: isize, y: isize) -> Result<(), GridError> {
        trace!("seeding ({}, {})", x, y);
        Arc::make_mut(&mut self.current).set(x, y, Alive)
    }

    /// Seeds every coordinate, stopping at the first one off the board.
    pub fn seed_all<I>(&mut self, coordinates: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        for (x, y) in coordinates {
            self.seed(x, y)?;
        }
        Ok(())
    }

    /// Mutable access to the current generation for bulk seeding.
    pub fn grid_mut(&mut self) -> &mut Grid {
        Arc::make_mut(&mut self.current)
    }

    /// Advance the grid by one generation.
    ///
    /// Returns `false` if the new generation is identical to the old one.
    pub fn tick(&mut self) -> bool {
        let next = next_generation(&self.current);
        let changed = next != *self.current;

        self.current = Arc::new(next);
        self.generation += 1;

        debug!(
            "generation {}: population {}{}",
            self.generation,
            self.current.population(),
            if changed { "" } else { " (stable)" }
        );
        changed
    }

    /// Ticks until the board stops changing or `max_generations` ticks
    /// have run. Returns the number of ticks performed.
    pub fn run(&mut self, max_generations: u64) -> u64 {
        for performed in 1..=max_generations {
            if !self.tick() {
                info!("board stable after generation {}", self.generation);
                return performed;
            }
        }
        max_generations
    }

    pub fn current_grid(&self) -> &Grid {
        &self.current
    }

    /// A shared, immutable handle to the current generation.
    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.current)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn render(&self) -> String {
        render::render(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState::Dead;

    fn blinker() -> Simulation {
        let mut simulation = Simulation::new(3, 3).unwrap();
        simulation.seed_all([(1, 0), (1, 1), (1, 2)]).unwrap();
        simulation
    }

    #[test]
    fn prints_the_board_before_any_tick() {
        assert_eq!(blinker().render(), " X \n X \n X \n");
    }

    #[test]
    fn iterates_the_board() {
        let mut simulation = blinker();
        assert!(simulation.tick());
        assert_eq!(simulation.render(), "   \nXXX\n   \n");
        assert_eq!(simulation.generation(), 1);
    }

    #[test]
    fn blinker_has_period_two() {
        let mut simulation = blinker();
        simulation.tick();
        simulation.tick();
        assert_eq!(simulation.render(), " X \n X \n X \n");
    }

    #[test]
    fn updates_are_simultaneous() {
        // An in-place raster update would let (1, 0) dying starve (0, 1) and
        // (2, 1), so the horizontal phase would never appear.
        let mut simulation = blinker();
        simulation.tick();
        let grid = simulation.current_grid();
        assert_eq!(grid.get(0, 1), Ok(Alive));
        assert_eq!(grid.get(2, 1), Ok(Alive));
        assert_eq!(grid.get(1, 0), Ok(Dead));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn next_generation_leaves_input_untouched() {
        let simulation = blinker();
        let before = simulation.current_grid().clone();
        let next = next_generation(simulation.current_grid());
        assert_eq!(simulation.current_grid(), &before);
        assert_ne!(next, before);
        assert_eq!((next.width(), next.height()), (3, 3));
    }

    #[test]
    fn empty_board_stays_empty() {
        let mut simulation = Simulation::new(7, 5).unwrap();
        for _ in 0..10 {
            assert!(!simulation.tick());
            assert!(simulation.current_grid().is_empty());
        }
    }

    #[test]
    fn block_is_stable() {
        let mut simulation = Simulation::new(4, 4).unwrap();
        simulation.seed_all([(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        assert!(!simulation.tick());
        assert_eq!(simulation.current_grid().population(), 4);
    }

    #[test]
    fn run_stops_once_stable() {
        let mut simulation = Simulation::new(4, 4).unwrap();
        // Dies of underpopulation on the first tick, then stays empty.
        simulation.seed(0, 0).unwrap();
        assert_eq!(simulation.run(100), 2);
        assert_eq!(simulation.generation(), 2);
    }

    #[test]
    fn run_honours_the_limit() {
        let mut simulation = blinker();
        assert_eq!(simulation.run(5), 5);
        assert_eq!(simulation.render(), "   \nXXX\n   \n");
    }

    #[test]
    fn snapshot_is_not_affected_by_later_ticks() {
        let mut simulation = blinker();
        let before = simulation.snapshot();
        simulation.tick();
        assert_eq!(render::render(&before), " X \n X \n X \n");
        assert_eq!(render::render(&simulation.snapshot()), "   \nXXX\n   \n");
    }

    #[test]
    fn seeding_after_a_snapshot_copies_the_grid() {
        let mut simulation = Simulation::new(2, 2).unwrap();
        let before = simulation.snapshot();
        simulation.seed(1, 1).unwrap();
        assert!(before.is_empty());
        assert_eq!(simulation.current_grid().population(), 1);
    }

    #[test]
    fn grid_mut_does_not_disturb_outstanding_snapshots() {
        let mut simulation = blinker();
        let before = simulation.snapshot();
        simulation.grid_mut().set(0, 0, Alive).unwrap();
        assert_eq!(render::render(&before), " X \n X \n X \n");
        assert_eq!(simulation.render(), "XX \n X \n X \n");
    }

    #[test]
    fn oversized_board_is_an_error() {
        assert!(matches!(
            Simulation::new(usize::MAX, 2),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn seeding_off_the_board_fails_and_changes_nothing() {
        let mut simulation = Simulation::new(3, 3).unwrap();
        let err = simulation.seed(3, 0).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                x: 3,
                y: 0,
                width: 3,
                height: 3
            }
        );
        assert!(simulation.current_grid().is_empty());
        assert!(simulation.seed(0, -1).is_err());
    }

    #[test]
    fn seeding_after_a_tick_applies_to_the_new_generation() {
        let mut simulation = blinker();
        simulation.tick();
        simulation.seed(0, 0).unwrap();
        assert_eq!(simulation.render(), "X  \nXXX\n   \n");
    }
}
