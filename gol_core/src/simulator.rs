use crate::{CellState, GridPosition, GridSize, GridSnapshot};

/// An implementation of [`Simulator`] can simulate Conways game of life on a bounded grid.
///
/// Each implementation is guaranteed to correctly simulate Conways game of life, updating every cell simultaneously
/// each generation.
pub trait Simulator: Send {
    /// Advances the simulation by one generation.
    fn advance(&mut self);

    /// Returns true if no cell on the grid is alive.
    fn is_extinct(&self) -> bool;

    /// Gets the cell at the given position on the grid.
    ///
    /// If the position is outside the grid then [`CellState::Dead`] will be returned.
    fn get(&self, position: GridPosition) -> CellState;

    /// Gets the current generation of the simulation.
    fn get_generation(&self) -> u64;

    /// Gets the size of the grid being simulated.
    fn get_size(&self) -> GridSize;

    /// Creates a snapshot of the grid in its current state.
    fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_fn(self.get_generation(), self.get_size(), |position| {
            self.get(position)
        })
    }

    /// Renders the current state of the grid as text.
    /// See [`GridSnapshot`] for the format.
    fn render(&self) -> String {
        self.snapshot().to_string()
    }
}
