//! A bounded implementation of [`Simulator`].
//!
//! Each cell stores the indices of its neighbours, which are worked out once when the grid is built.
//! Advancing a generation is two passes over every cell, so each generation is linear in the amount of cells.

use bitvec::vec::BitVec;

use gol_core::{
    CellState, GridConfig, GridPosition, GridSize, GridSnapshot, InitialPattern, Simulator,
};

/// A single position on the grid along with the automaton state held there.
#[derive(Debug)]
struct Cell {
    /// The state after the most recent generation.
    state: CellState,
    /// The state at the start of the most recent generation.
    /// This is what neighbouring cells read, so no cell sees another's update within the same generation.
    previous_state: CellState,
    position: GridPosition,
    /// Indices into the grid's cells. Never contains the cell itself.
    neighbours: Box<[usize]>,
}

impl Cell {
    fn new(position: GridPosition, state: CellState) -> Self {
        Self {
            state,
            previous_state: state,
            position,
            neighbours: Box::default(),
        }
    }

    /// Records the current state as the state the next rule application reads from.
    fn advance_snapshot(&mut self) {
        self.previous_state = self.state;
    }
}

/// Represents a bounded grid that the cells inhabit.
///
/// # Examples
/// ```
/// # use gol_core::{InitialPattern, GridSize, Simulator};
/// # use gol_grid::Grid;
/// # use std::num::NonZeroUsize;
/// let size = GridSize::new(NonZeroUsize::new(5).unwrap(), NonZeroUsize::new(5).unwrap());
/// let blinker = InitialPattern::with_alive(size, [(1, 2), (2, 2), (3, 2)]);
///
/// let mut grid = Grid::from_pattern(&blinker);
/// grid.advance();
///
/// assert_eq!(
///     grid.render(),
///     "0 0 0 0 0\n0 0 1 0 0\n0 0 1 0 0\n0 0 1 0 0\n0 0 0 0 0\n"
/// );
/// ```
#[derive(Debug)]
pub struct Grid {
    size: GridSize,
    /// The generation that this simulation is on.
    generation: u64,
    /// Every cell on the grid in row-major order.
    cells: Box<[Cell]>,
}

impl Grid {
    /// Creates a grid with the given dimensions, checked against the default [`GridConfig`].
    ///
    /// See [`Grid::with_config`] for more information.
    pub fn new(width: usize, height: usize, pattern: &InitialPattern) -> Self {
        Self::with_config(&GridConfig::default(), width, height, pattern)
    }

    /// Creates a grid the same size as the pattern, checked against the default [`GridConfig`].
    pub fn from_pattern(pattern: &InitialPattern) -> Self {
        let size = pattern.get_size();
        Self::new(size.get_width(), size.get_height(), pattern)
    }

    /// Creates a grid with the given dimensions, populated from the pattern.
    ///
    /// Any dimension outside the bounds of the config is replaced with the configured default size.
    /// Any position on the grid that the pattern does not cover starts dead.
    pub fn with_config(
        config: &GridConfig,
        width: usize,
        height: usize,
        pattern: &InitialPattern,
    ) -> Self {
        let size = GridSize::clamped(width, height, config);

        let mut cells: Box<[Cell]> = size
            .iterate_over()
            .map(|position| Cell::new(position, pattern.get(position)))
            .collect();

        // Adjacency never changes after this point.
        for cell in cells.iter_mut() {
            cell.neighbours = cell
                .position
                .valid_neighbours(size)
                .filter_map(|neighbour| size.index_of(neighbour))
                .collect();
        }

        log::debug!("Built {size} grid from a {} pattern", pattern.get_size());

        Self {
            size,
            generation: 0,
            cells,
        }
    }

    /// Gets the state the cell at the given position had at the start of the most recent generation.
    ///
    /// If the position is outside the grid then [`CellState::Dead`] will be returned.
    pub fn get_previous(&self, position: GridPosition) -> CellState {
        self.size
            .index_of(position)
            .map(|index| self.cells[index].previous_state)
            .unwrap_or_default()
    }

    /// Returns an iterator over the neighbours of the given position.
    ///
    /// If the position is outside the grid then the iterator will be empty.
    pub fn neighbours(&self, position: GridPosition) -> impl Iterator<Item = GridPosition> + '_ {
        self.size
            .index_of(position)
            .into_iter()
            .flat_map(move |index| self.cells[index].neighbours.iter())
            .map(move |&neighbour| self.cells[neighbour].position)
    }

    /// The amount of alive cells on the grid.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.state.is_alive()).count()
    }

    /// Applies the game of life rule to every cell, reading only the state of neighbours from the start of the
    /// generation.
    fn apply_rule(&mut self) {
        for index in 0..self.cells.len() {
            let live_neighbours = self.cells[index]
                .neighbours
                .iter()
                .filter(|&&neighbour| self.cells[neighbour].previous_state.is_alive())
                .count();

            let cell = &mut self.cells[index];
            cell.state = cell.state.next_state(live_neighbours);
        }
    }
}

impl Simulator for Grid {
    fn advance(&mut self) {
        self.generation += 1;

        // Every cell must be snapshotted before any rule is applied.
        for cell in self.cells.iter_mut() {
            cell.advance_snapshot();
        }
        self.apply_rule();

        log::trace!(
            "Advanced to generation {} with {} alive cells",
            self.generation,
            self.alive_count()
        );
    }

    fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|cell| cell.state.is_alive())
    }

    fn get(&self, position: GridPosition) -> CellState {
        self.size
            .index_of(position)
            .map(|index| self.cells[index].state)
            .unwrap_or_default()
    }

    fn get_generation(&self) -> u64 {
        self.generation
    }

    fn get_size(&self) -> GridSize {
        self.size
    }

    fn snapshot(&self) -> GridSnapshot {
        let cells: BitVec = self.cells.iter().map(|cell| cell.state.is_alive()).collect();
        GridSnapshot::new(self.generation, self.size, cells)
    }
}
