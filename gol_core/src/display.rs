//! Contains [`GridSnapshot`].
//! See its documentation for more information.

use std::fmt;

use bitvec::{boxed::BitBox, vec::BitVec};

use super::{cell::CellState, position::GridPosition, size::GridSize};

/// Holds the state of every cell on a grid at a single generation, for the shell to display.
///
/// The cells are stored in row-major order.
/// When displayed, each row of the grid is written on its own line, with the cells separated by a single space:
/// ```text
/// 0 1 0
/// 0 1 0
/// 0 1 0
/// ```
#[derive(Debug, PartialEq, Clone, serde::Serialize)]
pub struct GridSnapshot {
    /// The generation of the grid this snapshot was taken on.
    generation: u64,
    /// The size of the grid.
    size: GridSize,
    /// Whether each cell is alive.
    cells: BitBox,
}

impl GridSnapshot {
    /// Constructs a new [`GridSnapshot`] with the given generation & the given row-major cell data.
    ///
    /// The cell data must contain one entry for each position within the size.
    pub fn new(generation: u64, size: GridSize, cells: impl Into<BitBox>) -> Self {
        let cells = cells.into();
        debug_assert_eq!(cells.len(), size.cell_count());

        Self {
            generation,
            size,
            cells,
        }
    }

    /// Constructs a new [`GridSnapshot`] by reading the state of each position within the given size.
    ///
    /// # Example
    /// ```
    /// # use gol_core::{GridSize, GridSnapshot};
    /// # use std::num::NonZeroUsize;
    /// let size = GridSize::new(NonZeroUsize::new(3).unwrap(), NonZeroUsize::new(2).unwrap());
    /// let snapshot = GridSnapshot::from_fn(0, size, |position| (position.get_x() == 1).into());
    ///
    /// assert_eq!(snapshot.to_string(), "0 1 0\n0 1 0\n");
    /// ```
    pub fn from_fn(
        generation: u64,
        size: GridSize,
        mut state_at: impl FnMut(GridPosition) -> CellState,
    ) -> Self {
        let mut cells = BitVec::with_capacity(size.cell_count());
        for position in size.iterate_over() {
            cells.push(state_at(position).into());
        }

        Self {
            generation,
            size,
            cells: cells.into_boxed_bitslice(),
        }
    }

    /// Gets the generation this snapshot was taken on.
    pub fn get_generation(&self) -> u64 {
        self.generation
    }

    /// Gets the size of the grid this snapshot was taken of.
    pub fn get_size(&self) -> GridSize {
        self.size
    }

    /// Gets the cell at the given position.
    ///
    /// If the given position is outside the bounds of the snapshot then [`CellState::Dead`] will be returned.
    pub fn get_cell(&self, position: impl Into<GridPosition>) -> CellState {
        self.size
            .index_of(position.into())
            .and_then(|index| self.cells.get(index).map(|cell| *cell))
            .unwrap_or_default()
            .into()
    }

    /// The amount of alive cells in this snapshot.
    pub fn alive_count(&self) -> usize {
        self.cells.count_ones()
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.get_width();

        for row in self.cells.chunks(width) {
            for (x, cell) in row.iter().enumerate() {
                if x != 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", CellState::from(*cell))?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod grid_snapshot_tests {
    use std::num::NonZeroUsize;

    use super::*;

    fn generate_snapshot() -> GridSnapshot {
        let size = GridSize::new(NonZeroUsize::new(4).unwrap(), NonZeroUsize::new(3).unwrap());

        GridSnapshot::from_fn(7, size, |position| {
            if (position.get_x() + position.get_y()) % 2 == 0 {
                CellState::Alive
            } else {
                CellState::Dead
            }
        })
    }

    #[test]
    /// Each row is written in increasing x, with rows in increasing y.
    fn display_format() {
        assert_eq!(generate_snapshot().to_string(), "1 0 1 0\n0 1 0 1\n1 0 1 0\n");
    }

    #[test]
    /// Cells are read from the row-major data at the given position.
    fn get_cell() {
        let snapshot = generate_snapshot();

        assert_eq!(snapshot.get_cell((0, 0)), CellState::Alive);
        assert_eq!(snapshot.get_cell((1, 0)), CellState::Dead);
        assert_eq!(snapshot.get_cell((3, 2)), CellState::Dead);
        assert_eq!(snapshot.get_cell((2, 2)), CellState::Alive);
    }

    #[test]
    /// Positions outside the snapshot are dead.
    fn dead_out_of_bounds() {
        let snapshot = generate_snapshot();

        assert_eq!(snapshot.get_cell((4, 0)), CellState::Dead);
        assert_eq!(snapshot.get_cell((0, 3)), CellState::Dead);
    }

    #[test]
    /// Only alive cells are counted.
    fn alive_count() {
        assert_eq!(generate_snapshot().alive_count(), 6);
    }

    #[test]
    /// The snapshot keeps the generation it was taken on.
    fn generation() {
        assert_eq!(generate_snapshot().get_generation(), 7);
    }

    #[test]
    /// The snapshot serialises with its generation & size alongside the cell data.
    fn serialise() {
        let value = serde_json::to_value(generate_snapshot()).expect("Snapshot must serialise");

        assert_eq!(value["generation"], 7);
        assert_eq!(value["size"]["width"], 4);
        assert_eq!(value["size"]["height"], 3);
        assert!(value.get("cells").is_some());
    }
}
