/// Represents the state of a cell within the Conways game of life simulation.
///
/// An alive cell is represented as `true`.
/// A dead cell is represented as `false`.
///
/// When displayed, an alive cell is written as `1` & a dead cell as `0`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash, derive_more::Display)]
pub enum CellState {
    #[default]
    #[display("0")]
    Dead,
    #[display("1")]
    Alive,
}

impl From<CellState> for bool {
    fn from(value: CellState) -> Self {
        match value {
            CellState::Alive => true,
            CellState::Dead => false,
        }
    }
}

impl From<bool> for CellState {
    fn from(value: bool) -> Self {
        match value {
            true => CellState::Alive,
            false => CellState::Dead,
        }
    }
}

impl CellState {
    /// Returns true if the cell is alive.
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Applies the game of life rule to this cell, given how many of its neighbours were alive at the start of the
    /// generation.
    ///
    /// The death checks are made before the birth check, so an alive cell with three neighbours survives rather than
    /// being "born" again.
    ///
    /// # Examples
    /// ```
    /// # use gol_core::CellState;
    /// assert_eq!(CellState::Dead.next_state(3), CellState::Alive);
    /// assert_eq!(CellState::Alive.next_state(2), CellState::Alive);
    /// assert_eq!(CellState::Alive.next_state(4), CellState::Dead);
    /// ```
    pub fn next_state(self, live_neighbours: usize) -> CellState {
        match live_neighbours {
            // Under population
            0 | 1 => CellState::Dead,
            // Over population
            4.. => CellState::Dead,
            // Cell is created if non-existing
            3 if self == CellState::Dead => CellState::Alive,
            // Nothing happens
            _ => self,
        }
    }
}
