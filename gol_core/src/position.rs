use crate::GridSize;

/// The x & y positions of a cell on a bounded game of life grid.
///
/// To move "right" on the grid, the x must be increased.
/// To move "down" on the grid, the y must be increased.
/// The top-left of every grid is `(0, 0)`.
#[derive(
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct GridPosition {
    pub(crate) x: usize,
    pub(crate) y: usize,
}

impl GridPosition {
    /// Creates a new [`GridPosition`] at the given x & y coordinates.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Gets the represented x position.
    pub fn get_x(&self) -> usize {
        self.x
    }

    /// Gets the represented y position.
    pub fn get_y(&self) -> usize {
        self.y
    }

    /// Returns an iterator over every position that touches this one (including diagonally) and lies within a grid of
    /// the given size.
    ///
    /// The position itself is never included and there is no wrapping at the edges of the grid.
    /// A corner yields three positions, an edge five & an interior position eight.
    ///
    /// # Examples
    /// ```
    /// # use gol_core::{GridPosition, GridSize};
    /// # use std::num::NonZeroUsize;
    /// let size = GridSize::new(NonZeroUsize::new(3).unwrap(), NonZeroUsize::new(3).unwrap());
    ///
    /// assert_eq!(GridPosition::new(0, 0).valid_neighbours(size).count(), 3);
    /// assert_eq!(GridPosition::new(1, 0).valid_neighbours(size).count(), 5);
    /// assert_eq!(GridPosition::new(1, 1).valid_neighbours(size).count(), 8);
    /// ```
    pub fn valid_neighbours(&self, size: GridSize) -> impl Iterator<Item = GridPosition> + use<> {
        let origin = *self;

        // Sizes are never zero, so the subtraction cannot underflow.
        let x_range = origin.x.saturating_sub(1)..=origin.x.saturating_add(1).min(size.get_width() - 1);
        let y_range = origin.y.saturating_sub(1)..=origin.y.saturating_add(1).min(size.get_height() - 1);

        y_range
            .flat_map(move |y| {
                x_range
                    .clone()
                    .map(move |x| GridPosition::new(x, y))
            })
            .filter(move |neighbour| *neighbour != origin)
    }
}

impl From<(usize, usize)> for GridPosition {
    fn from(value: (usize, usize)) -> Self {
        GridPosition {
            x: value.0,
            y: value.1,
        }
    }
}
