use std::num::NonZeroUsize;

use crate::{GridConfig, GridPosition};

/// The width & height of a bounded grid.
/// Both dimensions are always at least one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, derive_more::Display)]
#[display("{width}x{height}")]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    /// Constructs a new [`GridSize`] with exactly the given dimensions.
    pub fn new(width: NonZeroUsize, height: NonZeroUsize) -> Self {
        Self {
            width: width.get(),
            height: height.get(),
        }
    }

    /// Constructs a new [`GridSize`], replacing any dimension that falls outside the bounds of the config with the
    /// configured default size.
    ///
    /// This never fails.
    ///
    /// # Examples
    /// ```
    /// # use gol_core::{GridConfig, GridSize};
    /// let size = GridSize::clamped(1, 10, &GridConfig::default());
    /// // Notice how the width is replaced by the default size.
    /// assert_eq!(size.get_width(), 5);
    /// assert_eq!(size.get_height(), 10);
    /// ```
    pub fn clamped(width: usize, height: usize, config: &GridConfig) -> Self {
        Self::new(config.valid_size(width), config.valid_size(height))
    }

    /// Gets the amount of cells in the x axis.
    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Gets the amount of cells in the y axis.
    pub fn get_height(&self) -> usize {
        self.height
    }

    /// The total amount of cells within this size.
    ///
    /// Sizes made by [`GridSize::clamped`] never overflow here, as [`GridConfig`] rejects any maximum whose square overflows.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the given position lies within a grid of this size.
    pub fn contains(&self, position: GridPosition) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Gets the index of the position within row-major storage.
    /// [`None`] is returned if the position is out of bounds.
    pub fn index_of(&self, position: GridPosition) -> Option<usize> {
        self.contains(position)
            .then(|| position.y * self.width + position.x)
    }

    /// Returns an iterator over every position within this size as [`GridPosition`]s.
    ///
    /// The positions are given in row-major order; x increases first, then y.
    ///
    /// # Examples
    /// ```rust
    /// # use gol_core::GridSize;
    /// # use std::num::NonZeroUsize;
    /// let size = GridSize::new(NonZeroUsize::new(2).unwrap(), NonZeroUsize::new(2).unwrap());
    /// let mut iterate_over = size.iterate_over();
    ///
    /// // A (usize, usize) can be converted into a GridPosition with .into()
    /// assert_eq!(iterate_over.next().unwrap(), (0, 0).into());
    /// assert_eq!(iterate_over.next().unwrap(), (1, 0).into());
    /// assert_eq!(iterate_over.next().unwrap(), (0, 1).into());
    /// assert_eq!(iterate_over.next().unwrap(), (1, 1).into());
    /// assert!(iterate_over.next().is_none());
    /// ```
    pub fn iterate_over(&self) -> impl Iterator<Item = GridPosition> + use<> {
        let GridSize { width, height } = *self;

        (0..height).flat_map(move |y| (0..width).map(move |x| GridPosition::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: usize, height: usize) -> GridSize {
        GridSize::new(
            NonZeroUsize::new(width).unwrap(),
            NonZeroUsize::new(height).unwrap(),
        )
    }

    #[test]
    /// The iterate over method will increase x then y, matching the index of each position.
    fn iterate_over_matches_index() {
        let size = size(3, 4);

        let positions: Vec<GridPosition> = size.iterate_over().collect();
        assert_eq!(positions.len(), size.cell_count());

        for (index, position) in positions.into_iter().enumerate() {
            assert_eq!(size.index_of(position), Some(index));
        }
    }

    #[test]
    /// Positions on or past the edge of the grid have no index.
    fn out_of_bounds_index() {
        let size = size(3, 4);

        assert_eq!(size.index_of((3, 0).into()), None);
        assert_eq!(size.index_of((0, 4).into()), None);
        assert_eq!(size.index_of((2, 3).into()), Some(11));
    }

    #[test]
    /// Sizes within the configured bounds are kept as-is.
    fn clamped_keeps_valid() {
        let config = GridConfig::default();
        assert_eq!(GridSize::clamped(3, 20, &config), size(3, 20));
    }

    #[test]
    /// Sizes outside the configured bounds are replaced by the default, not the nearest bound.
    fn clamped_replaces_invalid() {
        let config = GridConfig::default();
        assert_eq!(GridSize::clamped(0, 21, &config), size(5, 5));
        assert_eq!(GridSize::clamped(2, 7, &config), size(5, 7));
    }

    #[test]
    /// The largest size any valid config allows still has a countable number of cells.
    fn largest_clamped_size_cell_count() {
        let largest = (1_usize << (usize::BITS / 2)) - 1;
        let config = GridConfig::new(1, 1, largest).expect("Largest maximum must be valid");

        let size = GridSize::clamped(largest, largest, &config);
        assert_eq!(size.cell_count(), largest * largest);
    }

    #[test]
    /// Sizes are displayed as width by height.
    fn display() {
        assert_eq!(size(4, 9).to_string(), "4x9");
    }
}
