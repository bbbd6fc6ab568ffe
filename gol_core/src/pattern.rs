//! Contains [`InitialPattern`], the live/dead assignment that a grid is populated from.

use std::{num::NonZeroUsize, path::Path, str::FromStr};

use bitvec::{boxed::BitBox, vec::BitVec};
use rand::Rng;

use crate::{CellState, GridPosition, GridSize};

/// The possible errors when attempting to parse a pattern.
#[derive(thiserror::Error, Debug)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum PatternParseError {
    /// Unable to read the pattern file.
    #[error("Unable to read pattern file: {0}")]
    FileRead(#[from] std::io::Error),
    /// The pattern does not contain any cells.
    #[error("Pattern does not contain any cells")]
    Empty,
    /// A cell is neither `0` nor `1`.
    #[error("Invalid cell '{token}' at row {row}, column {column}. Cells must be either '0' or '1'")]
    InvalidCell {
        row: usize,
        column: usize,
        token: Box<str>,
    },
    /// A row does not contain the same amount of cells as the first row.
    #[error("Row {row} contains {found} cells, but the first row contains {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// The state of each cell within a rectangle, used to populate a grid when it is created.
///
/// Positions outside the pattern are treated as dead.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialPattern {
    size: GridSize,
    /// Whether each cell is alive, in row-major order.
    cells: BitBox,
}

impl InitialPattern {
    /// Creates a pattern of the given size, with the state of each position given by the function.
    pub fn from_fn(size: GridSize, mut state_at: impl FnMut(GridPosition) -> CellState) -> Self {
        let mut cells = BitVec::with_capacity(size.cell_count());
        for position in size.iterate_over() {
            cells.push(state_at(position).into());
        }

        Self {
            size,
            cells: cells.into_boxed_bitslice(),
        }
    }

    /// Creates a pattern of the given size with every cell dead.
    pub fn dead(size: GridSize) -> Self {
        Self::from_fn(size, |_| CellState::Dead)
    }

    /// Creates a pattern of the given size, where each cell has an even chance to be alive.
    pub fn random(size: GridSize, rng: &mut impl Rng) -> Self {
        Self::from_fn(size, |_| rng.gen_bool(0.5).into())
    }

    /// Creates a pattern from the given positions, which are set alive within a pattern of the given size.
    /// Positions outside the size are ignored.
    pub fn with_alive(size: GridSize, alive: impl IntoIterator<Item = impl Into<GridPosition>>) -> Self {
        let mut pattern = Self::dead(size);
        for position in alive {
            if let Some(index) = size.index_of(position.into()) {
                pattern.cells.set(index, true);
            }
        }
        pattern
    }

    /// Parses a pattern from text.
    ///
    /// Each line is a row of the pattern, with the cells as whitespace separated `0` (dead) or `1` (alive) values.
    /// Blank lines are ignored.
    ///
    /// # Examples
    /// ```
    /// # use gol_core::{CellState, InitialPattern};
    /// let pattern = InitialPattern::parse("0 1 0\n0 1 0\n").unwrap();
    ///
    /// assert_eq!(pattern.get_size().get_width(), 3);
    /// assert_eq!(pattern.get_size().get_height(), 2);
    /// assert_eq!(pattern.get((1, 1).into()), CellState::Alive);
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternParseError> {
        let mut cells = BitVec::new();
        let mut width = None;
        let mut height = 0;

        let rows = text.lines().filter(|line| !line.trim().is_empty());
        for (row, line) in rows.enumerate() {
            let mut found = 0;
            for (column, token) in line.split_whitespace().enumerate() {
                let cell = match token {
                    "0" => false,
                    "1" => true,
                    _ => {
                        return Err(PatternParseError::InvalidCell {
                            row,
                            column,
                            token: token.into(),
                        });
                    }
                };
                cells.push(cell);
                found += 1;
            }

            let expected = *width.get_or_insert(found);
            if expected != found {
                return Err(PatternParseError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        let (Some(width), Some(height)) = (
            width.and_then(NonZeroUsize::new),
            NonZeroUsize::new(height),
        ) else {
            return Err(PatternParseError::Empty);
        };

        Ok(Self {
            size: GridSize::new(width, height),
            cells: cells.into_boxed_bitslice(),
        })
    }

    /// Attempts to parse a pattern from the file at the given path.
    /// See [`InitialPattern::parse`] for the format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PatternParseError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Gets the size of the pattern.
    pub fn get_size(&self) -> GridSize {
        self.size
    }

    /// Gets the state of the cell at the given position.
    ///
    /// If the given position is outside the pattern then [`CellState::Dead`] will be returned.
    pub fn get(&self, position: GridPosition) -> CellState {
        self.size
            .index_of(position)
            .and_then(|index| self.cells.get(index).map(|cell| *cell))
            .unwrap_or_default()
            .into()
    }
}

impl FromStr for InitialPattern {
    type Err = PatternParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rand::{SeedableRng, rngs::StdRng};
    use tempfile::NamedTempFile;

    use super::*;

    fn size(width: usize, height: usize) -> GridSize {
        GridSize::new(
            NonZeroUsize::new(width).unwrap(),
            NonZeroUsize::new(height).unwrap(),
        )
    }

    #[test]
    /// Parsing reads rows in increasing y & cells in increasing x.
    fn parse_layout() {
        let pattern = InitialPattern::parse("1 0 0\n0 0 1\n").expect("Valid pattern");

        assert_eq!(pattern.get_size(), size(3, 2));
        assert_eq!(pattern.get((0, 0).into()), CellState::Alive);
        assert_eq!(pattern.get((2, 1).into()), CellState::Alive);
        assert_eq!(pattern.get((1, 0).into()), CellState::Dead);
        assert_eq!(pattern.get((2, 0).into()), CellState::Dead);
    }

    #[test]
    /// Surrounding whitespace & blank lines do not affect the pattern.
    fn parse_ignores_blank_lines() {
        let pattern = InitialPattern::parse("\n  0 1  \n\n 1   0\n\n").expect("Valid pattern");

        assert_eq!(pattern.get_size(), size(2, 2));
        assert_eq!(pattern.get((1, 0).into()), CellState::Alive);
        assert_eq!(pattern.get((0, 1).into()), CellState::Alive);
    }

    #[test]
    /// Only `0` & `1` are valid cells.
    fn parse_invalid_cell() {
        let error = InitialPattern::parse("0 1\n0 x\n").unwrap_err();

        assert_eq!(error.kind(), PatternParseErrorKind::InvalidCell);
        assert!(matches!(
            error,
            PatternParseError::InvalidCell { row: 1, column: 1, .. }
        ));
    }

    #[test]
    /// Every row must be as long as the first.
    fn parse_ragged_row() {
        let error = InitialPattern::parse("0 1 0\n0 1\n").unwrap_err();

        assert!(matches!(
            error,
            PatternParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    /// A pattern must contain at least one row.
    fn parse_empty() {
        for text in ["", "\n\n", "   \n"] {
            let error = InitialPattern::parse(text).unwrap_err();
            assert_eq!(error.kind(), PatternParseErrorKind::Empty);
        }
    }

    #[test]
    /// Positions outside of the pattern are dead.
    fn dead_out_of_bounds() {
        let pattern = InitialPattern::parse("1 1\n1 1\n").unwrap();

        assert_eq!(pattern.get((2, 0).into()), CellState::Dead);
        assert_eq!(pattern.get((0, 2).into()), CellState::Dead);
    }

    #[test]
    /// Alive positions outside the size are ignored.
    fn with_alive_ignores_out_of_bounds() {
        let pattern = InitialPattern::with_alive(size(2, 2), [(1, 1), (5, 5)]);

        assert_eq!(pattern.get((1, 1).into()), CellState::Alive);
        assert_eq!(pattern.cells.count_ones(), 1);
    }

    #[test]
    /// The same seed produces the same pattern.
    fn random_is_seeded() {
        let first = InitialPattern::random(size(10, 10), &mut StdRng::seed_from_u64(42));
        let second = InitialPattern::random(size(10, 10), &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    /// A pattern file is read the same way as parsed text.
    fn load_from_file() {
        let mut file = NamedTempFile::new().expect("Able to create temp file");
        write!(file, "0 0 0\n1 1 1\n0 0 0\n").expect("Able to write temp file");

        let pattern = InitialPattern::load(file.path()).expect("Valid pattern file");
        assert_eq!(pattern, InitialPattern::with_alive(size(3, 3), [(0, 1), (1, 1), (2, 1)]));
    }

    #[test]
    /// A missing pattern file is a read error.
    fn load_missing_file() {
        let temp_dir = tempfile::tempdir().expect("Able to create temp dir");

        let error = InitialPattern::load(temp_dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(error.kind(), PatternParseErrorKind::FileRead);
    }
}
