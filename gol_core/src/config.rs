//! Contains [`GridConfig`], the bounds that requested grid sizes are checked against.

use std::num::NonZeroUsize;

/// The smallest grid dimension accepted by the default config.
pub const MINIMUM_GRID_SIZE: usize = 3;
/// The dimension substituted for any invalid requested dimension by the default config.
pub const DEFAULT_GRID_SIZE: usize = 5;
/// The largest grid dimension accepted by the default config.
pub const MAXIMUM_GRID_SIZE: usize = 20;

/// The possible errors when creating a [`GridConfig`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(kinded::Kinded))]
pub enum ConfigError {
    /// The sizes are not ordered, or the minimum is zero.
    #[error(
        "Grid sizes must satisfy 1 <= minimum <= default <= maximum. 'minimum: {minimum}' : 'default: {default}' : 'maximum: {maximum}'"
    )]
    InvalidBounds {
        minimum: usize,
        default: usize,
        maximum: usize,
    },

    /// A grid at the maximum size would have more cells than can be indexed.
    #[error("A {maximum}x{maximum} grid has too many cells to be indexed.")]
    TooLarge { maximum: usize },
}

/// The range of grid dimensions that are accepted, along with the dimension used in place of any that are not.
///
/// A config is validated when created or deserialised, so `1 <= minimum <= default <= maximum` always holds,
/// and a grid at the maximum size always has an indexable number of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "UncheckedGridConfig")]
pub struct GridConfig {
    minimum_size: usize,
    default_size: usize,
    maximum_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            minimum_size: MINIMUM_GRID_SIZE,
            default_size: DEFAULT_GRID_SIZE,
            maximum_size: MAXIMUM_GRID_SIZE,
        }
    }
}

impl GridConfig {
    /// Creates a new [`GridConfig`] with the given bounds.
    ///
    /// # Examples
    /// ```
    /// # use gol_core::GridConfig;
    /// assert!(GridConfig::new(3, 5, 20).is_ok());
    /// // The default must lie within the bounds.
    /// assert!(GridConfig::new(3, 30, 20).is_err());
    /// ```
    pub fn new(
        minimum_size: usize,
        default_size: usize,
        maximum_size: usize,
    ) -> Result<Self, ConfigError> {
        if minimum_size == 0 || minimum_size > default_size || default_size > maximum_size {
            return Err(ConfigError::InvalidBounds {
                minimum: minimum_size,
                default: default_size,
                maximum: maximum_size,
            });
        }

        if maximum_size.checked_mul(maximum_size).is_none() {
            return Err(ConfigError::TooLarge {
                maximum: maximum_size,
            });
        }

        Ok(Self {
            minimum_size,
            default_size,
            maximum_size,
        })
    }

    /// Returns the requested dimension if it lies within the bounds, otherwise the default dimension.
    pub fn valid_size(&self, requested: usize) -> NonZeroUsize {
        let size = if (self.minimum_size..=self.maximum_size).contains(&requested) {
            requested
        } else {
            log::debug!(
                "Grid dimension {requested} is outside {}..={}, using {} instead",
                self.minimum_size,
                self.maximum_size,
                self.default_size
            );
            self.default_size
        };

        // The minimum is at least one, so both branches are non-zero.
        NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN)
    }
}

/// The on-disk form of a [`GridConfig`] before it has been validated.
#[derive(serde::Deserialize)]
struct UncheckedGridConfig {
    minimum_size: usize,
    default_size: usize,
    maximum_size: usize,
}

impl TryFrom<UncheckedGridConfig> for GridConfig {
    type Error = ConfigError;

    fn try_from(value: UncheckedGridConfig) -> Result<Self, Self::Error> {
        GridConfig::new(value.minimum_size, value.default_size, value.maximum_size)
    }
}
