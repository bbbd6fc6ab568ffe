//! The shared types for simulating Conways game of life on a bounded grid.
//!
//! Simulators implement [`Simulator`] and are built from an [`InitialPattern`]. Requested grid sizes are checked
//! against a [`GridConfig`] & replaced by its default when out of bounds.

mod cell;
pub mod config;
mod display;
pub mod pattern;
mod position;
mod simulator;
mod size;

pub use cell::CellState;
pub use config::GridConfig;
pub use display::GridSnapshot;
pub use pattern::InitialPattern;
pub use position::GridPosition;
pub use simulator::Simulator;
pub use size::GridSize;
