//! Conway's Game of Life on a fixed-size bounded grid.
//!
//! Cells beyond the edges do not exist, they are never counted as
//! neighbours and nothing wraps around. [`engine`] holds the pure generation
//! functions, [`Simulation`] adds the generation counter, and [`Controller`]
//! steps a simulation on a timer until stopped.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod simulation;

pub use config::LifeConfig;
pub use controller::Controller;
pub use engine::{empty_grid, load_pattern, random_grid, step, toggle_cell};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use simulation::{Simulation, StepOutcome};
