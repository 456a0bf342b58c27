// error.rs - Error type shared by the grid, engine and configuration

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A cell coordinate outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    InvalidIndex {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("step interval must be greater than zero")]
    InvalidInterval,

    /// A replacement grid whose shape differs from the simulation's.
    #[error("expected a {expected_rows}x{expected_cols} grid, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cannot parse grid: {0}")]
    ParseGrid(String),

    /// An environment override that could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;
