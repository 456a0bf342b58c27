// simulation.rs - Current grid plus generation counter, driven by a caller

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::LifeConfig,
    engine,
    error::{LifeError, Result},
    grid::Grid,
};

/// How many recent generations are remembered for cycle detection.
const HISTORY_LEN: usize = 10;

/// What a single `Simulation::step` produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub generation: u64,
    pub population: usize,
    /// The new grid matches one of the last few generations.
    pub repeated: bool,
}

/// Owns the current grid and the generation counter.
///
/// `clear`, `randomize`, `load_pattern` and `set_grid` reset the counter to 0,
/// `step` adds exactly one and `toggle_cell` leaves it alone.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    alive_probability: f64,
    rng: StdRng,
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulation {
    pub fn new(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            grid: engine::empty_grid(config.rows, config.cols),
            generation: 0,
            alive_probability: config.alive_probability,
            rng,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) -> StepOutcome {
        self.grid = engine::step(&self.grid);
        self.generation += 1;
        let repeated = self.check_for_cycle();
        log::debug!(
            "generation {} population {}",
            self.generation,
            self.grid.population()
        );
        log::trace!("generation {}:\n{}", self.generation, self.grid);
        StepOutcome {
            generation: self.generation,
            population: self.grid.population(),
            repeated,
        }
    }

    pub fn clear(&mut self) {
        let grid = engine::empty_grid(self.grid.rows(), self.grid.cols());
        self.reset(grid);
        log::info!("grid cleared");
    }

    pub fn randomize(&mut self) {
        let grid = engine::random_grid(
            self.grid.rows(),
            self.grid.cols(),
            self.alive_probability,
            &mut self.rng,
        );
        self.reset(grid);
        log::info!("grid randomized, population {}", self.grid.population());
    }

    /// Replaces the grid with the named pattern. Returns `false` when the
    /// name is unknown, in which case the grid is left blank.
    pub fn load_pattern(&mut self, name: &str) -> bool {
        let known = crate::patterns::find(name).is_some();
        if known {
            log::info!("loading pattern {name}");
        } else {
            log::warn!("unknown pattern {name:?}, starting from a blank grid");
        }
        let grid = engine::load_pattern(name, self.grid.rows(), self.grid.cols());
        self.reset(grid);
        known
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid = engine::toggle_cell(&self.grid, row, col)?;
        Ok(())
    }

    /// Installs a caller-built grid, which must keep the current dimensions.
    pub fn set_grid(&mut self, grid: Grid) -> Result<()> {
        if (grid.rows(), grid.cols()) != (self.grid.rows(), self.grid.cols()) {
            return Err(LifeError::DimensionMismatch {
                expected_rows: self.grid.rows(),
                expected_cols: self.grid.cols(),
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        self.reset(grid);
        Ok(())
    }

    fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
        self.remember(self.hash_grid());
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let seen = self.grid_history[..self.history_count.min(HISTORY_LEN)].contains(&current_hash);
        self.remember(current_hash);
        seen
    }

    fn remember(&mut self, hash: u64) {
        self.grid_history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
    }
}
