// config.rs - Grid size, timing and seeding parameters

use std::{env, str::FromStr, time::Duration};

use crate::error::{LifeError, Result};

pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 40;
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(200);
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between two generations while the controller is running.
    pub step_interval: Duration,
    /// Chance of each cell being alive after a randomize.
    pub alive_probability: f64,
    /// Fixed seed for randomize; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Stop the controller once a generation repeats one of the last few.
    pub stop_on_cycle: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            step_interval: DEFAULT_STEP_INTERVAL,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            seed: None,
            stop_on_cycle: false,
        }
    }
}

impl LifeConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_step_interval(mut self, step_interval: Duration) -> Self {
        self.step_interval = step_interval;
        self
    }

    pub fn with_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stop_on_cycle(mut self, stop_on_cycle: bool) -> Self {
        self.stop_on_cycle = stop_on_cycle;
        self
    }

    /// Defaults overlaid with `LIFE_ROWS`, `LIFE_COLS`, `LIFE_STEP_MS`,
    /// `LIFE_ALIVE_PROBABILITY`, `LIFE_SEED` and `LIFE_STOP_ON_CYCLE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(rows) = parse_var(&lookup, "LIFE_ROWS")? {
            config.rows = rows;
        }
        if let Some(cols) = parse_var(&lookup, "LIFE_COLS")? {
            config.cols = cols;
        }
        if let Some(ms) = parse_var(&lookup, "LIFE_STEP_MS")? {
            config.step_interval = Duration::from_millis(ms);
        }
        if let Some(p) = parse_var(&lookup, "LIFE_ALIVE_PROBABILITY")? {
            config.alive_probability = p;
        }
        if let Some(seed) = parse_var(&lookup, "LIFE_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(stop) = parse_var(&lookup, "LIFE_STOP_ON_CYCLE")? {
            config.stop_on_cycle = stop;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(LifeError::InvalidProbability(self.alive_probability));
        }
        if self.step_interval.is_zero() {
            return Err(LifeError::InvalidInterval);
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| LifeError::Config { key, value }),
    }
}
