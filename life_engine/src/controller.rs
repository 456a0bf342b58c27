// controller.rs - Start/stop driver that steps a shared simulation on a timer

use std::{
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::{runtime::Handle, task::JoinHandle};

use crate::{config::LifeConfig, error::Result, grid::Grid, simulation::Simulation};

/// Runs a [`Simulation`] on a tokio task, one generation per `step_interval`.
///
/// Each `start` hands the task its own running flag and `stop` clears it.
/// The task checks the flag before every step, so after `stop` it performs
/// no further generations: a task parked in its timer wakes once, sees the
/// cleared flag and exits. A step already executing when `stop` is called
/// still completes.
pub struct Controller {
    simulation: Arc<Mutex<Simulation>>,
    running: Arc<AtomicBool>,
    step_interval: Duration,
    stop_on_cycle: bool,
    task: Option<JoinHandle<()>>,
}

impl Controller {
    pub fn new(simulation: Simulation, step_interval: Duration) -> Self {
        Self {
            simulation: Arc::new(Mutex::new(simulation)),
            running: Arc::new(AtomicBool::new(false)),
            step_interval,
            stop_on_cycle: false,
            task: None,
        }
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        let simulation = Simulation::new(config)?;
        Ok(Self::new(simulation, config.step_interval).with_stop_on_cycle(config.stop_on_cycle))
    }

    /// Stop by itself once a generation repeats a recent one.
    pub fn with_stop_on_cycle(mut self, stop_on_cycle: bool) -> Self {
        self.stop_on_cycle = stop_on_cycle;
        self
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn set_step_interval(&mut self, step_interval: Duration) {
        // Picked up by the next `start`.
        self.step_interval = step_interval;
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Spawns the stepping task on `runtime`. The first generation is
    /// computed right away. Does nothing if already running.
    pub fn start(&mut self, runtime: &Handle) {
        if self.is_running() {
            return;
        }
        self.running = Arc::new(AtomicBool::new(true));
        log::info!("simulation started, interval {:?}", self.step_interval);
        self.task = Some(runtime.spawn(run(
            Arc::clone(&self.simulation),
            Arc::clone(&self.running),
            self.step_interval,
            self.stop_on_cycle,
        )));
    }

    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::AcqRel) {
            log::info!("simulation stopped");
        }
    }

    /// Stops and waits for the stepping task to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                log::warn!("simulation task ended abnormally: {err}");
            }
        }
    }

    /// Copy of the current grid and generation, for display.
    pub fn snapshot(&self) -> (Grid, u64) {
        let simulation = lock(&self.simulation);
        (simulation.grid().clone(), simulation.generation())
    }

    /// Runs `f` with exclusive access to the simulation, e.g. to clear,
    /// randomize, load a pattern, toggle a cell or take a manual step.
    pub fn with_simulation<R>(&self, f: impl FnOnce(&mut Simulation) -> R) -> R {
        f(&mut lock(&self.simulation))
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run(
    simulation: Arc<Mutex<Simulation>>,
    running: Arc<AtomicBool>,
    step_interval: Duration,
    stop_on_cycle: bool,
) {
    while running.load(Ordering::Acquire) {
        let outcome = lock(&simulation).step();
        if stop_on_cycle && outcome.repeated {
            running.store(false, Ordering::Release);
            log::info!("generation {} repeats a recent state, stopping", outcome.generation);
            break;
        }
        tokio::time::sleep(step_interval).await;
    }
}

// A panic while holding the lock cannot leave the simulation half-updated:
// every mutation replaces whole fields.
fn lock(simulation: &Mutex<Simulation>) -> MutexGuard<'_, Simulation> {
    simulation.lock().unwrap_or_else(PoisonError::into_inner)
}
