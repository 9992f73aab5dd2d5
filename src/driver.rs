use crate::{utils::Pacer, Config, Grid, GridEngine, PopulationStats};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    thread::JoinHandle,
    time::Duration,
};
use tracing::info;

/// Length and pace of one run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSettings {
    pub generations: u64,
    pub delay: Duration,
    /// Keep a snapshot of the field after every generation.
    pub record_frames: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RunSettings {
    fn from(config: &Config) -> Self {
        Self {
            generations: config.generations,
            delay: config.delay(),
            record_frames: config.record_frames,
        }
    }
}

/// Outcome of a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Generations computed by this run.
    pub steps: u64,
    /// The run flag was cleared before all generations were computed.
    pub stopped_early: bool,
    /// Statistics of the populations recorded by this run only; earlier
    /// runs are part of the engine history but not of these.
    pub stats: Option<PopulationStats>,
    /// Field after each generation of this run, empty unless
    /// [`RunSettings::record_frames`] was set.
    pub frames: Vec<Grid>,
}

/// A spawned run with a flag of its own.
struct Run {
    running: Arc<AtomicBool>,
    handle: JoinHandle<RunSummary>,
}

/// Steps a shared engine on a background thread.
///
/// Every access to the engine, from the run thread or from the caller,
/// goes through one mutex, so a toggle never lands in the middle of a step.
/// Stopping is cooperative: the flag is polled between generations.
/// Each run owns its flag, so a stopped run can never be revived by the
/// next `start`.
pub struct Driver {
    engine: Arc<Mutex<GridEngine>>,
    settings: RunSettings,
    current: Option<Run>,
    // stopped runs that may still be sleeping out their last delay
    retired: Vec<JoinHandle<RunSummary>>,
}

impl Driver {
    pub fn new(engine: GridEngine, settings: RunSettings) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            settings,
            current: None,
            retired: vec![],
        }
    }

    fn lock(engine: &Mutex<GridEngine>) -> MutexGuard<'_, GridEngine> {
        // a panic inside a step cannot leave the engine half-written
        engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_engine<R>(&self, f: impl FnOnce(&GridEngine) -> R) -> R {
        f(&Self::lock(&self.engine))
    }

    pub fn with_engine_mut<R>(&self, f: impl FnOnce(&mut GridEngine) -> R) -> R {
        f(&mut Self::lock(&self.engine))
    }

    pub fn settings(&self) -> RunSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: RunSettings) {
        self.settings = settings;
    }

    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|run| run.running.load(Ordering::Acquire))
    }

    /// A run was started and its summary has not been collected yet.
    pub fn run_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Starts a run; returns `false` if one is already in flight.
    ///
    /// Never waits for a stopped run: it is retired and finishes on its own
    /// without computing another generation.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        if let Some(run) = self.current.take() {
            self.retired.push(run.handle);
        }
        self.retired.retain(|handle| !handle.is_finished());

        let engine = Arc::clone(&self.engine);
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let settings = self.settings;
        info!(
            generations = settings.generations,
            delay_ms = settings.delay.as_millis() as u64,
            record_frames = settings.record_frames,
            "run started"
        );
        let handle = std::thread::spawn(move || Self::run(&engine, &flag, settings));
        self.current = Some(Run { running, handle });
        true
    }

    fn run(engine: &Mutex<GridEngine>, running: &AtomicBool, settings: RunSettings) -> RunSummary {
        let mut pacer = Pacer::new(settings.delay);
        let mut frames = vec![];
        let mut steps = 0;
        while steps < settings.generations && running.load(Ordering::Acquire) {
            {
                let mut engine = Self::lock(engine);
                let (grid, _) = engine.step();
                if settings.record_frames {
                    frames.push(grid.clone());
                }
            }
            steps += 1;
            pacer.wait();
        }
        let stopped_early = steps < settings.generations;
        running.store(false, Ordering::Release);

        let stats = {
            let engine = Self::lock(engine);
            let history = engine.history();
            // a reset during the run may have dropped some of its entries
            let own = history.len().min(steps as usize);
            PopulationStats::from_history(&history[history.len() - own..])
        };
        info!(steps, stopped_early, rate = pacer.rate(), "run finished");
        RunSummary {
            steps,
            stopped_early,
            stats,
            frames,
        }
    }

    /// Asks the current run to finish after the generation in progress.
    pub fn stop(&self) {
        if let Some(run) = &self.current {
            if run.running.swap(false, Ordering::AcqRel) {
                info!("run stop requested");
            }
        }
    }

    /// Waits for the last run and returns its summary.
    pub fn join(&mut self) -> Option<RunSummary> {
        self.current
            .take()
            .and_then(|run| run.handle.join().ok())
    }

    /// Waits for the runs that were stopped and replaced by a newer one.
    pub fn join_retired(&mut self) -> Vec<RunSummary> {
        self.retired
            .drain(..)
            .filter_map(|handle| handle.join().ok())
            .collect()
    }

    /// Returns the summary of the last run once it has finished.
    pub fn poll_finished(&mut self) -> Option<RunSummary> {
        if self
            .current
            .as_ref()
            .is_some_and(|run| run.handle.is_finished())
        {
            self.join()
        } else {
            None
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.stop();
        self.join();
        self.join_retired();
    }
}
