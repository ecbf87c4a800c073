//! Lifecycle of a single sort run: start, pause/resume, stop, completion and
//! statistics aggregation.

use parking_lot::Mutex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::algorithms::SortAlgorithm;
use crate::consumer::StepConsumer;
use crate::data_types::{
    AlgorithmId, RunOutcome, RunReport, RunState, RunStatistics, StatisticsSnapshot, StepEvent,
};
use crate::error::{Result, SortError};
use crate::instrumented::{CancellationToken, InstrumentedArray};
use crate::pacing::{AnimationSpeed, Pacing, PacingGate};

type BoxedConsumer<T> = Box<dyn StepConsumer<T> + Send>;

struct WorkerResult<T> {
    algorithm: AlgorithmId,
    array: Vec<T>,
    outcome: RunOutcome,
}

/// Owns one algorithm run at a time.
///
/// The algorithm executes on a dedicated worker thread. Every event passes
/// through the controller first (statistics), then reaches the consumer, then
/// the worker waits at the pacing gate. Pausing closes the gate, so the
/// worker keeps its exact position in the algorithm and continues from there
/// on resume. Stopping cancels the run; a new run always starts from scratch.
pub struct RunController<T = i64> {
    state: Arc<Mutex<RunState>>,
    statistics: Arc<Mutex<RunStatistics>>,
    gate: Arc<PacingGate>,
    cancel: CancellationToken,
    worker: Option<JoinHandle<WorkerResult<T>>>,
    algorithm: Option<AlgorithmId>,
    started_at: chrono::DateTime<chrono::Utc>,
    original: Vec<T>,
    working: Vec<T>,
}

impl<T: Ord + Clone + Send + 'static> RunController<T> {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            state: Arc::new(Mutex::new(RunState::Idle)),
            statistics: Arc::new(Mutex::new(RunStatistics::default())),
            gate: Arc::new(PacingGate::new(pacing)),
            cancel: CancellationToken::new(),
            worker: None,
            algorithm: None,
            started_at: chrono::Utc::now(),
            original: Vec::new(),
            working: Vec::new(),
        }
    }

    pub fn state(&self) -> RunState {
        *self.state.lock()
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.is_running() && self.gate.is_paused()
    }

    pub fn algorithm(&self) -> Option<AlgorithmId> {
        self.algorithm
    }

    /// Running totals; frozen once the run has ended.
    pub fn statistics(&self) -> RunStatistics {
        *self.statistics.lock()
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        self.statistics().snapshot()
    }

    pub fn pacing(&self) -> Pacing {
        self.gate.pacing()
    }

    pub fn set_pacing(&self, pacing: Pacing) {
        self.gate.set_pacing(pacing);
    }

    pub fn set_speed(&self, speed: u8) {
        self.gate.set_pacing(Pacing::Animated(AnimationSpeed::new(speed)));
    }

    /// The array a reset returns to.
    pub fn original(&self) -> &[T] {
        &self.original
    }

    /// Array as of the last finished run, or the original one before that.
    /// While a run is active this does not reflect its progress; use the
    /// event snapshots for that.
    pub fn working(&self) -> &[T] {
        &self.working
    }

    fn expect_state(&self, expected: RunState, action: &'static str) -> Result<()> {
        let actual = self.state();
        if actual != expected {
            warn!(action, ?actual, "rejected run transition");
            return Err(SortError::RunState { action, actual });
        }
        Ok(())
    }

    /// Starts sorting a copy of `array` with the algorithm named `algorithm`.
    ///
    /// Only valid from `Idle`. An unknown name fails before anything changes.
    pub fn start<C>(&mut self, algorithm: &str, array: Vec<T>, consumer: C) -> Result<()>
    where
        C: StepConsumer<T> + Send + 'static,
    {
        self.expect_state(RunState::Idle, "start")?;
        let id: AlgorithmId = algorithm.parse()?;
        let sorter = id.build::<T>();

        self.cancel = CancellationToken::new();
        self.gate.resume();
        self.algorithm = Some(id);
        self.started_at = chrono::Utc::now();
        self.original = array.clone();
        self.working = array.clone();
        *self.statistics.lock() = RunStatistics::new(array.len());
        *self.state.lock() = RunState::Running;

        let worker = Worker {
            sorter,
            consumer: Box::new(consumer),
            state: self.state.clone(),
            statistics: self.statistics.clone(),
            gate: self.gate.clone(),
            cancel: self.cancel.clone(),
        };

        let spawned = std::thread::Builder::new()
            .name(format!("sort-{id}"))
            .spawn(move || worker.run(array));

        match spawned {
            Ok(handle) => {
                info!(algorithm = %id, len = self.original.len(), "run started");
                self.worker = Some(handle);
                Ok(())
            }
            Err(err) => {
                *self.state.lock() = RunState::Idle;
                Err(SortError::Fault(format!("failed to spawn sort worker: {err}")))
            }
        }
    }

    /// Holds the worker at its next pacing point.
    pub fn pause(&self) -> Result<()> {
        self.expect_state(RunState::Running, "pause")?;
        self.gate.pause();
        debug!("run paused");
        Ok(())
    }

    pub fn resume(&self) -> Result<()> {
        self.expect_state(RunState::Running, "resume")?;
        self.gate.resume();
        debug!("run resumed");
        Ok(())
    }

    pub fn toggle_pause(&self) -> Result<()> {
        if self.gate.is_paused() {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Asks the worker to stop at its next primitive call without waiting.
    pub fn request_stop(&self) -> Result<()> {
        self.expect_state(RunState::Running, "stop")?;
        self.cancel.cancel();
        self.gate.interrupt();
        debug!("stop requested");
        Ok(())
    }

    /// Cancels the run and waits for the worker to wind down.
    pub fn stop(&mut self) -> Result<RunReport<T>> {
        self.request_stop()?;
        self.wait()
    }

    /// Blocks until the current run has ended and returns its report.
    pub fn wait(&mut self) -> Result<RunReport<T>> {
        let Some(handle) = self.worker.take() else {
            let actual = self.state();
            return Err(SortError::RunState {
                action: "wait",
                actual,
            });
        };

        let result = handle
            .join()
            .map_err(|payload| SortError::Fault(panic_message(payload.as_ref())))?;

        let algorithm = result.algorithm;
        info!(
            algorithm = %algorithm,
            state = ?result.outcome.state(),
            comparisons = result.outcome.statistics().comparisons,
            swaps = result.outcome.statistics().swaps,
            "run finished"
        );

        self.working = result.array.clone();
        Ok(RunReport {
            algorithm,
            state: result.outcome.state(),
            statistics: result.outcome.statistics().snapshot(),
            array: result.array,
            error: result.outcome.error_message().map(str::to_string),
            started_at: self.started_at,
        })
    }

    /// Back to `Idle` from any state, stopping an active run first. The
    /// working array returns to the original and the statistics are cleared.
    pub fn reset(&mut self) {
        if let Some(handle) = self.worker.take() {
            self.cancel.cancel();
            self.gate.interrupt();
            if let Err(payload) = handle.join() {
                warn!(message = %panic_message(payload.as_ref()), "sort worker panicked");
            }
        }
        self.gate.resume();
        self.working = self.original.clone();
        *self.statistics.lock() = RunStatistics::new(self.original.len());
        *self.state.lock() = RunState::Idle;
        debug!("controller reset");
    }
}

impl<T> Drop for RunController<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.worker.take() {
            self.cancel.cancel();
            self.gate.interrupt();
            if let Err(payload) = handle.join() {
                warn!(message = %panic_message(payload.as_ref()), "sort worker panicked");
            }
        }
    }
}

struct Worker<T: Ord + Clone> {
    sorter: Box<dyn SortAlgorithm<T>>,
    consumer: BoxedConsumer<T>,
    state: Arc<Mutex<RunState>>,
    statistics: Arc<Mutex<RunStatistics>>,
    gate: Arc<PacingGate>,
    cancel: CancellationToken,
}

impl<T: Ord + Clone + Send + 'static> Worker<T> {
    fn run(mut self, values: Vec<T>) -> WorkerResult<T> {
        let started = Instant::now();
        let mut tap = StatsTap {
            consumer: self.consumer.as_mut(),
            statistics: &self.statistics,
            gate: &self.gate,
            cancel: &self.cancel,
            started,
        };
        let mut array = InstrumentedArray::new(values, self.cancel.clone(), &mut tap);

        let sorter = &self.sorter;
        let cancel = &self.cancel;
        let result = panic::catch_unwind(AssertUnwindSafe(|| sorter.run(&mut array, cancel)));
        let array = array.into_values();

        let outcome = {
            let mut stats = self.statistics.lock();
            stats.elapsed = started.elapsed();
            let frozen = *stats;
            match result {
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    warn!(%message, "sort worker faulted");
                    RunOutcome::Errored {
                        statistics: frozen,
                        message,
                    }
                }
                Ok(()) if self.cancel.is_cancelled() => RunOutcome::Cancelled(frozen),
                Ok(()) => RunOutcome::Completed(frozen),
            }
        };

        // Nothing may reach the consumer after this point.
        self.cancel.cancel();
        let consumer = &mut self.consumer;
        let finished = panic::catch_unwind(AssertUnwindSafe(|| consumer.on_finished(&outcome)));
        let outcome = match finished {
            Ok(()) => outcome,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(%message, "consumer faulted in on_finished");
                RunOutcome::Errored {
                    statistics: *outcome.statistics(),
                    message,
                }
            }
        };
        *self.state.lock() = outcome.state();

        WorkerResult {
            algorithm: self.sorter.id(),
            array,
            outcome,
        }
    }
}

/// Updates the totals, forwards the event, then applies pacing.
struct StatsTap<'a, T> {
    consumer: &'a mut (dyn StepConsumer<T> + Send),
    statistics: &'a Mutex<RunStatistics>,
    gate: &'a PacingGate,
    cancel: &'a CancellationToken,
    started: Instant,
}

impl<T> StepConsumer<T> for StatsTap<'_, T> {
    fn on_step(&mut self, event: StepEvent<T>) {
        if self.cancel.is_cancelled() {
            return;
        }
        {
            let mut stats = self.statistics.lock();
            stats.record(event.kind);
            stats.elapsed = self.started.elapsed();
        }
        self.consumer.on_step(event);
        self.gate.wait(self.cancel);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
