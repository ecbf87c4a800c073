//! The single coupling point between algorithms and whatever renders or
//! measures their progress.

use crate::data_types::{EventKind, RunOutcome, StepEvent};

/// Receives step events in the exact order an algorithm produces them.
///
/// Calls happen synchronously on the thread running the algorithm. A consumer
/// that feeds a UI must hand the data over to the presentation thread instead
/// of touching widgets from here.
pub trait StepConsumer<T> {
    fn on_step(&mut self, event: StepEvent<T>);

    /// Called once when the run reaches a terminal state.
    fn on_finished(&mut self, _outcome: &RunOutcome) {}
}

impl<T, F> StepConsumer<T> for F
where
    F: FnMut(StepEvent<T>),
{
    fn on_step(&mut self, event: StepEvent<T>) {
        self(event)
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullConsumer;

impl<T> StepConsumer<T> for NullConsumer {
    fn on_step(&mut self, _event: StepEvent<T>) {}
}

/// Keeps the full event trace and the terminal outcome.
#[derive(Clone, Debug)]
pub struct EventRecorder<T> {
    events: Vec<StepEvent<T>>,
    outcome: Option<RunOutcome>,
}

impl<T> Default for EventRecorder<T> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            outcome: None,
        }
    }
}

impl<T> EventRecorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[StepEvent<T>] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.iter().map(|e| e.kind).collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &StepEvent<T>> + '_ {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }
}

impl<T> StepConsumer<T> for EventRecorder<T> {
    fn on_step(&mut self, event: StepEvent<T>) {
        self.events.push(event);
    }

    fn on_finished(&mut self, outcome: &RunOutcome) {
        self.outcome = Some(outcome.clone());
    }
}
