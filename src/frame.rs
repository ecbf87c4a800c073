//! Render-side consumer: turns step events into colored bar frames.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::consumer::StepConsumer;
use crate::data_types::{EventKind, RunOutcome, StepEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarState {
    #[default]
    Default,
    Comparing,
    Swapping,
    Sorted,
    Pivot,
    Current,
}

impl From<EventKind> for BarState {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Compare => BarState::Comparing,
            EventKind::Swap => BarState::Swapping,
            EventKind::MarkSorted => BarState::Sorted,
            EventKind::MarkPivot => BarState::Pivot,
            EventKind::Merge | EventKind::Insert | EventKind::Shift => BarState::Current,
        }
    }
}

/// Values plus one state per bar, ready to paint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarFrame<T> {
    pub values: Vec<T>,
    pub states: Vec<BarState>,
    pub kind: Option<EventKind>,
}

impl<T: Clone> BarFrame<T> {
    /// A plain frame with every bar in the default state.
    pub fn idle(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
            states: vec![BarState::Default; values.len()],
            kind: None,
        }
    }

    /// Highlights the bars named by the event. Indices outside the snapshot
    /// are ignored.
    pub fn from_event(event: &StepEvent<T>) -> Self {
        let mut frame = Self::idle(&event.snapshot);
        let state = BarState::from(event.kind);
        for i in event.clamped_indices() {
            frame.states[i] = state;
        }
        frame.kind = Some(event.kind);
        frame
    }

    pub fn mark_all_sorted(&mut self) {
        self.states.fill(BarState::Sorted);
    }
}

impl<T> BarFrame<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn count(&self, state: BarState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }
}

#[derive(Debug)]
struct Slot<T> {
    frame: Option<BarFrame<T>>,
    fresh: bool,
    published: u64,
    outcome: Option<RunOutcome>,
}

/// Consumer that publishes the latest frame for the presentation thread.
///
/// The worker only writes into the shared slot; the UI side polls it (for
/// instance on each animation tick) with [`FrameSink::take`] or
/// [`FrameSink::latest`].
#[derive(Debug)]
pub struct FrameSink<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for FrameSink<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Default for FrameSink<T> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                frame: None,
                fresh: false,
                published: 0,
                outcome: None,
            })),
        }
    }
}

impl<T: Clone> FrameSink<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending frame, if a new one arrived since the last take.
    pub fn take(&self) -> Option<BarFrame<T>> {
        let mut slot = self.slot.lock();
        if !slot.fresh {
            return None;
        }
        slot.fresh = false;
        slot.frame.clone()
    }

    pub fn latest(&self) -> Option<BarFrame<T>> {
        self.slot.lock().frame.clone()
    }

    /// Number of frames published so far.
    pub fn published(&self) -> u64 {
        self.slot.lock().published
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.slot.lock().outcome.clone()
    }
}

impl<T: Clone> StepConsumer<T> for FrameSink<T> {
    fn on_step(&mut self, event: StepEvent<T>) {
        let frame = BarFrame::from_event(&event);
        let mut slot = self.slot.lock();
        slot.frame = Some(frame);
        slot.fresh = true;
        slot.published += 1;
    }

    fn on_finished(&mut self, outcome: &RunOutcome) {
        let mut slot = self.slot.lock();
        if let (RunOutcome::Completed(_), Some(frame)) = (outcome, slot.frame.as_mut()) {
            frame.mark_all_sorted();
            frame.kind = Some(EventKind::MarkSorted);
            slot.fresh = true;
        }
        slot.outcome = Some(outcome.clone());
        tracing::debug!(published = slot.published, state = ?outcome.state(), "frame sink finished");
    }
}
