//! The instrumented array every algorithm drives, and the cancellation token
//! threaded through each run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::consumer::StepConsumer;
use crate::data_types::{EventKind, StepEvent};

/// Shared flag checked cooperatively at every loop and recursion boundary.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        !self.is_cancelled()
    }
}

/// Working copy of the array plus the counters and event forwarding.
///
/// All mutations and all emitted events go through the methods below; once
/// the token is cancelled every one of them becomes a silent no-op.
pub struct InstrumentedArray<'a, T> {
    values: Vec<T>,
    cancel: CancellationToken,
    consumer: &'a mut dyn StepConsumer<T>,
    comparisons: u64,
    swaps: u64,
}

impl<'a, T: Ord + Clone> InstrumentedArray<'a, T> {
    pub fn new(
        values: Vec<T>,
        cancel: CancellationToken,
        consumer: &'a mut dyn StepConsumer<T>,
    ) -> Self {
        Self {
            values,
            cancel,
            consumer,
            comparisons: 0,
            swaps: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.cancel.is_running()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn get(&self, index: usize) -> &T {
        &self.values[index]
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    fn emit(&mut self, kind: EventKind, indices: Vec<usize>) {
        let event = StepEvent::new(kind, indices, self.values.clone());
        self.consumer.on_step(event);
    }

    /// Returns true iff `a[i] > a[j]`. False once cancelled.
    pub fn compare(&mut self, i: usize, j: usize) -> bool {
        if !self.is_running() {
            return false;
        }
        self.comparisons += 1;
        self.emit(EventKind::Compare, vec![i, j]);
        self.values[i] > self.values[j]
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        if !self.is_running() || i == j {
            return;
        }
        self.swaps += 1;
        self.values.swap(i, j);
        self.emit(EventKind::Swap, vec![i, j]);
    }

    /// Moves `a[from]` one slot over into `to`; the element being inserted
    /// travels the other way so the array stays a permutation.
    pub fn shift(&mut self, from: usize, to: usize) {
        if !self.is_running() || from == to {
            return;
        }
        self.values.swap(from, to);
        self.emit(EventKind::Shift, vec![from, to]);
    }

    pub fn insert(&mut self, index: usize) {
        if !self.is_running() {
            return;
        }
        self.emit(EventKind::Insert, vec![index]);
    }

    /// Brings `a[from]` to `index` for a merge, parking the value it
    /// displaces at `from`. Reported as Merge `[index]`, never counted.
    pub fn place(&mut self, index: usize, from: usize) {
        if !self.is_running() {
            return;
        }
        self.values.swap(index, from);
        self.emit(EventKind::Merge, vec![index]);
    }

    pub fn mark_sorted<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        if !self.is_running() {
            return;
        }
        let indices: Vec<usize> = indices.into_iter().collect();
        if indices.is_empty() {
            return;
        }
        self.emit(EventKind::MarkSorted, indices);
    }

    pub fn mark_all_sorted(&mut self) {
        let len = self.len();
        self.mark_sorted(0..len);
    }

    pub fn mark_pivot(&mut self, index: usize) {
        if !self.is_running() {
            return;
        }
        self.emit(EventKind::MarkPivot, vec![index]);
    }
}
