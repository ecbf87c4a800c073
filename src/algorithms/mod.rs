//! The six instrumented sorting strategies and the registry that builds them
//! by name.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use crate::data_types::{AlgorithmDescriptor, AlgorithmId};
use crate::error::Result;
use crate::instrumented::{CancellationToken, InstrumentedArray};

/// A sorting strategy driven through an [`InstrumentedArray`].
pub trait SortAlgorithm<T: Ord + Clone>: Send + Sync {
    fn id(&self) -> AlgorithmId;

    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        self.id().descriptor()
    }

    /// Sorts an array of at least two elements. Must stop at the next loop or
    /// recursion boundary once `cancel` fires, and must mark every position
    /// sorted when it finishes uncancelled.
    fn sort(&self, array: &mut InstrumentedArray<'_, T>, cancel: &CancellationToken);

    /// Entry point used by callers: trivial inputs finish immediately.
    fn run(&self, array: &mut InstrumentedArray<'_, T>, cancel: &CancellationToken) {
        tracing::debug!(algorithm = %self.id(), len = array.len(), "sort started");
        if array.len() <= 1 {
            array.mark_all_sorted();
        } else {
            self.sort(array, cancel);
        }
        tracing::debug!(
            algorithm = %self.id(),
            comparisons = array.comparisons(),
            swaps = array.swaps(),
            cancelled = cancel.is_cancelled(),
            "sort finished"
        );
    }
}

impl AlgorithmId {
    pub fn build<T: Ord + Clone + 'static>(self) -> Box<dyn SortAlgorithm<T>> {
        match self {
            AlgorithmId::BubbleSort => Box::new(BubbleSort),
            AlgorithmId::InsertionSort => Box::new(InsertionSort),
            AlgorithmId::SelectionSort => Box::new(SelectionSort),
            AlgorithmId::MergeSort => Box::new(MergeSort),
            AlgorithmId::QuickSort => Box::new(QuickSort),
            AlgorithmId::HeapSort => Box::new(HeapSort),
        }
    }
}

/// Looks up an algorithm by its canonical name, e.g. `"quick_sort"`.
pub fn algorithm_by_name<T: Ord + Clone + 'static>(name: &str) -> Result<Box<dyn SortAlgorithm<T>>> {
    let id: AlgorithmId = name.parse()?;
    Ok(id.build())
}

pub fn available_algorithms() -> Vec<&'static str> {
    AlgorithmId::ALL.iter().map(|id| id.as_str()).collect()
}

/// Runs `id` to completion over `values` without pacing, returning the sorted
/// values together with the comparison and swap counts.
pub fn sort_with<T, C>(id: AlgorithmId, values: Vec<T>, consumer: &mut C) -> (Vec<T>, u64, u64)
where
    T: Ord + Clone + 'static,
    C: crate::consumer::StepConsumer<T>,
{
    let cancel = CancellationToken::new();
    let mut array = InstrumentedArray::new(values, cancel.clone(), consumer);
    id.build::<T>().run(&mut array, &cancel);
    let (comparisons, swaps) = (array.comparisons(), array.swaps());
    (array.into_values(), comparisons, swaps)
}
