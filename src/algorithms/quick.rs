use super::SortAlgorithm;
use crate::data_types::AlgorithmId;
use crate::instrumented::{CancellationToken, InstrumentedArray};

/// Lomuto partitioning around the rightmost element.
///
/// The pivot choice is fixed so that the same input always yields the same
/// event trace.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl<T: Ord + Clone> SortAlgorithm<T> for QuickSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::QuickSort
    }

    fn sort(&self, array: &mut InstrumentedArray<'_, T>, cancel: &CancellationToken) {
        let high = array.len() - 1;
        sort_range(array, 0, high, cancel);
        array.mark_all_sorted();
    }
}

fn sort_range<T: Ord + Clone>(
    array: &mut InstrumentedArray<'_, T>,
    low: usize,
    high: usize,
    cancel: &CancellationToken,
) {
    if cancel.is_cancelled() || low >= high {
        return;
    }

    let pivot = partition(array, low, high, cancel);
    if pivot > low {
        sort_range(array, low, pivot - 1, cancel);
    }
    sort_range(array, pivot + 1, high, cancel);
}

/// Returns the pivot's final index.
pub(crate) fn partition<T: Ord + Clone>(
    array: &mut InstrumentedArray<'_, T>,
    low: usize,
    high: usize,
    cancel: &CancellationToken,
) -> usize {
    array.mark_pivot(high);

    // Next slot for an element <= pivot.
    let mut store = low;
    for j in low..high {
        if cancel.is_cancelled() {
            return store;
        }
        if !array.compare(j, high) {
            array.swap(store, j);
            store += 1;
        }
    }

    array.swap(store, high);
    array.mark_sorted([store]);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumer::EventRecorder;
    use crate::data_types::EventKind;

    #[test]
    fn test_first_partition_uses_rightmost_pivot() {
        let mut recorder = EventRecorder::new();
        let cancel = CancellationToken::new();
        let mut array =
            InstrumentedArray::new(vec![5, 2, 4, 6, 1, 3], cancel.clone(), &mut recorder);
        let pivot = partition(&mut array, 0, 5, &cancel);

        assert_eq!(pivot, 2);
        assert_eq!(array.values(), &[2, 1, 3, 6, 5, 4]);
        drop(array);

        let first = &recorder.events()[0];
        assert_eq!(first.kind, EventKind::MarkPivot);
        assert_eq!(first.indices, vec![5]);
        assert_eq!(first.snapshot[5], 3);

        let last = recorder.events().last().unwrap();
        assert_eq!(last.kind, EventKind::MarkSorted);
        assert_eq!(last.indices, vec![2]);
    }

    #[test]
    fn test_ties_stay_left_of_pivot() {
        let mut recorder = EventRecorder::new();
        let cancel = CancellationToken::new();
        let mut array = InstrumentedArray::new(vec![2, 3, 2], cancel.clone(), &mut recorder);
        let pivot = partition(&mut array, 0, 2, &cancel);
        assert_eq!(pivot, 1);
        assert_eq!(array.values(), &[2, 2, 3]);
    }
}
