use super::SortAlgorithm;
use crate::data_types::AlgorithmId;
use crate::instrumented::{CancellationToken, InstrumentedArray};

/// Bottom-up max-heap construction followed by repeated extract-max.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapSort;

impl<T: Ord + Clone> SortAlgorithm<T> for HeapSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::HeapSort
    }

    fn sort(&self, array: &mut InstrumentedArray<'_, T>, cancel: &CancellationToken) {
        let n = array.len();
        build_max_heap(array, cancel);

        for end in (1..n).rev() {
            if cancel.is_cancelled() {
                break;
            }
            array.swap(0, end);
            array.mark_sorted([end]);
            sift_down(array, end, 0, cancel);
        }

        array.mark_sorted([0]);
    }
}

pub(crate) fn build_max_heap<T: Ord + Clone>(
    array: &mut InstrumentedArray<'_, T>,
    cancel: &CancellationToken,
) {
    let n = array.len();
    for root in (0..n / 2).rev() {
        if cancel.is_cancelled() {
            break;
        }
        sift_down(array, n, root, cancel);
    }
}

/// Restores the heap property for the subtree at `root` within `a[..heap_len]`.
fn sift_down<T: Ord + Clone>(
    array: &mut InstrumentedArray<'_, T>,
    heap_len: usize,
    root: usize,
    cancel: &CancellationToken,
) {
    if cancel.is_cancelled() {
        return;
    }

    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    // A child only takes over when strictly greater.
    if left < heap_len && array.compare(left, largest) {
        largest = left;
    }
    if right < heap_len && array.compare(right, largest) {
        largest = right;
    }

    if largest != root && cancel.is_running() {
        array.swap(root, largest);
        sift_down(array, heap_len, largest, cancel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumer::NullConsumer;

    #[test]
    fn test_build_places_max_at_root() {
        let mut consumer = NullConsumer;
        let cancel = CancellationToken::new();
        let mut array = InstrumentedArray::new(vec![4, 10, 3, 5, 1], cancel.clone(), &mut consumer);
        build_max_heap(&mut array, &cancel);
        assert_eq!(array.values()[0], 10);
        assert_eq!(array.values(), &[10, 5, 3, 4, 1]);
    }

    #[test]
    fn test_equal_children_keep_parent() {
        let mut consumer = NullConsumer;
        let cancel = CancellationToken::new();
        let mut array = InstrumentedArray::new(vec![7, 7, 7], cancel.clone(), &mut consumer);
        build_max_heap(&mut array, &cancel);
        assert_eq!(array.swaps(), 0);
        assert_eq!(array.comparisons(), 2);
    }
}
