use super::SortAlgorithm;
use crate::data_types::AlgorithmId;
use crate::instrumented::{CancellationToken, InstrumentedArray};

/// One scan for the minimum and at most one swap per position.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl<T: Ord + Clone> SortAlgorithm<T> for SelectionSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::SelectionSort
    }

    fn sort(&self, array: &mut InstrumentedArray<'_, T>, cancel: &CancellationToken) {
        let n = array.len();

        for i in 0..n {
            if cancel.is_cancelled() {
                break;
            }

            let mut min_idx = i;
            for j in i + 1..n {
                if cancel.is_cancelled() {
                    break;
                }
                // Strictly greater only: the leftmost minimum wins ties.
                if array.compare(min_idx, j) {
                    min_idx = j;
                }
            }

            if min_idx != i {
                array.swap(i, min_idx);
            }
            array.mark_sorted([i]);
        }
    }
}
