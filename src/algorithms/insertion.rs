use super::SortAlgorithm;
use crate::data_types::AlgorithmId;
use crate::instrumented::{CancellationToken, InstrumentedArray};

/// Grows a sorted prefix by shifting larger elements right of each key.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl<T: Ord + Clone> SortAlgorithm<T> for InsertionSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::InsertionSort
    }

    fn sort(&self, array: &mut InstrumentedArray<'_, T>, cancel: &CancellationToken) {
        let n = array.len();

        for i in 1..n {
            if cancel.is_cancelled() {
                break;
            }

            // The key sits at `hole` and travels left with every shift.
            let mut hole = i;
            while hole > 0 && cancel.is_running() {
                // Stop once a[hole - 1] <= key.
                if !array.compare(hole - 1, hole) {
                    break;
                }
                array.shift(hole - 1, hole);
                hole -= 1;
            }

            array.insert(hole);
            array.mark_sorted(0..=i);
        }
    }
}
