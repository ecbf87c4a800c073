use super::SortAlgorithm;
use crate::data_types::AlgorithmId;
use crate::instrumented::{CancellationToken, InstrumentedArray};

/// Adjacent passes with a shrinking boundary and a zero-swap early exit.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl<T: Ord + Clone> SortAlgorithm<T> for BubbleSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BubbleSort
    }

    fn sort(&self, array: &mut InstrumentedArray<'_, T>, cancel: &CancellationToken) {
        let n = array.len();

        for pass in 0..n {
            if cancel.is_cancelled() {
                break;
            }
            let boundary = n - pass - 1;
            let mut swapped = false;

            for j in 0..boundary {
                if cancel.is_cancelled() {
                    break;
                }
                if array.compare(j, j + 1) {
                    array.swap(j, j + 1);
                    swapped = true;
                }
            }

            // Largest remaining element has bubbled up to the boundary.
            array.mark_sorted([boundary]);

            if !swapped {
                for k in 0..boundary {
                    if cancel.is_cancelled() {
                        break;
                    }
                    array.mark_sorted([k]);
                }
                break;
            }
        }
    }
}
