use super::SortAlgorithm;
use crate::data_types::AlgorithmId;
use crate::instrumented::{CancellationToken, InstrumentedArray};

/// Top-down merge sort over inclusive bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl<T: Ord + Clone> SortAlgorithm<T> for MergeSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::MergeSort
    }

    fn sort(&self, array: &mut InstrumentedArray<'_, T>, cancel: &CancellationToken) {
        let last = array.len() - 1;
        sort_range(array, 0, last, cancel);
        array.mark_all_sorted();
    }
}

fn sort_range<T: Ord + Clone>(
    array: &mut InstrumentedArray<'_, T>,
    left: usize,
    right: usize,
    cancel: &CancellationToken,
) {
    if cancel.is_cancelled() || left >= right {
        return;
    }

    let mid = (left + right) / 2;
    sort_range(array, left, mid, cancel);
    sort_range(array, mid + 1, right, cancel);

    if cancel.is_running() {
        merge(array, left, mid, right, cancel);
    }
}

/// Merges `left..=mid` with `mid + 1..=right`.
///
/// Values move only through `place`, so the array stays a permutation at
/// every emitted event. `position[id]` is where element `id` of the range
/// currently sits and `occupant` is its inverse; ids `0..left_len` are the
/// left run in order, the rest the right run.
fn merge<T: Ord + Clone>(
    array: &mut InstrumentedArray<'_, T>,
    left: usize,
    mid: usize,
    right: usize,
    cancel: &CancellationToken,
) {
    let len = right - left + 1;
    let left_len = mid - left + 1;
    let mut position: Vec<usize> = (left..=right).collect();
    let mut occupant: Vec<usize> = (0..len).collect();
    let (mut i, mut j) = (0, left_len);

    for k in left..=right {
        if cancel.is_cancelled() {
            return;
        }
        let take = if i < left_len && j < len {
            // Ties take the left element, which keeps the sort stable.
            if array.compare(position[i], position[j]) {
                j
            } else {
                i
            }
        } else if i < left_len {
            i
        } else {
            j
        };
        if cancel.is_cancelled() {
            return;
        }
        if take == i {
            i += 1;
        } else {
            j += 1;
        }

        let from = position[take];
        let displaced = occupant[k - left];
        array.place(k, from);
        position[displaced] = from;
        occupant[from - left] = displaced;
        position[take] = k;
        occupant[k - left] = take;
    }
}
