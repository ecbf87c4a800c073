use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SortError;

/// Identifier of one of the six supported algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmId {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    MergeSort,
    QuickSort,
    HeapSort,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::BubbleSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::HeapSort,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "bubble_sort",
            AlgorithmId::InsertionSort => "insertion_sort",
            AlgorithmId::SelectionSort => "selection_sort",
            AlgorithmId::MergeSort => "merge_sort",
            AlgorithmId::QuickSort => "quick_sort",
            AlgorithmId::HeapSort => "heap_sort",
        }
    }

    pub fn descriptor(self) -> &'static AlgorithmDescriptor {
        // DESCRIPTORS follows the declaration order of ALL.
        &DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SortError::InvalidAlgorithm(s.to_string()))
    }
}

/// Static metadata shown next to a running algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub time_best: &'static str,
    pub time_average: &'static str,
    pub time_worst: &'static str,
    pub space: &'static str,
    pub stable: bool,
    pub in_place: bool,
    pub description: &'static str,
}

pub static DESCRIPTORS: [AlgorithmDescriptor; 6] = [
    AlgorithmDescriptor {
        id: "bubble_sort",
        name: "Bubble Sort",
        time_best: "O(n)",
        time_average: "O(n²)",
        time_worst: "O(n²)",
        space: "O(1)",
        stable: true,
        in_place: true,
        description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order. The pass is repeated until no swaps are needed.",
    },
    AlgorithmDescriptor {
        id: "insertion_sort",
        name: "Insertion Sort",
        time_best: "O(n)",
        time_average: "O(n²)",
        time_worst: "O(n²)",
        space: "O(1)",
        stable: true,
        in_place: true,
        description: "Builds the final sorted array one item at a time, inserting each element into its correct position within the already sorted portion.",
    },
    AlgorithmDescriptor {
        id: "selection_sort",
        name: "Selection Sort",
        time_best: "O(n²)",
        time_average: "O(n²)",
        time_worst: "O(n²)",
        space: "O(1)",
        stable: false,
        in_place: true,
        description: "Finds the minimum element of the unsorted part and places it at the beginning, then repeats for the remaining elements.",
    },
    AlgorithmDescriptor {
        id: "merge_sort",
        name: "Merge Sort",
        time_best: "O(n log n)",
        time_average: "O(n log n)",
        time_worst: "O(n log n)",
        space: "O(n)",
        stable: true,
        in_place: false,
        description: "Divides the array into halves, sorts them separately, then merges the sorted halves together.",
    },
    AlgorithmDescriptor {
        id: "quick_sort",
        name: "Quick Sort",
        time_best: "O(n log n)",
        time_average: "O(n log n)",
        time_worst: "O(n²)",
        space: "O(log n)",
        stable: false,
        in_place: true,
        description: "Selects a pivot element and partitions the array around it, then recursively sorts the partitions.",
    },
    AlgorithmDescriptor {
        id: "heap_sort",
        name: "Heap Sort",
        time_best: "O(n log n)",
        time_average: "O(n log n)",
        time_worst: "O(n log n)",
        space: "O(1)",
        stable: false,
        in_place: true,
        description: "Builds a max heap from the array, then repeatedly extracts the maximum element and places it at the end.",
    },
];

/// Placeholder returned by display lookups for names outside the registry.
pub static UNKNOWN_DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "unknown",
    name: "Unknown Algorithm",
    time_best: "N/A",
    time_average: "N/A",
    time_worst: "N/A",
    space: "N/A",
    stable: false,
    in_place: false,
    description: "No information available",
};

/// Display lookup: never fails, unknown names get [`UNKNOWN_DESCRIPTOR`].
pub fn descriptor(name: &str) -> &'static AlgorithmDescriptor {
    name.parse::<AlgorithmId>()
        .map(AlgorithmId::descriptor)
        .unwrap_or(&UNKNOWN_DESCRIPTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_id_order() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.descriptor().id, id.as_str());
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.as_str().parse::<AlgorithmId>().unwrap(), id);
        }
        assert_eq!(
            "bogo_sort".parse::<AlgorithmId>(),
            Err(SortError::InvalidAlgorithm("bogo_sort".into()))
        );
    }
}
