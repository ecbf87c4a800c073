use serde::{Deserialize, Serialize};

/// Vocabulary of observable steps an algorithm can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Compare,
    Swap,
    Insert,
    Shift,
    Merge,
    MarkPivot,
    MarkSorted,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Compare,
        EventKind::Swap,
        EventKind::Insert,
        EventKind::Shift,
        EventKind::Merge,
        EventKind::MarkPivot,
        EventKind::MarkSorted,
    ];
}

/// One step emitted by a running algorithm.
///
/// `snapshot` is an independent copy of the working array taken right after
/// the step was applied, so consumers may keep or mutate it freely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent<T> {
    pub kind: EventKind,
    pub indices: Vec<usize>,
    pub snapshot: Vec<T>,
}

impl<T> StepEvent<T> {
    pub fn new(kind: EventKind, indices: Vec<usize>, snapshot: Vec<T>) -> Self {
        Self {
            kind,
            indices,
            snapshot,
        }
    }

    /// Indices that fall inside the snapshot; out of range entries are dropped.
    pub fn clamped_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let len = self.snapshot.len();
        self.indices.iter().copied().filter(move |&i| i < len)
    }
}
