use crate::data_types::RunState;
use thiserror::Error;

/// Errors surfaced by the sorting core and the run controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("unknown algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("invalid array data: {0}")]
    DataFormat(String),

    #[error("cannot {action} while {actual:?}")]
    RunState {
        action: &'static str,
        actual: RunState,
    },

    #[error("sorting failed: {0}")]
    Fault(String),
}

pub type Result<T, E = SortError> = std::result::Result<T, E>;
