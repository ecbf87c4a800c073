use serde::{Deserialize, Serialize};

use super::stats::{RunStatistics, StatisticsSnapshot};

/// Lifecycle of the run controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
    Cancelled,
    Errored,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::Cancelled | RunState::Errored
        )
    }
}

/// How a run ended. Reported once to the consumer.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    Completed(RunStatistics),
    Cancelled(RunStatistics),
    Errored {
        statistics: RunStatistics,
        message: String,
    },
}

impl RunOutcome {
    pub fn state(&self) -> RunState {
        match self {
            RunOutcome::Completed(_) => RunState::Completed,
            RunOutcome::Cancelled(_) => RunState::Cancelled,
            RunOutcome::Errored { .. } => RunState::Errored,
        }
    }

    pub fn statistics(&self) -> &RunStatistics {
        match self {
            RunOutcome::Completed(s) | RunOutcome::Cancelled(s) => s,
            RunOutcome::Errored { statistics, .. } => statistics,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RunOutcome::Errored { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Final record of a run, returned by `RunController::wait`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport<T> {
    pub algorithm: super::AlgorithmId,
    pub state: RunState,
    pub statistics: StatisticsSnapshot,
    pub array: Vec<T>,
    pub error: Option<String>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}
