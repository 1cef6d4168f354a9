//! Errors surfaced by the phase tracker.
use thiserror::Error;
use tracking_core::{ErrorSeverity, PhaseState, TrackingError};

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("no phase is currently being tracked")]
    EmptyStack,

    #[error("cannot complete {requested}: current phase is {current}")]
    PhaseMismatch {
        requested: PhaseState,
        current: PhaseState,
    },

    #[error("phase stack overflow entering {state}: depth limit {max_depth} reached")]
    StackOverflow { state: PhaseState, max_depth: usize },

    #[error("{state} context does not carry a {requested} payload")]
    PayloadMismatch {
        state: PhaseState,
        requested: &'static str,
    },

    #[error("{state} phase rejects a {payload} payload, expected {expected}")]
    PayloadRejected {
        state: PhaseState,
        payload: &'static str,
        expected: &'static str,
    },
}

impl TrackingError for TrackerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PayloadMismatch { .. } | Self::PayloadRejected { .. } => {
                ErrorSeverity::Validation
            }
            Self::EmptyStack | Self::PhaseMismatch { .. } => ErrorSeverity::Internal,
            Self::StackOverflow { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyStack => "empty_stack",
            Self::PhaseMismatch { .. } => "phase_mismatch",
            Self::StackOverflow { .. } => "stack_overflow",
            Self::PayloadMismatch { .. } => "payload_mismatch",
            Self::PayloadRejected { .. } => "payload_rejected",
        }
    }
}
