//! Common error infrastructure for tracking-core.
//!
//! Every failure a phase context can report is a programming error in the
//! phase that owns it: a capture was consumed that was never declared. Plain
//! absence of a value is never an error and is returned as `None`.
//!
//! Mutation after completion is not represented here at all: a completed
//! context is a different type that has no mutating methods.

use crate::capture::CaptureKind;

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input from the caller, e.g. a context requested with the
    /// wrong payload type.
    Validation,

    /// A phase broke its own declared contract.
    ///
    /// These indicate bugs in phase code and should be investigated.
    Internal,

    /// Tracking state is unusable, e.g. the phase stack overflowed.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all tracking errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who is at fault, not by impact
pub trait TrackingError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by phase context accessors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// A capture accessor was used without the matching `add_*_captures`
    /// declaration. `dump` holds the rendered context at the time of failure.
    #[error("{}\n{}", .kind.expectation(), .dump)]
    MissingCapture { kind: CaptureKind, dump: String },
}

impl ContextError {
    /// The capture category the caller expected to exist.
    pub fn capture_kind(&self) -> CaptureKind {
        match self {
            Self::MissingCapture { kind, .. } => *kind,
        }
    }
}

impl TrackingError for ContextError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCapture { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCapture { .. } => "missing_capture",
        }
    }
}
