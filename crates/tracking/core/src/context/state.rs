mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Open {}
    impl Sealed for super::Completed {}
}

/// Completion state of a [`PhaseContext`](super::PhaseContext).
///
/// Sealed: a context is either [`Open`] for configuration or [`Completed`].
pub trait ContextState: sealed::Sealed {
    const COMPLETED: bool;
}

/// Configuration state: causes and capture declarations may still be added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Open;

/// Frozen state: only lookups and capture appends remain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Completed;

impl ContextState for Open {
    const COMPLETED: bool = false;
}

impl ContextState for Completed {
    const COMPLETED: bool = true;
}
