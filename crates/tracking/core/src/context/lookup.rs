use core::any::TypeId;

use crate::cause::NamedCause;

/// Memo of the last successful typed lookup.
///
/// Causes are append-only, so the first match for a question never moves:
/// a cached index stays correct for as long as the same question is asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct CachedLookup {
    type_id: TypeId,
    named: bool,
    index: usize,
}

impl CachedLookup {
    pub(super) fn new(type_id: TypeId, named: bool, index: usize) -> Self {
        Self {
            type_id,
            named,
            index,
        }
    }

    /// Returns the cached index if it answers the lookup `(type_id, name)`.
    pub(super) fn hit(
        &self,
        type_id: TypeId,
        name: Option<&str>,
        causes: &[NamedCause],
    ) -> Option<usize> {
        if self.type_id != type_id {
            return None;
        }
        match name {
            None if !self.named => Some(self.index),
            Some(name)
                if self.named
                    && causes
                        .get(self.index)
                        .is_some_and(|cause| cause.name().matches(name)) =>
            {
                Some(self.index)
            }
            _ => None,
        }
    }
}
