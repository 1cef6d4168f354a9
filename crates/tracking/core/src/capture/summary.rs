use core::fmt;
use std::collections::BTreeMap;

use super::CaptureKind;

/// Number of captured values per declared capture category.
///
/// Undeclared categories are absent, declared-but-empty ones count zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureSummary {
    counts: BTreeMap<CaptureKind, usize>,
}

impl CaptureSummary {
    pub(crate) fn record(&mut self, kind: CaptureKind, count: usize) {
        self.counts.insert(kind, count);
    }

    /// Captured value count, or `None` if the category was never declared.
    pub fn count(&self, kind: CaptureKind) -> Option<usize> {
        self.counts.get(&kind).copied()
    }

    pub fn declared(&self) -> impl Iterator<Item = CaptureKind> + '_ {
        self.counts.keys().copied()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// True if nothing was captured in any declared category.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for CaptureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counts.is_empty() {
            return f.write_str("none");
        }
        for (index, (kind, count)) in self.counts.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}={count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_declared_categories_in_order() {
        let mut summary = CaptureSummary::default();
        assert_eq!(summary.to_string(), "none");

        summary.record(CaptureKind::Items, 0);
        summary.record(CaptureKind::Blocks, 2);

        assert_eq!(summary.to_string(), "captured_blocks=2, captured_items=0");
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.count(CaptureKind::Entities), None);
        assert!(!summary.is_empty());
    }
}
