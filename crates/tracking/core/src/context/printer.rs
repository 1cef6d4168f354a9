use core::fmt;

/// Multi-line diagnostic renderer for phase contexts.
///
/// Output looks like:
///
/// ```text
/// Phase Context
///   - Completed: true
///   - Causes: 1
///     - source: Player { .. }
///   - World: Some(World { .. })
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextPrinter {
    title: String,
    lines: Vec<String>,
}

impl ContextPrinter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a top-level `key: value` entry.
    pub fn add(&mut self, key: impl fmt::Display, value: impl fmt::Debug) -> &mut Self {
        self.lines.push(format!("  - {key}: {value:?}"));
        self
    }

    /// Appends an entry nested under the previous top-level entry.
    pub fn add_nested(&mut self, key: impl fmt::Display, value: impl fmt::Debug) -> &mut Self {
        self.lines.push(format!("    - {key}: {value:?}"));
        self
    }

    pub fn finish(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContextPrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        for line in &self.lines {
            writeln!(f)?;
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Phase-specific data composed into a [`PhaseContext`](super::PhaseContext).
pub trait PhasePayload: fmt::Debug {
    /// Appends this payload's fields to the context dump.
    fn print_custom(&self, printer: &mut ContextPrinter) {
        let _ = printer;
    }
}

impl PhasePayload for () {}
