/// Cause tracking constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackingConfig {
    /// Maximum number of phases that may be nested on a tracker's stack.
    /// Deeper nesting almost always means a phase was never completed.
    pub max_phase_depth: usize,

    /// Whether completing a phase logs a per-category capture summary.
    pub log_capture_summary: bool,
}

impl TrackingConfig {
    // ===== compile-time constants =====
    /// Initial cause capacity of a new context. Most phases register fewer
    /// than ten causes including their capture slots.
    pub const DEFAULT_CONTEXT_CAPACITY: usize = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_PHASE_DEPTH: usize = 32;
    pub const DEFAULT_LOG_CAPTURE_SUMMARY: bool = true;

    pub fn new() -> Self {
        Self {
            max_phase_depth: Self::DEFAULT_MAX_PHASE_DEPTH,
            log_capture_summary: Self::DEFAULT_LOG_CAPTURE_SUMMARY,
        }
    }

    pub fn with_max_phase_depth(mut self, max_phase_depth: usize) -> Self {
        self.max_phase_depth = max_phase_depth;
        self
    }

    pub fn with_capture_summary(mut self, enabled: bool) -> Self {
        self.log_capture_summary = enabled;
        self
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self::new()
    }
}
