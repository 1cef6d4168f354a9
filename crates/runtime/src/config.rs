//! Tracker configuration structures and loaders.
use std::env;

use tracking_core::TrackingConfig;

/// Configuration required to run a [`PhaseTracker`](crate::PhaseTracker) and
/// its logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    pub tracking: TrackingConfig,
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl TrackerConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    pub fn new(tracking: TrackingConfig) -> Self {
        Self {
            tracking,
            log_filter: Self::DEFAULT_LOG_FILTER.to_owned(),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_MAX_PHASE_DEPTH` - Maximum nested phases (default: 32, min: 1)
    /// - `TRACKER_LOG_CAPTURES` - Log a capture summary per completed phase (default: true)
    /// - `TRACKER_LOG` - Log filter when `RUST_LOG` is unset (default: info)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(depth) = read_var::<usize>(&lookup, "TRACKER_MAX_PHASE_DEPTH") {
            config.tracking.max_phase_depth = depth.max(1);
        }

        if let Some(enabled) = read_var::<bool>(&lookup, "TRACKER_LOG_CAPTURES") {
            config.tracking.log_capture_summary = enabled;
        } else if lookup("TRACKER_LOG_CAPTURES").is_some() {
            // A bare `TRACKER_LOG_CAPTURES=` means enabled
            config.tracking.log_capture_summary = true;
        }

        if let Some(filter) = lookup("TRACKER_LOG").filter(|filter| !filter.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(TrackingConfig::default())
    }
}

fn read_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> TrackerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        TrackerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);

        assert_eq!(config, TrackerConfig::default());
        assert_eq!(
            config.tracking.max_phase_depth,
            TrackingConfig::DEFAULT_MAX_PHASE_DEPTH
        );
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_typed_variables() {
        let config = config_from(&[
            ("TRACKER_MAX_PHASE_DEPTH", " 8 "),
            ("TRACKER_LOG_CAPTURES", "false"),
            ("TRACKER_LOG", "tracking_core=trace"),
        ]);

        assert_eq!(config.tracking.max_phase_depth, 8);
        assert!(!config.tracking.log_capture_summary);
        assert_eq!(config.log_filter, "tracking_core=trace");
    }

    #[test]
    fn invalid_or_degenerate_values_fall_back() {
        let config = config_from(&[
            ("TRACKER_MAX_PHASE_DEPTH", "0"),
            ("TRACKER_LOG_CAPTURES", ""),
            ("TRACKER_LOG", "  "),
        ]);
        assert_eq!(config.tracking.max_phase_depth, 1);
        assert!(config.tracking.log_capture_summary);
        assert_eq!(config.log_filter, TrackerConfig::DEFAULT_LOG_FILTER);

        let config = config_from(&[("TRACKER_MAX_PHASE_DEPTH", "deep")]);
        assert_eq!(
            config.tracking.max_phase_depth,
            TrackingConfig::DEFAULT_MAX_PHASE_DEPTH
        );
    }
}
