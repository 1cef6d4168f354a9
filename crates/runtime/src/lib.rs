//! Phase driver bookkeeping on top of `tracking-core`.
//!
//! [`PhaseTracker`] keeps the stack of running phases with their completed
//! contexts, so the phase body can append captures and the driver can take
//! the context back for replay when the phase ends. [`TrackerConfig`] loads
//! the tunables from the environment and [`logging`] installs a `tracing`
//! subscriber for applications that do not bring their own.
pub mod config;
pub mod error;
pub mod logging;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use logging::init_logging;
pub use tracker::PhaseTracker;
