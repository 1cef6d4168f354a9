//! Phase stack bookkeeping.
//!
//! The tracker owns one completed [`PhaseContext`] per running phase. Nested
//! phases (a block break that spawns an entity, say) push onto the stack and
//! must be completed innermost first.
use std::any::{Any, TypeId, type_name};

use tracking_core::{
    CaptureSummary, Completed, PhaseContext, PhasePayload, PhaseState, TrackingConfig,
    WorldGeneration,
};

use crate::config::TrackerConfig;
use crate::error::{Result, TrackerError};

/// Type-erased view of a completed context held on the stack.
trait TrackedContext {
    fn dump(&self) -> String;

    fn capture_summary(&self) -> CaptureSummary;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<P: PhasePayload + 'static> TrackedContext for PhaseContext<P, Completed> {
    fn dump(&self) -> String {
        PhaseContext::dump(self)
    }

    fn capture_summary(&self) -> CaptureSummary {
        PhaseContext::capture_summary(self)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

struct Frame {
    state: PhaseState,
    payload: TypeId,
    context: Box<dyn TrackedContext>,
}

/// Stack of running phases and their contexts.
pub struct PhaseTracker {
    config: TrackingConfig,
    stack: Vec<Frame>,
}

impl PhaseTracker {
    pub fn new(config: TrackingConfig) -> Self {
        Self {
            config,
            stack: Vec::new(),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.tracking.clone())
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    /// Enters `state` with its completed context.
    ///
    /// Generation phases must run with a [`WorldGeneration`] payload and no
    /// other phase may.
    pub fn switch_to_phase<P: PhasePayload + 'static>(
        &mut self,
        state: PhaseState,
        context: PhaseContext<P, Completed>,
    ) -> Result<()> {
        if self.stack.len() >= self.config.max_phase_depth {
            tracing::error!(
                %state,
                depth = self.stack.len(),
                "phase stack overflow\n{}",
                self.dump()
            );
            return Err(TrackerError::StackOverflow {
                state,
                max_depth: self.config.max_phase_depth,
            });
        }

        let payload = TypeId::of::<P>();
        let is_world_payload = payload == TypeId::of::<WorldGeneration>();
        if state.is_generation() != is_world_payload {
            let expected = if state.is_generation() {
                type_name::<WorldGeneration>()
            } else {
                "non-generation"
            };
            tracing::warn!(%state, payload = type_name::<P>(), expected, "rejected phase payload");
            return Err(TrackerError::PayloadRejected {
                state,
                payload: type_name::<P>(),
                expected,
            });
        }

        self.stack.push(Frame {
            state,
            payload,
            context: Box::new(context),
        });
        tracing::debug!(%state, depth = self.stack.len(), "entered phase");
        Ok(())
    }

    pub fn current_state(&self) -> Option<PhaseState> {
        self.stack.last().map(|frame| frame.state)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Context of the innermost phase, for appending captures while the
    /// phase body runs.
    pub fn current_context_mut<P: PhasePayload + 'static>(
        &mut self,
    ) -> Result<&mut PhaseContext<P, Completed>> {
        let frame = self.stack.last_mut().ok_or(TrackerError::EmptyStack)?;
        let state = frame.state;
        frame
            .context
            .as_any_mut()
            .downcast_mut::<PhaseContext<P, Completed>>()
            .ok_or(TrackerError::PayloadMismatch {
                state,
                requested: type_name::<P>(),
            })
    }

    /// Leaves the innermost phase, which must be `state`, and hands its
    /// context back for replaying the captures.
    pub fn complete_phase<P: PhasePayload + 'static>(
        &mut self,
        state: PhaseState,
    ) -> Result<PhaseContext<P, Completed>> {
        let frame = self.stack.last().ok_or(TrackerError::EmptyStack)?;
        if frame.state != state {
            tracing::warn!(
                requested = %state,
                current = %frame.state,
                "completing a phase that is not innermost"
            );
            return Err(TrackerError::PhaseMismatch {
                requested: state,
                current: frame.state,
            });
        }
        if frame.payload != TypeId::of::<P>() {
            return Err(TrackerError::PayloadMismatch {
                state,
                requested: type_name::<P>(),
            });
        }

        let frame = self.stack.pop().ok_or(TrackerError::EmptyStack)?;
        if self.config.log_capture_summary {
            tracing::info!(
                %state,
                captures = %frame.context.capture_summary(),
                "completed phase"
            );
        } else {
            tracing::debug!(%state, "completed phase");
        }

        frame
            .context
            .into_any()
            .downcast::<PhaseContext<P, Completed>>()
            .map(|context| *context)
            .map_err(|_| TrackerError::PayloadMismatch {
                state,
                requested: type_name::<P>(),
            })
    }

    /// Renders every frame, innermost first.
    pub fn dump(&self) -> String {
        let mut out = format!("Phase Stack\n  - Depth: {}", self.stack.len());
        for (index, frame) in self.stack.iter().enumerate().rev() {
            out.push_str(&format!("\n  - [{index}] {}", frame.state));
            for line in frame.context.dump().lines() {
                out.push_str("\n    ");
                out.push_str(line);
            }
        }
        out
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new(TrackingConfig::default())
    }
}
