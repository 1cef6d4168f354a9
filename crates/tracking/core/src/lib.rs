//! Phase-scoped cause tracking for a block-world game server.
//!
//! `tracking-core` records *why* a change to the world happened. Each unit of
//! game logic runs under a [`PhaseContext`]: a write-once bag of
//! [`NamedCause`]s plus the capture buffers the phase declared, which collect
//! the block changes, entity spawns and item drops the phase produces so the
//! driver can replay them afterwards. Completion is a type-state, so a frozen
//! context cannot be reconfigured.
pub mod capture;
pub mod cause;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod phase;
pub use capture::{
    BlockItemDropsSupplier, BlockItemEntityDropsSupplier, CaptureFlag, CaptureKind,
    CapturePlayer, CaptureSummary, CapturedBlocksSupplier, CapturedEntitiesSupplier,
    CapturedItemStackSupplier, CapturedItemsSupplier, CapturedMultiMapSupplier, CapturedSupplier,
    EntityItemDropsSupplier, EntityItemEntityDropsSupplier,
};
pub use cause::{CauseName, CauseObject, NamedCause};
pub use config::TrackingConfig;
pub use context::{Completed, ContextPrinter, ContextState, Open, PhaseContext, PhasePayload};
pub use error::{ContextError, ErrorSeverity, TrackingError};
pub use model::{
    BlockChangeFlag, BlockPos, BlockSnapshot, Entity, ItemDropData, ItemEntity, ItemStack, Player,
    ServerWorld, World, WorldId,
};
pub use phase::{GenerationContext, PhaseGroup, PhaseState, WorldGeneration};
