//! Capture categories, containers, and per-context bookkeeping.
mod holders;
mod kind;
mod summary;
mod supplier;

pub use holders::{CaptureFlag, CapturePlayer};
pub use kind::CaptureKind;
pub use summary::CaptureSummary;
pub use supplier::{
    BlockItemDropsSupplier, BlockItemEntityDropsSupplier, CapturedBlocksSupplier,
    CapturedEntitiesSupplier, CapturedItemStackSupplier, CapturedItemsSupplier,
    CapturedMultiMapSupplier, CapturedSupplier, EntityItemDropsSupplier,
    EntityItemEntityDropsSupplier,
};
