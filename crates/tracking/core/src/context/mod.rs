//! Phase-scoped cause context.
//!
//! A [`PhaseContext`] is built continuously while a phase is being set up
//! and retains no side effects of its own. It is deliberately distinct from
//! the cause attached to a dispatched event: it describes what the phase is
//! running *with*, and gives collaborating code somewhere to record what the
//! phase *did*.
//!
//! # Lifecycle
//!
//! 1. [`PhaseContext::start`] opens an empty context
//! 2. Setup code chains [`add`](PhaseContext::add) and the `add_*_captures`
//!    declarations
//! 3. [`complete`](PhaseContext::complete) freezes it into
//!    `PhaseContext<P, Completed>`
//! 4. The phase body appends side effects into declared captures
//! 5. Completion code reads the captures back and replays them
//!
//! A completed context has no mutating methods, so adding to it is rejected
//! at compile time:
//!
//! ```compile_fail
//! use tracking_core::{NamedCause, PhaseContext};
//!
//! let context = PhaseContext::start().complete();
//! let _ = context.add(NamedCause::source(1u8));
//! ```
//!
//! ```compile_fail
//! use tracking_core::PhaseContext;
//!
//! let context = PhaseContext::start().complete();
//! let _ = context.add_block_captures();
//! ```
//!
//! ```compile_fail
//! use tracking_core::PhaseContext;
//!
//! let context = PhaseContext::start().complete();
//! let _ = context.player();
//! ```
//!
//! ```compile_fail
//! use tracking_core::PhaseContext;
//!
//! let context = PhaseContext::start().complete();
//! let _ = context.add_captures();
//! ```
//!
//! ```compile_fail
//! use tracking_core::PhaseContext;
//!
//! let context = PhaseContext::start().complete();
//! let _ = context.add_entity_captures();
//! ```
//!
//! ```compile_fail
//! use tracking_core::PhaseContext;
//!
//! let context = PhaseContext::start().complete();
//! let _ = context.add_entity_drop_captures();
//! ```
//!
//! ```compile_fail
//! use tracking_core::{PhaseContext, Player};
//!
//! let context = PhaseContext::start().complete();
//! let _ = context.with_player(Player::named("Alex"));
//! ```
mod lookup;
mod printer;
mod state;

use core::any::{Any, TypeId};
use core::cell::Cell;
use core::fmt;
use core::marker::PhantomData;
use std::borrow::Cow;
use std::collections::BTreeMap;

use strum::EnumCount;
use tracing::{debug, trace};

use crate::capture::{
    BlockItemDropsSupplier, BlockItemEntityDropsSupplier, CaptureKind, CapturePlayer,
    CaptureSummary, CapturedBlocksSupplier, CapturedEntitiesSupplier, CapturedItemStackSupplier,
    CapturedItemsSupplier, EntityItemDropsSupplier, EntityItemEntityDropsSupplier,
};
use crate::cause::{CauseName, CauseObject, NamedCause};
use crate::config::TrackingConfig;
use crate::error::ContextError;
use crate::model::{BlockPos, BlockSnapshot, Entity, ItemDropData, ItemEntity, Player};

use lookup::CachedLookup;
pub use printer::{ContextPrinter, PhasePayload};
pub use state::{Completed, ContextState, Open};

/// Named causes plus declared captures for one phase invocation.
///
/// `P` is the phase-specific payload (`()` for phases without one) and `S`
/// the completion state.
///
/// ```
/// use tracking_core::{BlockPos, BlockSnapshot, NamedCause, PhaseContext, Player, WorldId};
///
/// let steve = Player::named("Steve");
/// let mut context = PhaseContext::start()
///     .add(NamedCause::source(steve.clone()))
///     .add_block_captures()
///     .complete();
///
/// let snapshot = BlockSnapshot::new(WorldId::random(), BlockPos::ORIGIN, "minecraft:stone");
/// context.captured_block_supplier()?.push(snapshot.clone());
///
/// assert_eq!(context.captured_blocks()?, &[snapshot]);
/// assert_eq!(context.source::<Player>(), Some(&steve));
/// assert!(context.captured_items().is_err());
/// # Ok::<(), tracking_core::ContextError>(())
/// ```
///
/// Contexts compare with `==` over their causes and payload, but are not
/// `Hash`: cause values only need `PartialEq + Debug`.
///
/// ```compile_fail
/// use std::collections::HashSet;
/// use tracking_core::PhaseContext;
///
/// let mut seen = HashSet::new();
/// seen.insert(PhaseContext::start().complete());
/// ```
pub struct PhaseContext<P = (), S = Open> {
    causes: Vec<NamedCause>,
    /// Index of the latest cause named `"source"`.
    source: Option<usize>,
    /// Index into `causes` of each declared capture slot.
    captures: [Option<usize>; CaptureKind::COUNT],
    cache: Cell<Option<CachedLookup>>,
    payload: P,
    state: PhantomData<S>,
}

impl PhaseContext {
    /// Opens an empty context for a phase without payload.
    pub fn start() -> Self {
        Self::with_payload(())
    }
}

impl<P: PhasePayload> PhaseContext<P, Open> {
    /// Opens an empty context carrying phase-specific `payload`.
    pub fn with_payload(payload: P) -> Self {
        Self {
            causes: Vec::with_capacity(TrackingConfig::DEFAULT_CONTEXT_CAPACITY),
            source: None,
            captures: [None; CaptureKind::COUNT],
            cache: Cell::new(None),
            payload,
            state: PhantomData,
        }
    }

    /// Appends a cause. `None` is accepted and ignored.
    ///
    /// A cause named `"source"` also becomes the context's source; the last
    /// one added wins.
    pub fn add(mut self, cause: impl Into<Option<NamedCause>>) -> Self {
        if let Some(cause) = cause.into() {
            self.push(cause);
        }
        self
    }

    /// Appends `value` under `name`; shorthand for `add(NamedCause::of(..))`.
    pub fn add_named<T: CauseObject>(self, name: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.add(NamedCause::of(name, value))
    }

    /// Declares block change, block item entity, and block drop captures.
    pub fn add_block_captures(mut self) -> Self {
        self.declare_all(CaptureKind::BLOCK);
        self
    }

    /// Declares block captures and entity captures together.
    pub fn add_captures(self) -> Self {
        self.add_block_captures().add_entity_captures()
    }

    /// Declares dropped item, spawned entity, and item stack captures.
    pub fn add_entity_captures(mut self) -> Self {
        self.declare_all(CaptureKind::ENTITY);
        self
    }

    /// Declares per-entity item drop captures.
    pub fn add_entity_drop_captures(mut self) -> Self {
        self.declare_all(CaptureKind::ENTITY_DROP);
        self
    }

    /// Declares an empty captured-player slot.
    pub fn player(mut self) -> Self {
        self.declare(CaptureKind::Player);
        self
    }

    /// Declares the captured-player slot, pre-populated with `player`.
    pub fn with_player(mut self, player: impl Into<Option<Player>>) -> Self {
        let index = self.declare(CaptureKind::Player);
        if let Some(player) = player.into() {
            if let Some(capture) = self.causes[index]
                .value_mut()
                .as_any_mut()
                .downcast_mut::<CapturePlayer>()
            {
                capture.add_player(player);
            }
        }
        self
    }

    /// Phase-specific payload, still editable while the context is open.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Freezes the context.
    pub fn complete(self) -> PhaseContext<P, Completed> {
        debug!(
            causes = self.causes.len(),
            payload = ?self.payload,
            "phase context completed"
        );
        PhaseContext {
            causes: self.causes,
            source: self.source,
            captures: self.captures,
            cache: self.cache,
            payload: self.payload,
            state: PhantomData,
        }
    }

    fn push(&mut self, cause: NamedCause) {
        if cause.is_source() {
            self.source = Some(self.causes.len());
        }
        self.causes.push(cause);
    }

    fn declare_all(&mut self, kinds: &[CaptureKind]) {
        for &kind in kinds {
            self.declare(kind);
        }
    }

    /// Creates the capture slot for `kind` unless it already exists.
    fn declare(&mut self, kind: CaptureKind) -> usize {
        if let Some(index) = self.captures[kind.slot()] {
            trace!(capture = %kind, "capture already declared");
            return index;
        }
        let index = self.causes.len();
        self.causes.push(empty_capture(kind));
        self.captures[kind.slot()] = Some(index);
        index
    }
}

impl<P: PhasePayload> PhaseContext<P, Completed> {
    /// Already complete; returns the context unchanged.
    pub fn complete(self) -> Self {
        self
    }
}

impl<P: PhasePayload, S: ContextState> PhaseContext<P, S> {
    /// True once [`complete`](PhaseContext::complete) has frozen the context.
    pub fn is_complete(&self) -> bool {
        S::COMPLETED
    }

    /// Phase-specific payload; `()` for phases without one.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Number of registered causes, capture slots included.
    pub fn len(&self) -> usize {
        self.causes.len()
    }

    /// True if no cause and no capture slot was registered.
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    /// Causes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, NamedCause> {
        self.causes.iter()
    }

    /// Visits every cause in insertion order.
    pub fn for_each(&self, visitor: impl FnMut(&NamedCause)) {
        self.causes.iter().for_each(visitor);
    }

    /// First cause value of type `T`, in insertion order.
    pub fn first<T: Any>(&self) -> Option<&T> {
        self.lookup::<T>(None)
    }

    /// First cause value of type `T` whose name matches `name`, ignoring
    /// case (see [`CauseName::matches`]).
    pub fn first_named<T: Any>(&self, name: &str) -> Option<&T> {
        self.lookup::<T>(Some(name))
    }

    /// The source, if one was added and it is a `T`.
    pub fn source<T: Any>(&self) -> Option<&T> {
        self.causes.get(self.source?)?.downcast_ref::<T>()
    }

    /// True if a cause named `"source"` was added.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// True if `kind` was declared by one of the `add_*_captures` calls,
    /// [`player`](PhaseContext::player) or [`with_player`](PhaseContext::with_player).
    pub fn is_capturing(&self, kind: CaptureKind) -> bool {
        self.captures[kind.slot()].is_some()
    }

    /// Captured value count per declared category.
    pub fn capture_summary(&self) -> CaptureSummary {
        let mut summary = CaptureSummary::default();
        for cause in &self.causes {
            let &CauseName::Capture(kind) = cause.name() else {
                continue;
            };
            summary.record(kind, captured_count(kind, cause));
        }
        summary
    }

    /// Renders the context for diagnostics.
    pub fn dump(&self) -> String {
        let mut printer = ContextPrinter::new("Phase Context");
        printer
            .add("Completed", S::COMPLETED)
            .add("Causes", self.causes.len());
        for cause in &self.causes {
            printer.add_nested(cause.name(), cause.value());
        }
        self.payload.print_custom(&mut printer);
        printer.finish()
    }

    /// Spawned entities captured so far.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless entity captures were declared.
    pub fn captured_entities(&self) -> Result<&[Entity], ContextError> {
        self.capture::<CapturedEntitiesSupplier>(CaptureKind::Entities)
            .map(|supplier| supplier.get())
    }

    /// Buffer the phase body appends spawned entities to.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless entity captures were declared.
    pub fn captured_entity_supplier(
        &mut self,
    ) -> Result<&mut CapturedEntitiesSupplier, ContextError> {
        self.capture_mut(CaptureKind::Entities)
    }

    /// Dropped item entities captured so far.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless entity captures were declared.
    pub fn captured_items(&self) -> Result<&[ItemEntity], ContextError> {
        self.capture::<CapturedItemsSupplier>(CaptureKind::Items)
            .map(|supplier| supplier.get())
    }

    /// Buffer for dropped item entities.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless entity captures were declared.
    pub fn captured_items_supplier(&mut self) -> Result<&mut CapturedItemsSupplier, ContextError> {
        self.capture_mut(CaptureKind::Items)
    }

    /// Snapshots of the blocks changed so far.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless block captures were declared.
    pub fn captured_blocks(&self) -> Result<&[BlockSnapshot], ContextError> {
        self.capture::<CapturedBlocksSupplier>(CaptureKind::Blocks)
            .map(|supplier| supplier.get())
    }

    /// Buffer for block snapshots.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless block captures were declared.
    pub fn captured_block_supplier(
        &mut self,
    ) -> Result<&mut CapturedBlocksSupplier, ContextError> {
        self.capture_mut(CaptureKind::Blocks)
    }

    /// Pending item drops grouped by the block position they came from.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless block captures were declared.
    pub fn captured_block_drops(
        &self,
    ) -> Result<&BTreeMap<BlockPos, Vec<ItemDropData>>, ContextError> {
        self.capture::<BlockItemDropsSupplier>(CaptureKind::BlockDrops)
            .map(|supplier| supplier.as_map())
    }

    /// Multimap of pending item drops per block position.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless block captures were declared.
    pub fn block_drop_supplier(&mut self) -> Result<&mut BlockItemDropsSupplier, ContextError> {
        self.capture_mut(CaptureKind::BlockDrops)
    }

    /// Multimap of item entities spawned per block position.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless block captures were declared.
    pub fn block_item_drop_supplier(
        &mut self,
    ) -> Result<&mut BlockItemEntityDropsSupplier, ContextError> {
        self.capture_mut(CaptureKind::BlockItemDrops)
    }

    /// Multimap of pending item drops per entity unique id.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless entity drop captures were
    /// declared.
    pub fn captured_entity_drop_supplier(
        &mut self,
    ) -> Result<&mut EntityItemDropsSupplier, ContextError> {
        self.capture_mut(CaptureKind::EntityStackDrops)
    }

    /// Multimap of item entities spawned per entity unique id.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless entity drop captures were
    /// declared.
    pub fn captured_entity_item_drop_supplier(
        &mut self,
    ) -> Result<&mut EntityItemEntityDropsSupplier, ContextError> {
        self.capture_mut(CaptureKind::EntityItemDrops)
    }

    /// Buffer for pending item-stack drops.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless entity captures were declared.
    pub fn captured_item_stack_supplier(
        &mut self,
    ) -> Result<&mut CapturedItemStackSupplier, ContextError> {
        self.capture_mut(CaptureKind::ItemStacks)
    }

    /// The captured-player slot, for recording the player.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless the player slot was declared.
    pub fn captured_player_supplier(&mut self) -> Result<&mut CapturePlayer, ContextError> {
        self.capture_mut(CaptureKind::Player)
    }

    /// The captured player; `Ok(None)` if the slot is declared but empty.
    ///
    /// # Errors
    ///
    /// [`ContextError::MissingCapture`] unless the player slot was declared.
    pub fn captured_player(&self) -> Result<Option<&Player>, ContextError> {
        self.capture::<CapturePlayer>(CaptureKind::Player)
            .map(|capture| capture.player())
    }

    fn lookup<T: Any>(&self, name: Option<&str>) -> Option<&T> {
        let type_id = TypeId::of::<T>();
        let cached = self
            .cache
            .get()
            .and_then(|cached| cached.hit(type_id, name, &self.causes));

        let index = match cached {
            Some(index) => index,
            None => {
                let index = self.causes.iter().position(|cause| {
                    cause.is::<T>() && name.is_none_or(|name| cause.name().matches(name))
                })?;
                self.cache
                    .set(Some(CachedLookup::new(type_id, name.is_some(), index)));
                index
            }
        };
        self.causes.get(index)?.downcast_ref::<T>()
    }

    fn capture<T: Any>(&self, kind: CaptureKind) -> Result<&T, ContextError> {
        self.captures[kind.slot()]
            .and_then(|index| self.causes.get(index))
            .and_then(|cause| cause.downcast_ref::<T>())
            .ok_or_else(|| self.missing_capture(kind))
    }

    fn capture_mut<T: Any>(&mut self, kind: CaptureKind) -> Result<&mut T, ContextError> {
        let index = match self.captures[kind.slot()] {
            Some(index) if self.causes[index].is::<T>() => index,
            _ => return Err(self.missing_capture(kind)),
        };
        match self.causes[index].value_mut().as_any_mut().downcast_mut::<T>() {
            Some(capture) => Ok(capture),
            None => unreachable!("capture slot type checked above"),
        }
    }

    fn missing_capture(&self, kind: CaptureKind) -> ContextError {
        debug!(capture = %kind, "capture requested without a declaration");
        ContextError::MissingCapture {
            kind,
            dump: self.dump(),
        }
    }
}

/// Fresh capture slot for `kind`; accessors downcast to exactly these types.
fn empty_capture(kind: CaptureKind) -> NamedCause {
    match kind {
        CaptureKind::Blocks => NamedCause::capture(kind, CapturedBlocksSupplier::new()),
        CaptureKind::BlockItemDrops => {
            NamedCause::capture(kind, BlockItemEntityDropsSupplier::new())
        }
        CaptureKind::BlockDrops => NamedCause::capture(kind, BlockItemDropsSupplier::new()),
        CaptureKind::Items => NamedCause::capture(kind, CapturedItemsSupplier::new()),
        CaptureKind::Entities => NamedCause::capture(kind, CapturedEntitiesSupplier::new()),
        CaptureKind::ItemStacks => NamedCause::capture(kind, CapturedItemStackSupplier::new()),
        CaptureKind::EntityStackDrops => NamedCause::capture(kind, EntityItemDropsSupplier::new()),
        CaptureKind::EntityItemDrops => {
            NamedCause::capture(kind, EntityItemEntityDropsSupplier::new())
        }
        CaptureKind::Player => NamedCause::capture(kind, CapturePlayer::new()),
    }
}

fn captured_count(kind: CaptureKind, cause: &NamedCause) -> usize {
    let count = match kind {
        CaptureKind::Blocks => cause.downcast_ref::<CapturedBlocksSupplier>().map(|s| s.len()),
        CaptureKind::BlockItemDrops => cause
            .downcast_ref::<BlockItemEntityDropsSupplier>()
            .map(|s| s.len()),
        CaptureKind::BlockDrops => cause.downcast_ref::<BlockItemDropsSupplier>().map(|s| s.len()),
        CaptureKind::Items => cause.downcast_ref::<CapturedItemsSupplier>().map(|s| s.len()),
        CaptureKind::Entities => cause
            .downcast_ref::<CapturedEntitiesSupplier>()
            .map(|s| s.len()),
        CaptureKind::ItemStacks => cause
            .downcast_ref::<CapturedItemStackSupplier>()
            .map(|s| s.len()),
        CaptureKind::EntityStackDrops => cause
            .downcast_ref::<EntityItemDropsSupplier>()
            .map(|s| s.len()),
        CaptureKind::EntityItemDrops => cause
            .downcast_ref::<EntityItemEntityDropsSupplier>()
            .map(|s| s.len()),
        CaptureKind::Player => cause
            .downcast_ref::<CapturePlayer>()
            .map(|capture| usize::from(capture.player().is_some())),
    };
    count.unwrap_or_default()
}

impl<P: PartialEq, S> PartialEq for PhaseContext<P, S> {
    fn eq(&self, other: &Self) -> bool {
        self.causes == other.causes && self.payload == other.payload
    }
}

impl<P: fmt::Debug, S: ContextState> fmt::Debug for PhaseContext<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseContext")
            .field("is_completed", &S::COMPLETED)
            .field("causes", &self.causes)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<P: PhasePayload, S: ContextState> fmt::Display for PhaseContext<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemStack, WorldId};

    /// Reference answer for `first_named` / `first` without any caching.
    fn naive<'a, T: Any, P: PhasePayload, S: ContextState>(
        context: &'a PhaseContext<P, S>,
        name: Option<&str>,
    ) -> Option<&'a T> {
        context
            .iter()
            .filter(|cause| name.is_none_or(|name| cause.name().matches(name)))
            .find_map(|cause| cause.downcast_ref::<T>())
    }

    #[test]
    fn cached_lookups_always_agree_with_a_linear_scan() {
        let context = PhaseContext::start()
            .add_named("tool", ItemStack::new("minecraft:iron_pickaxe", 1))
            .add_named("count", 3u32)
            .add_named("reward", ItemStack::new("minecraft:diamond", 2))
            .add_named("count", 9u32)
            .add_captures()
            .complete();

        let questions: [Option<&str>; 5] = [None, Some("reward"), None, Some("COUNT"), Some("x")];
        for _ in 0..2 {
            for name in questions {
                assert_eq!(
                    context.lookup::<ItemStack>(name),
                    naive::<ItemStack, _, _>(&context, name)
                );
                assert_eq!(
                    context.lookup::<u32>(name),
                    naive::<u32, _, _>(&context, name)
                );
                assert_eq!(
                    context.lookup::<CapturedBlocksSupplier>(name),
                    naive::<CapturedBlocksSupplier, _, _>(&context, name)
                );
            }
        }
    }

    #[test]
    fn named_lookup_does_not_leak_into_typed_lookup() {
        let context = PhaseContext::start()
            .add_named("first", 1u32)
            .add_named("second", 2u32)
            .complete();

        assert_eq!(context.first_named::<u32>("second"), Some(&2));
        assert_eq!(context.first::<u32>(), Some(&1));
        assert_eq!(context.first_named::<u32>("SECOND"), Some(&2));
    }

    #[test]
    fn lookup_sees_values_appended_after_a_miss() {
        let context = PhaseContext::start().add_named("a", 1u8);
        assert_eq!(context.first::<u16>(), None);

        let context = context.add_named("b", 2u16);
        assert_eq!(context.first::<u16>(), Some(&2));
    }

    #[test]
    fn capture_slot_is_shared_by_scan_and_accessor() {
        let mut context = PhaseContext::start().add_block_captures().complete();
        let snapshot = BlockSnapshot::new(WorldId::random(), BlockPos::ORIGIN, "minecraft:air");

        context
            .captured_block_supplier()
            .expect("blocks declared")
            .push(snapshot.clone());

        let scanned = context
            .first_named::<CapturedBlocksSupplier>("captured_blocks")
            .expect("slot registered as a cause");
        assert_eq!(scanned.get(), &[snapshot]);
        assert_eq!(
            context.first::<CapturedBlocksSupplier>().map(|s| s.len()),
            Some(1)
        );
    }

    #[test]
    fn mutable_accessor_errors_carry_the_dump() {
        let mut context = PhaseContext::start()
            .add_named("tool", 1u8)
            .add_entity_captures()
            .complete();

        let error = context
            .captured_block_supplier()
            .expect_err("blocks were never declared");
        let ContextError::MissingCapture { kind, dump } = &error;
        assert_eq!(*kind, CaptureKind::Blocks);
        assert_eq!(dump, &context.dump());
        assert!(dump.contains("    - tool: 1"));

        assert!(context.captured_entity_supplier().is_ok());
    }

    #[test]
    fn summary_counts_only_declared_categories() {
        let mut context = PhaseContext::start()
            .add_entity_captures()
            .with_player(Player::named("Alex"))
            .complete();
        context
            .captured_entity_supplier()
            .expect("entities declared")
            .push(Entity::spawn("minecraft:zombie"));

        let summary = context.capture_summary();
        assert_eq!(summary.count(CaptureKind::Entities), Some(1));
        assert_eq!(summary.count(CaptureKind::Items), Some(0));
        assert_eq!(summary.count(CaptureKind::Player), Some(1));
        assert_eq!(summary.count(CaptureKind::Blocks), None);
        assert_eq!(summary.total(), 2);
    }
}
