//! World-facing value types observed while a phase runs.
//!
//! The tracker never simulates the world; these types only describe what the
//! engine reports (a block that changed, an entity that spawned, an item that
//! dropped) so captures have concrete element types.
use core::fmt;

use bitflags::bitflags;
use uuid::Uuid;

/// Integer block coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the position shifted by the given deltas. Coordinates wrap
    /// at the `i32` bounds.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Stable identifier of a loaded world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldId(pub Uuid);

impl WorldId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// API-level view of a world: the canonical world reference held by contexts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    id: WorldId,
    name: String,
}

impl World {
    pub fn new(id: WorldId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Creates a world with a freshly generated identifier.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(WorldId::random(), name)
    }

    pub fn id(&self) -> WorldId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&World> for World {
    fn from(world: &World) -> Self {
        world.clone()
    }
}

/// Engine-side world handle.
///
/// The engine addresses worlds by dimension; the API view is embedded so the
/// handle can always be normalized down to a [`World`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerWorld {
    dimension: i32,
    world: World,
}

impl ServerWorld {
    pub fn new(dimension: i32, world: World) -> Self {
        Self { dimension, world }
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn as_api_world(&self) -> &World {
        &self.world
    }
}

impl From<ServerWorld> for World {
    fn from(server: ServerWorld) -> Self {
        server.world
    }
}

impl From<&ServerWorld> for World {
    fn from(server: &ServerWorld) -> Self {
        server.world.clone()
    }
}

/// Immutable record of a block at a position, taken before or after a change.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockSnapshot {
    world: WorldId,
    pos: BlockPos,
    block: String,
}

impl BlockSnapshot {
    pub fn new(world: WorldId, pos: BlockPos, block: impl Into<String>) -> Self {
        Self {
            world,
            pos,
            block: block.into(),
        }
    }

    pub fn world(&self) -> WorldId {
        self.world
    }

    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    /// Block type identifier, e.g. `minecraft:stone`.
    pub fn block(&self) -> &str {
        &self.block
    }
}

/// A spawned (or spawning) entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    unique_id: Uuid,
    entity_type: String,
}

impl Entity {
    pub fn new(unique_id: Uuid, entity_type: impl Into<String>) -> Self {
        Self {
            unique_id,
            entity_type: entity_type.into(),
        }
    }

    /// Creates an entity with a random unique id.
    pub fn spawn(entity_type: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4(), entity_type)
    }

    pub fn unique_id(&self) -> Uuid {
        self.unique_id
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }
}

/// A quantity of a single item type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    item: String,
    quantity: u32,
}

impl ItemStack {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {}", self.quantity, self.item)
    }
}

/// An item stack that exists in the world as an entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEntity {
    unique_id: Uuid,
    stack: ItemStack,
}

impl ItemEntity {
    pub fn new(unique_id: Uuid, stack: ItemStack) -> Self {
        Self { unique_id, stack }
    }

    pub fn spawn(stack: ItemStack) -> Self {
        Self::new(Uuid::new_v4(), stack)
    }

    pub fn unique_id(&self) -> Uuid {
        self.unique_id
    }

    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }
}

/// An item drop that has been requested but not yet spawned as an entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDropData {
    stack: ItemStack,
    position: BlockPos,
}

impl ItemDropData {
    pub fn new(stack: ItemStack, position: BlockPos) -> Self {
        Self { stack, position }
    }

    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    pub fn position(&self) -> BlockPos {
        self.position
    }
}

/// A connected player.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    unique_id: Uuid,
    name: String,
}

impl Player {
    pub fn new(unique_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            unique_id,
            name: name.into(),
        }
    }

    /// Creates a player with a random unique id.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4(), name)
    }

    pub fn unique_id(&self) -> Uuid {
        self.unique_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

bitflags! {
    /// Side effects the engine performs when a block changes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BlockChangeFlag: u8 {
        const NEIGHBOR = 1 << 0;
        const PHYSICS  = 1 << 1;
        const OBSERVER = 1 << 2;
        const ALL = Self::NEIGHBOR.bits() | Self::PHYSICS.bits() | Self::OBSERVER.bits();
    }
}

impl BlockChangeFlag {
    pub const fn updates_neighbors(&self) -> bool {
        self.contains(Self::NEIGHBOR)
    }

    pub const fn performs_physics(&self) -> bool {
        self.contains(Self::PHYSICS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_shifts_and_wraps_at_the_bounds() {
        assert_eq!(BlockPos::ORIGIN.offset(1, -2, 3), BlockPos::new(1, -2, 3));
        assert_eq!(
            BlockPos::new(i32::MAX, 0, i32::MIN).offset(1, 0, -1),
            BlockPos::new(i32::MIN, 0, i32::MAX)
        );
    }

    #[test]
    fn server_world_normalizes_to_its_api_world() {
        let world = World::named("overworld");
        let server = ServerWorld::new(0, world.clone());

        assert_eq!(World::from(&server), world);
        assert_eq!(World::from(server), world);
        assert_eq!(World::from(&world), world);
    }

    #[test]
    fn block_change_flag_all_covers_every_side_effect() {
        let all = BlockChangeFlag::ALL;
        assert!(all.updates_neighbors());
        assert!(all.performs_physics());
        assert!(all.contains(BlockChangeFlag::OBSERVER));

        let physics_only = BlockChangeFlag::PHYSICS;
        assert!(!physics_only.updates_neighbors());
        assert!(BlockChangeFlag::default().is_empty());
    }

    #[test]
    fn block_pos_orders_by_x_then_y_then_z() {
        let a = BlockPos::new(0, 64, 0);
        let b = a.offset(0, 0, 1);
        let c = a.offset(1, -64, 0);

        assert!(a < b);
        assert!(b < c);
        assert_eq!(c.to_string(), "(1, 0, 0)");
    }
}
