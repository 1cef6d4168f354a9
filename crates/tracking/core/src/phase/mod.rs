//! Phases a context can be opened for.
mod generation;

pub use generation::{GenerationContext, WorldGeneration};

/// A unit of game logic that runs under its own [`PhaseContext`](crate::PhaseContext).
///
/// The string form is the snake_case variant name and parsing ignores ASCII
/// case, so `"Chunk_Generation"` parses to [`PhaseState::ChunkGeneration`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PhaseState {
    /// A block placed by a player or a dispenser.
    BlockPlacement,
    /// A block broken by a player or by physics.
    BlockBreak,
    /// An entity spawned outside of world generation.
    EntitySpawn,
    /// A player interacting with a block, item, or entity.
    PlayerInteraction,
    /// Terrain shaping for a fresh chunk.
    ChunkGeneration,
    /// Decoration pass over a generated chunk.
    TerrainPopulation,
    /// Initial creature spawning while a world is populated.
    WorldSpawnerSpawning,
}

/// Coarse family a [`PhaseState`] belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PhaseGroup {
    Block,
    Entity,
    Player,
    Generation,
}

impl PhaseState {
    pub const fn group(&self) -> PhaseGroup {
        match self {
            Self::BlockPlacement | Self::BlockBreak => PhaseGroup::Block,
            Self::EntitySpawn => PhaseGroup::Entity,
            Self::PlayerInteraction => PhaseGroup::Player,
            Self::ChunkGeneration | Self::TerrainPopulation | Self::WorldSpawnerSpawning => {
                PhaseGroup::Generation
            }
        }
    }

    /// Generation phases run with a [`GenerationContext`].
    pub const fn is_generation(&self) -> bool {
        matches!(self.group(), PhaseGroup::Generation)
    }
}
