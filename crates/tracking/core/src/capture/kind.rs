/// Category of side effect a phase can declare it wants captured.
///
/// The string form of each variant is the reserved cause name its capture
/// slot is registered under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaptureKind {
    /// Block snapshots of changed blocks.
    #[strum(serialize = "captured_blocks")]
    Blocks,
    /// Item entities spawned by blocks, keyed by block position.
    #[strum(serialize = "captured_block_item_drops")]
    BlockItemDrops,
    /// Pending item drops from blocks, keyed by block position.
    #[strum(serialize = "captured_block_drops")]
    BlockDrops,
    /// Dropped item entities.
    #[strum(serialize = "captured_items")]
    Items,
    /// Spawned entities.
    #[strum(serialize = "captured_entities")]
    Entities,
    /// Pending item-stack drops.
    #[strum(serialize = "captured_item_stacks")]
    ItemStacks,
    /// Pending item drops from entities, keyed by entity unique id.
    #[strum(serialize = "captured_entity_stack_drops")]
    EntityStackDrops,
    /// Item entities spawned by entities, keyed by entity unique id.
    #[strum(serialize = "captured_entity_item_drops")]
    EntityItemDrops,
    /// The player an event listener acted on behalf of.
    #[strum(serialize = "captured_player")]
    Player,
}

impl CaptureKind {
    /// Declared by `add_block_captures`.
    pub const BLOCK: &'static [Self] = &[Self::Blocks, Self::BlockItemDrops, Self::BlockDrops];

    /// Declared by `add_entity_captures`.
    pub const ENTITY: &'static [Self] = &[Self::Items, Self::Entities, Self::ItemStacks];

    /// Declared by `add_entity_drop_captures`.
    pub const ENTITY_DROP: &'static [Self] = &[Self::EntityStackDrops, Self::EntityItemDrops];

    /// What the phase should have declared, phrased for a failure report.
    pub const fn expectation(&self) -> &'static str {
        match self {
            Self::Blocks => "Intended to capture block changes, but there is no list available!",
            Self::BlockItemDrops => "Intended to track block item drops!",
            Self::BlockDrops => "Expected to be capturing block drops!",
            Self::Items => "Intended to capture dropped item entities!",
            Self::Entities => "Intended to capture entity spawns!",
            Self::ItemStacks => "Expected to be capturing ItemStack drops from entities!",
            Self::EntityStackDrops => "Intended to capture item stacks dropped by entities!",
            Self::EntityItemDrops => "Intended to capture item entities dropped by entities!",
            Self::Player => {
                "Expected to be capturing a Player from an event listener, but we're not capturing them!"
            }
        }
    }

    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn reserved_names_are_stable() {
        let names: Vec<_> = CaptureKind::iter().map(|kind| kind.to_string()).collect();
        assert_eq!(
            names,
            [
                "captured_blocks",
                "captured_block_item_drops",
                "captured_block_drops",
                "captured_items",
                "captured_entities",
                "captured_item_stacks",
                "captured_entity_stack_drops",
                "captured_entity_item_drops",
                "captured_player",
            ]
        );
        assert_eq!(
            CaptureKind::from_str("captured_items").ok(),
            Some(CaptureKind::Items)
        );
    }

    #[test]
    fn expectations_are_distinct_per_category() {
        let messages: HashSet<_> = CaptureKind::iter().map(|kind| kind.expectation()).collect();
        assert_eq!(messages.len(), <CaptureKind as strum::EnumCount>::COUNT);
    }

    #[test]
    fn declaration_groups_do_not_overlap() {
        for kind in CaptureKind::BLOCK {
            assert!(!CaptureKind::ENTITY.contains(kind));
            assert!(!CaptureKind::ENTITY_DROP.contains(kind));
        }
        for kind in CaptureKind::ENTITY {
            assert!(!CaptureKind::ENTITY_DROP.contains(kind));
        }
    }
}
