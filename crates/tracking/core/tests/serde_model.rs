#![cfg(feature = "serde")]

use tracking_core::{
    BlockChangeFlag, BlockPos, BlockSnapshot, CaptureKind, ItemDropData, ItemStack, PhaseState,
    WorldId,
};

#[test]
fn captured_values_serialize_for_external_replay() {
    let snapshot = BlockSnapshot::new(WorldId::random(), BlockPos::new(1, 2, 3), "minecraft:sand");
    let json = serde_json::to_value(&snapshot).expect("serialize snapshot");

    assert_eq!(json["pos"], serde_json::json!({ "x": 1, "y": 2, "z": 3 }));
    assert_eq!(json["block"], "minecraft:sand");

    let restored: BlockSnapshot = serde_json::from_value(json).expect("deserialize snapshot");
    assert_eq!(restored, snapshot);
}

#[test]
fn drops_and_flags_survive_json() {
    let drop = ItemDropData::new(ItemStack::new("minecraft:gravel", 3), BlockPos::ORIGIN);
    let text = serde_json::to_string(&(drop.clone(), BlockChangeFlag::ALL)).expect("serialize");
    let (restored, flag): (ItemDropData, BlockChangeFlag) =
        serde_json::from_str(&text).expect("deserialize");

    assert_eq!(restored, drop);
    assert_eq!(flag, BlockChangeFlag::ALL);
}

#[test]
fn enums_use_variant_names() {
    assert_eq!(
        serde_json::to_string(&PhaseState::BlockBreak).expect("serialize"),
        "\"BlockBreak\""
    );
    assert_eq!(
        serde_json::to_string(&CaptureKind::Blocks).expect("serialize"),
        "\"Blocks\""
    );
}
