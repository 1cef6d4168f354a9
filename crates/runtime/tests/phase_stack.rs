use tracking_core::{
    BlockPos, BlockSnapshot, Entity, ErrorSeverity, GenerationContext, NamedCause, PhaseContext,
    PhaseState, Player, TrackingConfig, TrackingError, World, WorldGeneration, WorldId,
};
use tracking_runtime::{PhaseTracker, TrackerConfig, TrackerError};

/// Nested phase scenario
///
/// 1. A player breaks a block; the block break phase captures block changes
/// 2. The break spawns an entity in a nested entity spawn phase
/// 3. Both phases complete innermost first and hand their captures back
#[test]
fn test_nested_phases_replay_their_own_captures() {
    let mut tracker = PhaseTracker::from_config(&TrackerConfig::default());
    let miner = Player::named("Miner");

    // ================================================================
    // PHASE 1: Block break
    // ================================================================
    let context = PhaseContext::start()
        .add(NamedCause::source(miner.clone()))
        .add_block_captures()
        .complete();
    tracker
        .switch_to_phase(PhaseState::BlockBreak, context)
        .expect("enter block break");

    let broken = BlockSnapshot::new(WorldId::random(), BlockPos::new(3, 12, 9), "minecraft:spawner");
    tracker
        .current_context_mut::<()>()
        .expect("block break context")
        .captured_block_supplier()
        .expect("block captures declared")
        .push(broken.clone());

    // ================================================================
    // PHASE 2: Nested entity spawn
    // ================================================================
    let context = PhaseContext::start()
        .add(NamedCause::source(broken.clone()))
        .add_entity_captures()
        .complete();
    tracker
        .switch_to_phase(PhaseState::EntitySpawn, context)
        .expect("enter entity spawn");
    assert_eq!(tracker.depth(), 2);
    assert_eq!(tracker.current_state(), Some(PhaseState::EntitySpawn));

    let silverfish = Entity::spawn("minecraft:silverfish");
    tracker
        .current_context_mut::<()>()
        .expect("entity spawn context")
        .captured_entity_supplier()
        .expect("entity captures declared")
        .push(silverfish.clone());

    // ================================================================
    // PHASE 3: Unwind
    // ================================================================
    let spawn = tracker
        .complete_phase::<()>(PhaseState::EntitySpawn)
        .expect("complete entity spawn");
    assert_eq!(spawn.captured_entities(), Ok(&[silverfish][..]));
    assert_eq!(spawn.source::<BlockSnapshot>(), Some(&broken));

    let block_break = tracker
        .complete_phase::<()>(PhaseState::BlockBreak)
        .expect("complete block break");
    assert_eq!(block_break.captured_blocks(), Ok(&[broken][..]));
    assert_eq!(block_break.source::<Player>(), Some(&miner));
    assert!(tracker.is_empty());
}

#[test]
fn completing_the_wrong_phase_is_rejected() {
    let mut tracker = PhaseTracker::default();
    tracker
        .switch_to_phase(PhaseState::BlockPlacement, PhaseContext::start().complete())
        .expect("enter");

    let error = tracker
        .complete_phase::<()>(PhaseState::BlockBreak)
        .expect_err("block break is not running");
    assert_eq!(
        error,
        TrackerError::PhaseMismatch {
            requested: PhaseState::BlockBreak,
            current: PhaseState::BlockPlacement,
        }
    );
    assert_eq!(error.error_code(), "phase_mismatch");
    assert_eq!(tracker.depth(), 1);
}

#[test]
fn empty_stack_reports_empty() {
    let mut tracker = PhaseTracker::default();

    assert_eq!(tracker.current_state(), None);
    assert!(matches!(
        tracker.current_context_mut::<()>(),
        Err(TrackerError::EmptyStack)
    ));
    assert_eq!(
        tracker
            .complete_phase::<()>(PhaseState::BlockBreak)
            .map(|_| ()),
        Err(TrackerError::EmptyStack)
    );
}

#[test]
fn wrong_payload_type_keeps_the_frame() {
    let mut tracker = PhaseTracker::default();
    let context = GenerationContext::generation()
        .world(World::named("overworld"))
        .complete();
    tracker
        .switch_to_phase(PhaseState::TerrainPopulation, context)
        .expect("enter");

    let error = tracker
        .complete_phase::<()>(PhaseState::TerrainPopulation)
        .map(|_| ())
        .expect_err("payload is WorldGeneration");
    assert_eq!(error.severity(), ErrorSeverity::Validation);
    assert!(tracker.current_context_mut::<()>().is_err());

    let context = tracker
        .complete_phase::<WorldGeneration>(PhaseState::TerrainPopulation)
        .expect("right payload");
    assert_eq!(
        context.generated_world().map(World::name),
        Some("overworld")
    );
}

#[test]
fn depth_limit_overflows() {
    let mut tracker = PhaseTracker::new(TrackingConfig::new().with_max_phase_depth(2));

    for _ in 0..2 {
        tracker
            .switch_to_phase(PhaseState::PlayerInteraction, PhaseContext::start().complete())
            .expect("within limit");
    }
    let error = tracker
        .switch_to_phase(PhaseState::PlayerInteraction, PhaseContext::start().complete())
        .expect_err("limit reached");

    assert_eq!(
        error,
        TrackerError::StackOverflow {
            state: PhaseState::PlayerInteraction,
            max_depth: 2,
        }
    );
    assert_eq!(error.severity(), ErrorSeverity::Fatal);
    assert_eq!(tracker.depth(), 2);
}
