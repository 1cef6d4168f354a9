use crate::context::{ContextPrinter, ContextState, Open, PhaseContext, PhasePayload};
use crate::model::World;

/// Payload of world-generation phases: the world being generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldGeneration {
    world: Option<World>,
}

impl WorldGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the world; every accepted representation ends up as the same
    /// canonical [`World`].
    pub fn set_world(&mut self, world: impl Into<World>) {
        self.world = Some(world.into());
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }
}

impl PhasePayload for WorldGeneration {
    fn print_custom(&self, printer: &mut ContextPrinter) {
        printer.add("World", &self.world);
    }
}

/// Context of a phase that runs while a world is generated.
///
/// ```
/// use tracking_core::{GenerationContext, ServerWorld, World};
///
/// let overworld = World::named("overworld");
/// let context = GenerationContext::generation()
///     .world(ServerWorld::new(0, overworld.clone()))
///     .add_entity_captures()
///     .complete();
///
/// assert_eq!(context.generated_world(), Some(&overworld));
/// assert!(context.dump().contains("World: Some(World"));
/// ```
pub type GenerationContext<S = Open> = PhaseContext<WorldGeneration, S>;

impl GenerationContext {
    /// Opens a generation context with no world bound yet.
    pub fn generation() -> Self {
        Self::with_payload(WorldGeneration::new())
    }

    /// Binds the world being generated. Accepts `World`, `&World`,
    /// `ServerWorld`, or `&ServerWorld`.
    pub fn world(mut self, world: impl Into<World>) -> Self {
        self.payload_mut().set_world(world);
        self
    }
}

impl<S: ContextState> GenerationContext<S> {
    pub fn generated_world(&self) -> Option<&World> {
        self.payload().world()
    }
}
