//! Removal: the single flush point of the deferred-removal protocol

use crate::ecs::{EcsError, System, SystemId, TickContext, World};

/// Deallocates every entity marked for removal
#[derive(Debug, Default)]
pub struct RemovalSystem;

impl System for RemovalSystem {
    fn id(&self) -> SystemId {
        SystemId::Removal
    }

    fn run(&mut self, world: &mut World, _ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        Ok(world.flush_removals().len())
    }
}
