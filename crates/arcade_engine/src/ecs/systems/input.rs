//! Input system: copies the external input snapshot into player `Input`

use crate::ecs::components::Input;
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};

const PLAYERS: Query = Query::with(ComponentSet::PLAYER.union(ComponentSet::INPUT));

/// Writes each player's intent for this tick
#[derive(Debug, Default)]
pub struct InputSystem;

impl System for InputSystem {
    fn id(&self) -> SystemId {
        SystemId::Input
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let players = world.run_query(&PLAYERS);
        for &entity in &players {
            let input: Input = ctx.state.input.for_entity(entity);
            world.add(entity, input)?;
        }
        Ok(players.len())
    }
}
