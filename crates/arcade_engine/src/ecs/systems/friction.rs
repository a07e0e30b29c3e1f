//! Friction: per-tick velocity decay

use crate::ecs::components::{Friction, Velocity};
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};

const DAMPED: Query = Query::with(ComponentSet::VELOCITY.union(ComponentSet::FRICTION));

/// Multiplies velocity by the entity's friction once per tick
#[derive(Debug, Default)]
pub struct FrictionSystem;

impl System for FrictionSystem {
    fn id(&self) -> SystemId {
        SystemId::Friction
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let entities = world.run_query(&DAMPED);
        for &entity in &entities {
            let friction = world.read::<Friction>(entity).unwrap_or_default();
            if let Some(velocity) = world.get_mut::<Velocity>(entity)? {
                **velocity *= friction.value.powf(ctx.delta_time);
            }
        }
        Ok(entities.len())
    }
}
