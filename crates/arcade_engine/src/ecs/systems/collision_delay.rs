//! Collision-delay countdown; an entity becomes collidable once its delay
//! component is gone.

use crate::ecs::components::CollisionDelay;
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};

const DELAYED: Query = Query::with(ComponentSet::COLLISION_DELAY);

/// Counts down immunity windows and removes them when they close
#[derive(Debug, Default)]
pub struct CollisionDelaySystem;

impl System for CollisionDelaySystem {
    fn id(&self) -> SystemId {
        SystemId::CollisionDelay
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let seconds = ctx.seconds();
        let delayed = world.run_query(&DELAYED);
        for &entity in &delayed {
            let expired = match world.get_mut::<CollisionDelay>(entity)? {
                Some(delay) => delay.tick(seconds),
                None => false,
            };
            if expired {
                world.remove::<CollisionDelay>(entity)?;
            }
        }
        Ok(delayed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::simulation::SimulationState;

    #[test]
    fn test_delay_removed_after_its_duration() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config);
        let mut world = World::new(2);
        let e = world.create_entity().unwrap();
        world.add(e, CollisionDelay::new(0.5)).unwrap();

        for _ in 0..29 {
            let mut ctx = TickContext {
                delta_time: 1.0,
                config: &config,
                state: &mut state,
            };
            CollisionDelaySystem.run(&mut world, &mut ctx).unwrap();
        }
        assert!(world.has::<CollisionDelay>(e));

        let mut ctx = TickContext {
            delta_time: 1.0,
            config: &config,
            state: &mut state,
        };
        CollisionDelaySystem.run(&mut world, &mut ctx).unwrap();
        assert!(!world.has::<CollisionDelay>(e));
    }
}
