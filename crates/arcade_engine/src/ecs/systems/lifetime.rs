//! Lifetime countdown; expired entities are marked for removal and flushed
//! on the next tick's removal pass. Until then movement and collision
//! systems skip them.

use log::trace;

use crate::ecs::components::Lifetime;
use crate::ecs::{ComponentSet, EcsError, System, SystemId, TickContext, World};

/// Counts lifetimes down and marks the expired
#[derive(Debug, Default)]
pub struct LifetimeSystem;

impl System for LifetimeSystem {
    fn id(&self) -> SystemId {
        SystemId::Lifetime
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let seconds = ctx.seconds();
        let living = world.query(ComponentSet::LIFETIME, ComponentSet::REMOVE_MARK)?;
        for &entity in &living {
            let expired = match world.get_mut::<Lifetime>(entity)? {
                Some(lifetime) => lifetime.tick(seconds),
                None => false,
            };
            if expired {
                trace!("lifetime of {} expired", entity);
                world.destroy(entity)?;
            }
        }
        Ok(living.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::ecs::components::RemoveMark;
    use crate::simulation::SimulationState;

    #[test]
    fn test_expired_entities_marked() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config);
        let mut world = World::new(4);
        let short = world.create_entity().unwrap();
        world.add(short, Lifetime::new(1.0 / 60.0)).unwrap();
        let long = world.create_entity().unwrap();
        world.add(long, Lifetime::new(2.0)).unwrap();

        let mut ctx = TickContext {
            delta_time: 1.0,
            config: &config,
            state: &mut state,
        };
        LifetimeSystem.run(&mut world, &mut ctx).unwrap();
        assert!(world.has::<RemoveMark>(short));
        assert!(!world.has::<RemoveMark>(long));
    }
}
