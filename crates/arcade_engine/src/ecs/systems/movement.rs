//! Movement: folds accumulated impulses into velocity, then integrates
//! position. Entities marked for removal stay where they are.

use crate::ecs::components::{Impulse, Mass, Position, Velocity};
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};
use crate::foundation::math::constants::EPSILON;

const PUSHED: Query = Query::with(ComponentSet::VELOCITY.union(ComponentSet::IMPULSE))
    .excluding(ComponentSet::REMOVE_MARK);
const MOVING: Query = Query::with(ComponentSet::POSITION.union(ComponentSet::VELOCITY))
    .excluding(ComponentSet::REMOVE_MARK);

/// Applies impulses and integrates velocity into position
#[derive(Debug, Default)]
pub struct MovementSystem;

impl System for MovementSystem {
    fn id(&self) -> SystemId {
        SystemId::Movement
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        for entity in world.run_query(&PUSHED) {
            let mass = world.read::<Mass>(entity).unwrap_or_default().value;
            let Some(impulse) = world.remove::<Impulse>(entity)? else {
                continue;
            };
            if let Some(velocity) = world.get_mut::<Velocity>(entity)? {
                let inverse_mass = if mass > EPSILON { 1.0 / mass } else { 1.0 };
                **velocity += impulse.0 * inverse_mass;
            }
        }

        let moving = world.run_query(&MOVING);
        for &entity in &moving {
            let velocity = world.read::<Velocity>(entity).unwrap_or_default();
            if let Some(position) = world.get_mut::<Position>(entity)? {
                **position += velocity.0 * ctx.delta_time;
            }
        }
        Ok(moving.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::simulation::SimulationState;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrates_position() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config);
        let mut world = World::new(2);
        let e = world.create_entity().unwrap();
        world.add(e, Position::new(0.0, 0.0)).unwrap();
        world.add(e, Velocity::new(2.0, -1.0)).unwrap();

        let mut ctx = TickContext {
            delta_time: 0.5,
            config: &config,
            state: &mut state,
        };
        MovementSystem.run(&mut world, &mut ctx).unwrap();
        assert_eq!(world.read::<Position>(e), Some(Position::new(1.0, -0.5)));
    }

    #[test]
    fn test_impulse_consumed_and_scaled_by_mass() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config);
        let mut world = World::new(2);
        let e = world.create_entity().unwrap();
        world.add(e, Position::new(0.0, 0.0)).unwrap();
        world.add(e, Velocity::new(0.0, 0.0)).unwrap();
        world.add(e, Mass::new(4.0)).unwrap();
        world.add(e, Impulse::new(8.0, 0.0)).unwrap();

        let mut ctx = TickContext {
            delta_time: 1.0,
            config: &config,
            state: &mut state,
        };
        MovementSystem.run(&mut world, &mut ctx).unwrap();
        assert_relative_eq!(world.read::<Velocity>(e).unwrap().x, 2.0);
        assert_relative_eq!(world.read::<Position>(e).unwrap().x, 2.0);
        assert!(!world.has::<Impulse>(e));
    }
}
