//! Symmetric overlap for the classic pipeline: any eligible pair of
//! overlapping circles is marked for removal on both sides.

use log::trace;

use crate::ecs::components::{Collision, Position};
use crate::ecs::{ComponentSet, EcsError, Entity, System, SystemId, TickContext, World};
use crate::physics::collision::{circle_overlap, Circle};
use crate::physics::collision_eligible;

/// Destroys both members of every overlapping eligible pair
#[derive(Debug, Default)]
pub struct OverlapSystem;

impl System for OverlapSystem {
    fn id(&self) -> SystemId {
        SystemId::Overlap
    }

    fn run(&mut self, world: &mut World, _ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let bodies: Vec<(Entity, Circle, Collision)> = world
            .query(
                ComponentSet::POSITION | ComponentSet::COLLISION,
                ComponentSet::COLLISION_DELAY | ComponentSet::REMOVE_MARK,
            )?
            .into_iter()
            .filter_map(|entity| {
                let collision = world.read::<Collision>(entity)?;
                let position = world.read::<Position>(entity)?;
                (!collision.is_rect())
                    .then(|| (entity, Circle::new(position.0, collision.radius), collision))
            })
            .collect();

        for (i, (a, circle_a, collision_a)) in bodies.iter().enumerate() {
            for (b, circle_b, collision_b) in &bodies[i + 1..] {
                if !collision_eligible(
                    collision_a.group,
                    collision_a.mask,
                    collision_b.group,
                    collision_b.mask,
                ) {
                    continue;
                }
                if circle_overlap(circle_a, circle_b).is_some() {
                    trace!("{} and {} overlap", a, b);
                    world.destroy(*a)?;
                    world.destroy(*b)?;
                }
            }
        }
        Ok(bodies.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::ecs::components::RemoveMark;
    use crate::physics::{masks, CollisionGroups};
    use crate::simulation::SimulationState;

    fn body(world: &mut World, x: f32, group: CollisionGroups, mask: CollisionGroups) -> Entity {
        let e = world.create_entity().unwrap();
        world.add(e, Position::new(x, 0.0)).unwrap();
        world.add(e, Collision::circle(5.0, group, mask)).unwrap();
        e
    }

    #[test]
    fn test_eligible_overlap_marks_both() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config);
        let mut world = World::new(8);
        let ship = body(&mut world, 0.0, CollisionGroups::PLAYER, masks::PLAYER);
        let rock = body(&mut world, 4.0, CollisionGroups::ASTEROID, masks::ASTEROID);
        let bullet = body(&mut world, -6.0, CollisionGroups::BULLET, masks::BULLET);

        let mut ctx = TickContext {
            delta_time: 1.0,
            config: &config,
            state: &mut state,
        };
        OverlapSystem.run(&mut world, &mut ctx).unwrap();

        assert!(world.has::<RemoveMark>(ship));
        assert!(world.has::<RemoveMark>(rock));
        // Bullet overlaps only the ship, whose groups never interact with it
        assert!(!world.has::<RemoveMark>(bullet));
    }
}
