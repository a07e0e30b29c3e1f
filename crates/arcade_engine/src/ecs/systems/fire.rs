//! Fire control: per-player weapon cooldown gated on the fire input

use log::warn;

use crate::ecs::components::{Input, Position, Rotation, Weapon};
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};
use crate::foundation::time::timer_expired;
use crate::prefabs;

const SHOOTERS: Query = Query::with(
    ComponentSet::PLAYER
        .union(ComponentSet::WEAPON)
        .union(ComponentSet::POSITION)
        .union(ComponentSet::ROTATION),
);

/// Spawns bullets for players holding fire with a ready weapon
#[derive(Debug, Default)]
pub struct FireSystem;

impl System for FireSystem {
    fn id(&self) -> SystemId {
        SystemId::Fire
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let seconds = ctx.seconds();
        let mut fired = 0;

        for entity in world.run_query(&SHOOTERS) {
            let Some(mut weapon) = world.read::<Weapon>(entity) else {
                continue;
            };
            weapon.cooldown = (weapon.cooldown - seconds).max(0.0);

            let firing = world.read::<Input>(entity).is_some_and(|input| input.fire);
            if firing && timer_expired(weapon.cooldown) {
                let origin = world.read::<Position>(entity).unwrap_or_default();
                let heading = world.read::<Rotation>(entity).unwrap_or_default();
                match prefabs::spawn_bullet(world, &ctx.config.bullet, origin.0, heading.angle) {
                    Ok(_) => {
                        weapon.cooldown = weapon.fire_interval;
                        fired += 1;
                    }
                    Err(err) => warn!("bullet spawn skipped: {}", err),
                }
            }
            world.add(entity, weapon)?;
        }
        Ok(fired)
    }
}
