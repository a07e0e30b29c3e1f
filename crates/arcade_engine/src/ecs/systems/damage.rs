//! Damage application
//!
//! `Damage` is a one-tick event: every instance is removed here whether or
//! not the entity has `Health`. Health at or below zero is clamped to zero
//! and the entity is marked for removal.

use log::{debug, warn};

use crate::ecs::components::{Bullet, Damage, Health, Position};
use crate::ecs::{ComponentSet, EcsError, Entity, Query, System, SystemId, TickContext, World};
use crate::foundation::math::Vec2;
use crate::prefabs;

const DAMAGED: Query = Query::with(ComponentSet::DAMAGE);

/// Subtracts pending damage from health and marks the dead
#[derive(Debug, Default)]
pub struct DamageSystem;

impl DamageSystem {
    fn spawn_effects(
        world: &mut World,
        ctx: &mut TickContext<'_>,
        entity: Entity,
        damage: &Damage,
        died: bool,
    ) {
        let vfx = &ctx.config.vfx;
        // Bullets die on contact; the asteroid side already shows the hit
        if !vfx.enabled || world.has::<Bullet>(entity) {
            return;
        }
        let Some(position) = world.read::<Position>(entity) else {
            return;
        };
        let source = Vec2::new(damage.source_x, damage.source_y);

        if let Err(err) =
            prefabs::spawn_damage_particles(world, vfx, &mut ctx.state.rng, position.0, source)
        {
            debug!("damage particles truncated: {}", err);
        }
        if died {
            if let Err(err) = prefabs::spawn_explosion(world, vfx, position.0) {
                warn!("explosion spawn skipped: {}", err);
            }
        }
    }
}

impl System for DamageSystem {
    fn id(&self) -> SystemId {
        SystemId::Damage
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let damaged = world.run_query(&DAMAGED);
        for &entity in &damaged {
            let Some(damage) = world.remove::<Damage>(entity)? else {
                continue;
            };
            let Some(health) = world.get_mut::<Health>(entity)? else {
                continue;
            };

            let died = health.take_damage(damage.amount);
            if died {
                health.current = 0.0;
                debug!("entity {} destroyed by damage", entity);
                world.destroy(entity)?;
            }
            Self::spawn_effects(world, ctx, entity, &damage, died);
        }
        Ok(damaged.len())
    }
}
