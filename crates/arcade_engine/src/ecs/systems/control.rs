//! Player control: rotation, thrust, drag and speed clamp
//!
//! Rates are per tick and scale with `delta_time`. Drag is the ship's own
//! per-tick multiplier; players carry no `Friction` component. `down` has no
//! effect.

use crate::ecs::components::{Input, Rotation, Velocity};
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};
use crate::foundation::math::utils;

const PLAYERS: Query = Query::with(
    ComponentSet::PLAYER
        .union(ComponentSet::INPUT)
        .union(ComponentSet::ROTATION)
        .union(ComponentSet::VELOCITY),
);

/// Applies each player's input to its heading and velocity
#[derive(Debug, Default)]
pub struct PlayerControlSystem;

impl System for PlayerControlSystem {
    fn id(&self) -> SystemId {
        SystemId::PlayerControl
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let ship = &ctx.config.ship;
        let dt = ctx.delta_time;
        let players = world.run_query(&PLAYERS);

        for &entity in &players {
            let input = world.read::<Input>(entity).unwrap_or_default();
            let mut rotation = world.read::<Rotation>(entity).unwrap_or_default();
            let mut velocity = world.read::<Velocity>(entity).unwrap_or_default();

            if input.left {
                rotation.angle -= ship.rotation_speed * dt;
            }
            if input.right {
                rotation.angle += ship.rotation_speed * dt;
            }
            if input.up {
                *velocity += utils::direction(rotation.angle) * ship.acceleration * dt;
            }
            *velocity *= ship.friction.powf(dt);
            velocity.0 = utils::clamp_length(velocity.0, ship.max_speed);

            world.add(entity, rotation)?;
            world.add(entity, velocity)?;
        }
        Ok(players.len())
    }
}
