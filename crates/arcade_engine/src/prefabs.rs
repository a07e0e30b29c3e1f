//! Entity factories
//!
//! Every spawnable entity kind is assembled here from its config section, so
//! systems never hand-build component sets. Factories return
//! `CapacityExceeded` untouched; callers decide whether a failed spawn is
//! skipped or fatal.

use rand::Rng;

use crate::config::{AsteroidConfig, BulletConfig, ShipConfig, VfxConfig, WorldConfig};
use crate::ecs::components::{
    Asteroid, Border, BorderSide, Bullet, Collision, CollisionDelay, Fade, Friction, Grow, Health,
    Hiter, Input, Lifetime, Mass, Particle, Player, Position, Renderable, Rotation, Velocity,
    Weapon,
};
use crate::ecs::{EcsError, Entity, World};
use crate::foundation::math::{constants::TAU, utils, Vec2};
use crate::physics::{masks, CollisionGroups};

/// Spawn the player ship at `position`, facing +x
pub fn spawn_ship(
    world: &mut World,
    ship: &ShipConfig,
    bullet: &BulletConfig,
    position: Vec2,
) -> Result<Entity, EcsError> {
    let entity = world.create_entity()?;
    world.add(entity, Position(position))?;
    world.add(entity, Velocity::default())?;
    world.add(entity, Rotation::new(0.0))?;
    world.add(entity, Input::IDLE)?;
    world.add(entity, Player)?;
    world.add(
        entity,
        Collision::circle(ship.radius, CollisionGroups::PLAYER, masks::PLAYER),
    )?;
    world.add(entity, Mass::new(ship.mass))?;
    world.add(entity, Health::new(ship.health))?;
    world.add(entity, Weapon::new(bullet.fire_interval))?;
    world.add(entity, Renderable)?;
    Ok(entity)
}

/// Parameters of one asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidSpawn {
    /// Centre
    pub position: Vec2,
    /// Initial velocity
    pub velocity: Vec2,
    /// Collider radius; health, mass and contact damage scale with it
    pub radius: f32,
    /// Seconds of immunity after spawning
    pub collision_delay: f32,
    /// Initial heading
    pub rotation: f32,
}

impl AsteroidSpawn {
    /// Random asteroid anywhere inside `bounds`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, asteroid: &AsteroidConfig, bounds: Vec2) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * bounds.x,
            rng.gen::<f32>() * bounds.y,
        );
        let speed = asteroid.min_speed + rng.gen::<f32>() * (asteroid.max_speed - asteroid.min_speed);
        let heading = rng.gen::<f32>() * TAU;
        let radius =
            asteroid.min_radius + rng.gen::<f32>() * (asteroid.max_radius - asteroid.min_radius);
        Self {
            position,
            velocity: utils::direction(heading) * speed,
            radius,
            collision_delay: asteroid.spawn_collision_delay,
            rotation: rng.gen::<f32>() * TAU,
        }
    }
}

/// Spawn an asteroid
pub fn spawn_asteroid(
    world: &mut World,
    asteroid: &AsteroidConfig,
    spawn: &AsteroidSpawn,
) -> Result<Entity, EcsError> {
    let entity = world.create_entity()?;
    world.add(entity, Position(spawn.position))?;
    world.add(entity, Velocity(spawn.velocity))?;
    world.add(entity, Rotation::new(spawn.rotation))?;
    world.add(entity, Asteroid)?;
    world.add(
        entity,
        Collision::circle(spawn.radius, CollisionGroups::ASTEROID, masks::ASTEROID),
    )?;
    world.add(
        entity,
        Health {
            current: spawn.radius * 2.0,
            max: spawn.radius * 10.0,
        },
    )?;
    world.add(entity, Hiter::new(spawn.radius / 10.0))?;
    world.add(entity, Mass::new(spawn.radius * 0.5))?;
    world.add(entity, Friction::new(asteroid.friction))?;
    if spawn.collision_delay > 0.0 {
        world.add(entity, CollisionDelay::new(spawn.collision_delay))?;
    }
    world.add(entity, Renderable)?;
    Ok(entity)
}

/// Spawn a bullet leaving `origin` along `angle`
pub fn spawn_bullet(
    world: &mut World,
    bullet: &BulletConfig,
    origin: Vec2,
    angle: f32,
) -> Result<Entity, EcsError> {
    let entity = world.create_entity()?;
    world.add(entity, Position(origin))?;
    world.add(entity, Velocity(utils::direction(angle) * bullet.speed))?;
    world.add(entity, Rotation::new(angle))?;
    world.add(entity, Bullet)?;
    world.add(entity, Lifetime::new(bullet.lifetime))?;
    world.add(
        entity,
        Collision::circle(bullet.radius, CollisionGroups::BULLET, masks::BULLET),
    )?;
    world.add(entity, Hiter::new(bullet.damage))?;
    world.add(entity, Mass::new(bullet.mass))?;
    world.add(entity, Health::new(bullet.health))?;
    world.add(entity, Renderable)?;
    Ok(entity)
}

/// Top-left corner and size of one arena border
pub fn border_rect(side: BorderSide, world: &WorldConfig) -> (Vec2, Vec2) {
    let (w, h, t) = (world.width, world.height, world.border_thickness);
    match side {
        BorderSide::Left => (Vec2::new(0.0, 0.0), Vec2::new(t, h)),
        BorderSide::Right => (Vec2::new(w - t, 0.0), Vec2::new(t, h)),
        BorderSide::Top => (Vec2::new(0.0, 0.0), Vec2::new(w, t)),
        BorderSide::Bottom => (Vec2::new(0.0, h - t), Vec2::new(w, t)),
    }
}

/// Spawn one static border
pub fn spawn_border(
    world: &mut World,
    side: BorderSide,
    bounds: &WorldConfig,
) -> Result<Entity, EcsError> {
    let (origin, size) = border_rect(side, bounds);
    let entity = world.create_entity()?;
    world.add(entity, Position(origin))?;
    world.add(
        entity,
        Collision::rect(size.x, size.y, CollisionGroups::STATIC, masks::STATIC),
    )?;
    world.add(entity, Border { side })?;
    world.add(entity, Renderable)?;
    Ok(entity)
}

/// Spawn all four borders
pub fn spawn_borders(world: &mut World, bounds: &WorldConfig) -> Result<Vec<Entity>, EcsError> {
    BorderSide::ALL
        .into_iter()
        .map(|side| spawn_border(world, side, bounds))
        .collect()
}

/// Spawn particles at the hiter's position flying back towards it
///
/// Returns the number of particles spawned.
pub fn spawn_damage_particles<R: Rng + ?Sized>(
    world: &mut World,
    vfx: &VfxConfig,
    rng: &mut R,
    hit_point: Vec2,
    hiter_point: Vec2,
) -> Result<usize, EcsError> {
    let direction = utils::normalize_or(hiter_point - hit_point, Vec2::new(1.0, 0.0));
    let mut spawned = 0;
    for _ in 0..vfx.damage_particles {
        let magnitude = vfx.particle_speed * (0.5 + rng.gen::<f32>() * 0.5);
        let offset = (rng.gen::<f32>() - 0.5) * 0.2;
        let velocity = Vec2::new(direction.x + offset, direction.y + offset) * magnitude;
        let lifetime = vfx.particle_lifetime * (0.4 + rng.gen::<f32>() * 0.2);

        let entity = world.create_entity()?;
        world.add(entity, Position(hiter_point))?;
        world.add(entity, Velocity(velocity))?;
        world.add(entity, Rotation::new(velocity.y.atan2(velocity.x)))?;
        world.add(entity, Lifetime::new(lifetime))?;
        world.add(entity, Fade::new(1.0, 0.0, lifetime))?;
        world.add(entity, Particle)?;
        world.add(entity, Renderable)?;
        spawned += 1;
    }
    Ok(spawned)
}

/// Spawn a stationary explosion that grows and fades out
pub fn spawn_explosion(
    world: &mut World,
    vfx: &VfxConfig,
    position: Vec2,
) -> Result<Entity, EcsError> {
    let entity = world.create_entity()?;
    world.add(entity, Position(position))?;
    world.add(entity, Velocity::default())?;
    world.add(entity, Lifetime::new(vfx.explosion_lifetime))?;
    world.add(
        entity,
        Grow::new(
            vfx.explosion_min_scale,
            vfx.explosion_max_scale,
            vfx.explosion_lifetime,
        ),
    )?;
    world.add(entity, Fade::new(0.8, 0.0, vfx.explosion_lifetime))?;
    world.add(entity, Particle)?;
    world.add(entity, Renderable)?;
    Ok(entity)
}
