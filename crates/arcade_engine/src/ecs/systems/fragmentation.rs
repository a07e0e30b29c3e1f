//! Fragmentation: dying asteroids above the minimum radius split
//!
//! Children spawn at the parent's centre with `radius * scale`, the parent's
//! velocity plus a random heading at a weighted-random speed tier, and a
//! short collision delay so siblings do not hit each other on the spot.
//! Radius shrinks geometrically, so splitting always terminates.

use log::{debug, warn};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::config::FragmentationConfig;
use crate::ecs::components::{Collision, Position, Velocity};
use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};
use crate::foundation::math::{constants::TAU, utils};
use crate::prefabs::{self, AsteroidSpawn};

const DYING_ASTEROIDS: Query = Query::with(
    ComponentSet::REMOVE_MARK
        .union(ComponentSet::ASTEROID)
        .union(ComponentSet::COLLISION)
        .union(ComponentSet::POSITION)
        .union(ComponentSet::VELOCITY),
);

/// Speed used when the tier table is unusable
const FALLBACK_SPEED: f32 = 1.0;

/// Splits dying asteroids into smaller ones
#[derive(Debug, Default)]
pub struct FragmentationSystem;

fn speed_table(config: &FragmentationConfig) -> Option<WeightedIndex<f32>> {
    if config.speed_tiers.len() != config.speed_weights.len() {
        warn!(
            "fragmentation has {} speed tiers but {} weights",
            config.speed_tiers.len(),
            config.speed_weights.len()
        );
        return None;
    }
    match WeightedIndex::new(&config.speed_weights) {
        Ok(table) => Some(table),
        Err(err) => {
            warn!("invalid fragmentation speed weights: {}", err);
            None
        }
    }
}

impl System for FragmentationSystem {
    fn id(&self) -> SystemId {
        SystemId::Fragmentation
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let config = &ctx.config.fragmentation;
        let dying = world.run_query(&DYING_ASTEROIDS);
        if dying.is_empty() {
            return Ok(0);
        }
        let speeds = speed_table(config);
        let (fewest, most) = (
            config.min_children.min(config.max_children),
            config.min_children.max(config.max_children),
        );

        for &parent in &dying {
            let Some(collision) = world.read::<Collision>(parent) else {
                continue;
            };
            if collision.radius <= config.min_radius {
                continue;
            }
            let position = world.read::<Position>(parent).unwrap_or_default();
            let velocity = world.read::<Velocity>(parent).unwrap_or_default();
            let rng = &mut ctx.state.rng;

            let children = rng.gen_range(fewest..=most);
            for _ in 0..children {
                let speed = speeds
                    .as_ref()
                    .and_then(|table| config.speed_tiers.get(table.sample(rng)).copied())
                    .unwrap_or(FALLBACK_SPEED);
                let heading = rng.gen::<f32>() * TAU;
                let spawn = AsteroidSpawn {
                    position: position.0,
                    velocity: velocity.0 + utils::direction(heading) * speed,
                    radius: collision.radius * config.scale,
                    collision_delay: config.child_collision_delay,
                    rotation: rng.gen::<f32>() * TAU,
                };
                if let Err(err) = prefabs::spawn_asteroid(world, &ctx.config.asteroid, &spawn) {
                    warn!("fragment spawn skipped: {}", err);
                    break;
                }
            }
            debug!("asteroid {} split into {}", parent, children);
        }
        Ok(dying.len())
    }
}
