//! Directional hit detection (hiter/target model)
//!
//! Hiters carry `{Position, Collision, Hiter, Velocity, Mass}`; targets carry
//! `{Position, Collision, Velocity, Mass}`. Entities under a collision delay
//! or marked for removal are neither, and a target already holding `Damage` is skipped, including
//! damage attached earlier in this same pass. A hit requires
//! `group[target] & mask[hiter]` and strict circle overlap; it attaches
//! `Damage` to the target and pushes both bodies apart through `Impulse`.
//!
//! The pass is O(hiters x targets); counts above the configured budget are
//! logged, never rejected.

use log::{trace, warn};

use crate::ecs::components::{Collision, Damage, Hiter, Impulse, Mass, Position, Velocity};
use crate::ecs::{ComponentSet, EcsError, Entity, System, SystemId, TickContext, World};
use crate::foundation::math::Vec2;
use crate::physics::collision::{circle_overlap, hit_impulse, Circle};
use crate::physics::{can_hit, CollisionGroups};

const BODY: ComponentSet = ComponentSet::POSITION
    .union(ComponentSet::COLLISION)
    .union(ComponentSet::VELOCITY)
    .union(ComponentSet::MASS);

/// Neither hiter nor target: immune, or already on the way out
const INACTIVE: ComponentSet = ComponentSet::COLLISION_DELAY.union(ComponentSet::REMOVE_MARK);

/// Snapshot of one participant taken before any hit is applied
#[derive(Debug, Clone, Copy)]
struct Body {
    entity: Entity,
    circle: Circle,
    velocity: Vec2,
    mass: f32,
    group: CollisionGroups,
    mask: CollisionGroups,
    damage: f32,
}

impl Body {
    fn read(world: &World, entity: Entity) -> Option<Self> {
        let collision = world.read::<Collision>(entity)?;
        if collision.is_rect() {
            return None;
        }
        let position = world.read::<Position>(entity)?;
        Some(Self {
            entity,
            circle: Circle::new(position.0, collision.radius),
            velocity: world.read::<Velocity>(entity)?.0,
            mass: world.read::<Mass>(entity)?.value,
            group: collision.group,
            mask: collision.mask,
            damage: world.read::<Hiter>(entity).map_or(0.0, |hiter| hiter.value),
        })
    }
}

/// Detects hiter/target contacts and queues damage and impulses
#[derive(Debug, Default)]
pub struct HitSystem;

fn accumulate_impulse(world: &mut World, entity: Entity, impulse: Vec2) -> Result<(), EcsError> {
    let mut total = world.read::<Impulse>(entity).unwrap_or_default();
    *total += impulse;
    world.add(entity, total)
}

impl System for HitSystem {
    fn id(&self) -> SystemId {
        SystemId::Hit
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let hiters: Vec<Body> = world
            .query(BODY | ComponentSet::HITER, INACTIVE)?
            .into_iter()
            .filter_map(|entity| Body::read(world, entity))
            .collect();
        let targets: Vec<Body> = world
            .query(BODY, INACTIVE | ComponentSet::DAMAGE)?
            .into_iter()
            .filter_map(|entity| Body::read(world, entity))
            .collect();

        let pairs = hiters.len() * targets.len();
        ctx.state.hit_pairs = pairs;
        if pairs > ctx.config.diagnostics.pair_budget {
            warn!(
                "hit detection evaluating {} pairs ({} hiters x {} targets), budget {}",
                pairs,
                hiters.len(),
                targets.len(),
                ctx.config.diagnostics.pair_budget
            );
        }

        for hiter in &hiters {
            for target in &targets {
                if hiter.entity == target.entity || !can_hit(hiter.mask, target.group) {
                    continue;
                }
                if world.has::<Damage>(target.entity) {
                    continue;
                }
                let Some(contact) = circle_overlap(&hiter.circle, &target.circle) else {
                    continue;
                };

                trace!("{} hit {} at distance {}", hiter.entity, target.entity, contact.distance);
                world.add(
                    target.entity,
                    Damage {
                        amount: hiter.damage,
                        source_x: hiter.circle.center.x,
                        source_y: hiter.circle.center.y,
                    },
                )?;

                if let Some(impulse) = hit_impulse(
                    contact.normal,
                    hiter.velocity,
                    target.velocity,
                    hiter.mass,
                    target.mass,
                ) {
                    accumulate_impulse(world, target.entity, impulse.target)?;
                    accumulate_impulse(world, hiter.entity, impulse.hiter)?;
                }
            }
        }
        Ok(hiters.len() + targets.len())
    }
}
