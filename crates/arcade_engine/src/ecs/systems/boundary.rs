//! Boundary resolution: dynamic circles against static rects
//!
//! Static rects are colliders with a rect size and no `Velocity`; their
//! position is the top-left corner. Dynamic circles under a collision delay
//! are skipped. Eligibility is the symmetric group/mask rule. Each contact
//! pushes the circle out by its penetration and reflects incoming velocity
//! with speed-dependent restitution.

use log::trace;

use crate::ecs::components::{Collision, Position, Velocity};
use crate::ecs::{ComponentSet, EcsError, Entity, System, SystemId, TickContext, World};
use crate::foundation::math::Vec2;
use crate::physics::collision::{circle_rect_contact, resolve_boundary, Circle, Rect};
use crate::physics::collision_eligible;

/// Keeps moving circles outside static rects
#[derive(Debug, Default)]
pub struct BoundarySystem;

fn static_rects(world: &World) -> Result<Vec<(Rect, Collision)>, EcsError> {
    let rects = world
        .query(
            ComponentSet::POSITION | ComponentSet::COLLISION,
            ComponentSet::VELOCITY,
        )?
        .into_iter()
        .filter_map(|entity| {
            let collision = world.read::<Collision>(entity)?;
            let position = world.read::<Position>(entity)?;
            collision.is_rect().then(|| {
                (
                    Rect::new(position.0, Vec2::new(collision.rect_w, collision.rect_h)),
                    collision,
                )
            })
        })
        .collect();
    Ok(rects)
}

fn resolve(world: &mut World, entity: Entity, rects: &[(Rect, Collision)]) -> Result<bool, EcsError> {
    let (Some(collision), Some(mut position), Some(mut velocity)) = (
        world.read::<Collision>(entity),
        world.read::<Position>(entity),
        world.read::<Velocity>(entity),
    ) else {
        return Ok(false);
    };
    if collision.is_rect() {
        return Ok(false);
    }

    let mut touched = false;
    for (rect, wall) in rects {
        if !collision_eligible(collision.group, collision.mask, wall.group, wall.mask) {
            continue;
        }
        let circle = Circle::new(position.0, collision.radius);
        let Some(contact) = circle_rect_contact(&circle, rect) else {
            continue;
        };
        let (corrected, reflected) = resolve_boundary(position.0, velocity.0, &contact);
        trace!("{} pushed out of wall by {}", entity, contact.penetration);
        position.0 = corrected;
        velocity.0 = reflected;
        touched = true;
    }

    if touched {
        world.add(entity, position)?;
        world.add(entity, velocity)?;
    }
    Ok(touched)
}

impl System for BoundarySystem {
    fn id(&self) -> SystemId {
        SystemId::Boundary
    }

    fn run(&mut self, world: &mut World, _ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        let rects = static_rects(world)?;
        if rects.is_empty() {
            return Ok(0);
        }
        let dynamic = world.query(
            ComponentSet::POSITION | ComponentSet::COLLISION | ComponentSet::VELOCITY,
            ComponentSet::COLLISION_DELAY | ComponentSet::REMOVE_MARK,
        )?;
        for &entity in &dynamic {
            resolve(world, entity, &rects)?;
        }
        Ok(dynamic.len())
    }
}
