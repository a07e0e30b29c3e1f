//! Render snapshot for the presentation layer
//!
//! The core computes every visual value (alpha, scale, shape); a renderer
//! only reads the snapshot and never touches the world.

use crate::ecs::components::{Collision, CollisionDelay, Fade, Grow, Position, Rotation};
use crate::ecs::{ComponentSet, Entity, Query, World};
use crate::foundation::math::Vec2;

/// Alpha of an entity inside its collision-delay window
pub const DELAYED_ALPHA: f32 = 0.5;

const RENDERABLE: Query = Query::with(ComponentSet::RENDERABLE.union(ComponentSet::POSITION));

/// What an entity is, for picking a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    /// Player ship
    Ship,
    /// Asteroid
    Asteroid,
    /// Bullet
    Bullet,
    /// Arena border
    Border,
    /// Particle or explosion
    Particle,
    /// Anything else
    Other,
}

impl RenderKind {
    fn of(components: ComponentSet) -> Self {
        if components.contains(ComponentSet::PLAYER) {
            Self::Ship
        } else if components.contains(ComponentSet::ASTEROID) {
            Self::Asteroid
        } else if components.contains(ComponentSet::BULLET) {
            Self::Bullet
        } else if components.contains(ComponentSet::BORDER) {
            Self::Border
        } else if components.contains(ComponentSet::PARTICLE) {
            Self::Particle
        } else {
            Self::Other
        }
    }
}

/// Drawable extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Circle centred on the position
    Circle {
        /// Radius
        radius: f32,
    },
    /// Rect anchored at its top-left corner
    Rect {
        /// Size
        size: Vec2,
    },
    /// No collider; the renderer picks a size
    Point,
}

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    /// Entity handle, stable until a `Destroyed` event names it
    pub entity: Entity,
    /// Category
    pub kind: RenderKind,
    /// Position
    pub position: Vec2,
    /// Heading, if the entity has one
    pub rotation: Option<f32>,
    /// Extent
    pub shape: Shape,
    /// Opacity in 0..=1
    pub alpha: f32,
    /// Scale factor
    pub scale: f32,
}

/// Opacity of `entity`: its fade ramp, halved while under a collision delay
pub fn visual_alpha(world: &World, entity: Entity) -> f32 {
    let base = world.read::<Fade>(entity).map_or(1.0, |fade| fade.alpha());
    if world.has::<CollisionDelay>(entity) {
        base * DELAYED_ALPHA
    } else {
        base
    }
}

/// Scale of `entity` from its grow ramp
pub fn visual_scale(world: &World, entity: Entity) -> f32 {
    world.read::<Grow>(entity).map_or(1.0, |grow| grow.scale())
}

fn shape(collision: Option<Collision>) -> Shape {
    match collision {
        Some(collision) if collision.is_rect() => Shape::Rect {
            size: Vec2::new(collision.rect_w, collision.rect_h),
        },
        Some(collision) => Shape::Circle {
            radius: collision.radius,
        },
        None => Shape::Point,
    }
}

/// Snapshot every renderable entity, in ascending handle order
pub fn snapshot(world: &World) -> Vec<RenderItem> {
    world
        .run_query(&RENDERABLE)
        .into_iter()
        .filter_map(|entity| {
            let components = world.components(entity).ok()?;
            let position = world.read::<Position>(entity)?;
            Some(RenderItem {
                entity,
                kind: RenderKind::of(components),
                position: position.0,
                rotation: world.read::<Rotation>(entity).map(|rotation| rotation.angle),
                shape: shape(world.read::<Collision>(entity)),
                alpha: visual_alpha(world, entity),
                scale: visual_scale(world, entity),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::prefabs::{self, AsteroidSpawn};
    use approx::assert_relative_eq;

    #[test]
    fn test_delayed_asteroid_is_translucent() {
        let config = SimConfig::default();
        let mut world = World::new(8);
        let spawn = AsteroidSpawn {
            position: Vec2::new(10.0, 20.0),
            velocity: Vec2::zeros(),
            radius: 15.0,
            collision_delay: 0.5,
            rotation: 1.0,
        };
        let e = prefabs::spawn_asteroid(&mut world, &config.asteroid, &spawn).unwrap();

        let items = snapshot(&world);
        assert_eq!(items.len(), 1);
        let item = items[0];
        assert_eq!(item.entity, e);
        assert_eq!(item.kind, RenderKind::Asteroid);
        assert_eq!(item.shape, Shape::Circle { radius: 15.0 });
        assert_eq!(item.rotation, Some(1.0));
        assert_relative_eq!(item.alpha, DELAYED_ALPHA);

        world.remove::<CollisionDelay>(e).unwrap();
        assert_relative_eq!(visual_alpha(&world, e), 1.0);
    }

    #[test]
    fn test_explosion_scale_and_fade() {
        let config = SimConfig::default();
        let mut world = World::new(8);
        let e = prefabs::spawn_explosion(&mut world, &config.vfx, Vec2::zeros()).unwrap();
        assert_relative_eq!(visual_scale(&world, e), config.vfx.explosion_min_scale);
        assert_relative_eq!(visual_alpha(&world, e), 0.8);

        let items = snapshot(&world);
        assert_eq!(items[0].kind, RenderKind::Particle);
        assert_eq!(items[0].shape, Shape::Point);
    }

    #[test]
    fn test_borders_are_rects() {
        let config = SimConfig::default();
        let mut world = World::new(8);
        prefabs::spawn_borders(&mut world, &config.world).unwrap();
        let items = snapshot(&world);
        assert_eq!(items.len(), 4);
        assert!(items
            .iter()
            .all(|item| item.kind == RenderKind::Border && matches!(item.shape, Shape::Rect { .. })));
    }
}
