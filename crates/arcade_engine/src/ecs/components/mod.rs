//! ECS Components module
//!
//! The complete, fixed component registry. Adding a component means adding a
//! bit to [`ComponentSet`](crate::ecs::ComponentSet) and a line below.

pub mod collision;
pub mod combat;
pub mod control;
pub mod lifecycle;
pub mod lifetime;
pub mod movement;
pub mod vfx;

pub use collision::{Collision, CollisionDelay};
pub use combat::{Damage, Health, Hiter, Weapon};
pub use control::Input;
pub use lifecycle::{Asteroid, Border, BorderSide, Bullet, Particle, Player, RemoveMark, Renderable};
pub use lifetime::Lifetime;
pub use movement::{Friction, Impulse, Mass, Position, Rotation, Velocity};
pub use vfx::{Fade, Grow};

use crate::ecs::component::component_registry;

component_registry! {
    Position => position: POSITION,
    Velocity => velocity: VELOCITY,
    Rotation => rotation: ROTATION,
    Input => input: INPUT,
    Collision => collision: COLLISION,
    Health => health: HEALTH,
    Mass => mass: MASS,
    Friction => friction: FRICTION,
    Hiter => hiter: HITER,
    Damage => damage: DAMAGE,
    Impulse => impulse: IMPULSE,
    Lifetime => lifetime: LIFETIME,
    CollisionDelay => collision_delay: COLLISION_DELAY,
    RemoveMark => remove_mark: REMOVE_MARK,
    Player => player: PLAYER,
    Asteroid => asteroid: ASTEROID,
    Bullet => bullet: BULLET,
    Border => border: BORDER,
    Particle => particle: PARTICLE,
    Renderable => renderable: RENDERABLE,
    Weapon => weapon: WEAPON,
    Fade => fade: FADE,
    Grow => grow: GROW,
}
