//! ECS Systems module
//!
//! One system per pipeline stage. [`build`] maps a [`SystemId`] to its
//! implementation so pipelines can be assembled from id lists.

pub mod boundary;
pub mod collision_delay;
pub mod control;
pub mod damage;
pub mod fire;
pub mod fragmentation;
pub mod friction;
pub mod hit;
pub mod input;
pub mod lifetime;
pub mod movement;
pub mod overlap;
pub mod removal;
pub mod spawner;
pub mod vfx;
pub mod wrap;

pub use boundary::BoundarySystem;
pub use collision_delay::CollisionDelaySystem;
pub use control::PlayerControlSystem;
pub use damage::DamageSystem;
pub use fire::FireSystem;
pub use fragmentation::FragmentationSystem;
pub use friction::FrictionSystem;
pub use hit::HitSystem;
pub use input::InputSystem;
pub use lifetime::LifetimeSystem;
pub use movement::MovementSystem;
pub use overlap::OverlapSystem;
pub use removal::RemovalSystem;
pub use spawner::SpawnerSystem;
pub use vfx::VfxSystem;
pub use wrap::WrapSystem;

use super::{System, SystemId};

/// The built-in implementation of `id`
pub fn build(id: SystemId) -> Box<dyn System> {
    match id {
        SystemId::Input => Box::new(InputSystem),
        SystemId::PlayerControl => Box::new(PlayerControlSystem),
        SystemId::Spawner => Box::new(SpawnerSystem),
        SystemId::Friction => Box::new(FrictionSystem),
        SystemId::Movement => Box::new(MovementSystem),
        SystemId::Fire => Box::new(FireSystem),
        SystemId::CollisionDelay => Box::new(CollisionDelaySystem),
        SystemId::Hit => Box::new(HitSystem),
        SystemId::Damage => Box::new(DamageSystem),
        SystemId::Fragmentation => Box::new(FragmentationSystem),
        SystemId::Vfx => Box::new(VfxSystem),
        SystemId::Removal => Box::new(RemovalSystem),
        SystemId::Boundary => Box::new(BoundarySystem),
        SystemId::Lifetime => Box::new(LifetimeSystem),
        SystemId::Overlap => Box::new(OverlapSystem),
        SystemId::Wrap => Box::new(WrapSystem),
    }
}
