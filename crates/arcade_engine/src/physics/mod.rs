//! Physics module for collision detection and response
//!
//! Group/mask filtering plus circle/circle and circle/rect tests with simple
//! arcade response. All pairwise work is brute force.

pub mod collision;
pub mod collision_layers;

pub use collision::{Circle, Rect};
pub use collision_layers::{can_hit, collision_eligible, masks, CollisionGroups};
