//! Math utilities and types
//!
//! Provides the 2D vector types used by the simulation plus the handful of
//! geometric helpers the collision code leans on.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Distances below this are treated as coincident
    pub const EPSILON: f32 = 1e-6;

    /// Full turn in radians
    pub const TAU: f32 = std::f32::consts::TAU;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Unit vector pointing along `angle` (radians)
    pub fn direction(angle: f32) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }

    /// Normalize `v`, falling back to `fallback` when `v` is (near) zero length
    pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
        let length = v.norm();
        if length > constants::EPSILON {
            v / length
        } else {
            fallback
        }
    }

    /// Clamp the length of `v` to `max_length`
    pub fn clamp_length(v: Vec2, max_length: f32) -> Vec2 {
        let length = v.norm();
        if length > max_length && length > constants::EPSILON {
            v * (max_length / length)
        } else {
            v
        }
    }

    /// Closest point to `point` on an axis-aligned rect given by its top-left
    /// corner and size
    pub fn closest_point_on_rect(point: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(origin.x, origin.x + size.x),
            point.y.clamp(origin.y, origin.y + size.y),
        )
    }
}
