//! Kinematic components: where an entity is, how it moves, how it resists
//! being moved.

use std::ops::{Deref, DerefMut};

use crate::foundation::math::Vec2;

/// Generates a 2D vector newtype that derefs to [`Vec2`], so `.x`/`.y` and
/// all vector math are available directly on the component.
macro_rules! vector_component {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name(pub Vec2);

        impl $name {
            /// Create from components
            pub fn new(x: f32, y: f32) -> Self {
                Self(Vec2::new(x, y))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Vec2::zeros())
            }
        }

        impl Deref for $name {
            type Target = Vec2;

            fn deref(&self) -> &Vec2 {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Vec2 {
                &mut self.0
            }
        }
    };
}

vector_component!(
    /// World-space location. For rect colliders this is the top-left corner.
    Position
);

vector_component!(
    /// Linear velocity in units per tick
    Velocity
);

vector_component!(
    /// Accumulated instantaneous force, consumed by the next integration step
    Impulse
);

/// Heading in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// Angle in radians, 0 pointing along +x
    pub angle: f32,
}

impl Rotation {
    /// Create a rotation
    pub const fn new(angle: f32) -> Self {
        Self { angle }
    }
}

/// Impulse weighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    /// Mass value; higher means more inertia
    pub value: f32,
}

impl Mass {
    /// Create a mass component
    pub const fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Default for Mass {
    fn default() -> Self {
        Self { value: 1.0 }
    }
}

/// Per-tick velocity decay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Friction {
    /// Multiplier in 0..=1 applied to velocity each tick (1 = no friction)
    pub value: f32,
}

impl Friction {
    /// Create a friction component, clamping into 0..=1
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }
}

impl Default for Friction {
    fn default() -> Self {
        Self { value: 1.0 }
    }
}
