//! Collision components

use crate::foundation::time::timer_expired;
use crate::physics::CollisionGroups;

/// Circle or axis-aligned rect collider plus its filter bits
///
/// A collider with non-zero `rect_w`/`rect_h` is a rect anchored at the
/// entity's position (top-left corner); otherwise it is a circle of `radius`
/// centred on the position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Collision {
    /// Circle radius
    pub radius: f32,
    /// Rect width
    pub rect_w: f32,
    /// Rect height
    pub rect_h: f32,
    /// Categories this entity belongs to
    pub group: CollisionGroups,
    /// Categories this entity interacts with
    pub mask: CollisionGroups,
}

impl Collision {
    /// Circle collider
    pub const fn circle(radius: f32, group: CollisionGroups, mask: CollisionGroups) -> Self {
        Self {
            radius,
            rect_w: 0.0,
            rect_h: 0.0,
            group,
            mask,
        }
    }

    /// Rect collider
    pub const fn rect(width: f32, height: f32, group: CollisionGroups, mask: CollisionGroups) -> Self {
        Self {
            radius: 0.0,
            rect_w: width,
            rect_h: height,
            group,
            mask,
        }
    }

    /// Whether this collider is a rect
    pub fn is_rect(&self) -> bool {
        self.rect_w > 0.0 && self.rect_h > 0.0
    }
}

/// Temporary immunity from hit and boundary checks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionDelay {
    /// Seconds until collision is enabled
    pub time_left: f32,
}

impl CollisionDelay {
    /// Create a delay of `seconds`
    pub const fn new(seconds: f32) -> Self {
        Self { time_left: seconds }
    }

    /// Count down by `seconds`, returning whether the window has closed
    pub fn tick(&mut self, seconds: f32) -> bool {
        self.time_left -= seconds;
        timer_expired(self.time_left)
    }
}
