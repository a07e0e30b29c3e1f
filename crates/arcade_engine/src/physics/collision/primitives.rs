//! Primitive collision shapes and intersection tests
//!
//! Circles for dynamic entities, axis-aligned rects for static geometry.
//! Degenerate input (coincident centres, zero sizes) never fails: it resolves
//! to a defined fallback normal instead.

use crate::foundation::math::{constants::EPSILON, utils, Vec2};

/// Fallback contact normal when two centres coincide
pub const FALLBACK_NORMAL: Vec2 = Vec2::new(1.0, 0.0);

/// A circle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Centre
    pub center: Vec2,
    /// Radius
    pub radius: f32,
}

impl Circle {
    /// Create a circle
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rect in world space, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Create a rect
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Whether `point` lies inside or on the rect
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.x
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.y
    }
}

/// Circle/circle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleContact {
    /// Centre distance
    pub distance: f32,
    /// Unit vector from `b`'s centre towards `a`'s centre
    pub normal: Vec2,
}

/// Test two circles for overlap (strictly closer than the radius sum)
pub fn circle_overlap(a: &Circle, b: &Circle) -> Option<CircleContact> {
    let delta = a.center - b.center;
    let distance = delta.norm();
    if distance >= a.radius + b.radius {
        return None;
    }
    let normal = if distance > EPSILON {
        delta / distance
    } else {
        FALLBACK_NORMAL
    };
    Some(CircleContact { distance, normal })
}

/// Circle/rect contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectContact {
    /// Unit vector pointing out of the rect towards the circle
    pub normal: Vec2,
    /// How far the circle must move along `normal` to stop overlapping
    pub penetration: f32,
}

/// Test a circle against a rect
///
/// When the centre is outside the rect the contact normal runs from the
/// closest point on the rect to the centre. When the centre is inside, the
/// circle is pushed out through the nearest edge.
pub fn circle_rect_contact(circle: &Circle, rect: &Rect) -> Option<RectContact> {
    let closest = utils::closest_point_on_rect(circle.center, rect.origin, rect.size);
    let delta = circle.center - closest;
    let distance_sq = delta.norm_squared();

    if distance_sq >= circle.radius * circle.radius {
        return None;
    }

    let distance = distance_sq.sqrt();
    if distance > EPSILON {
        return Some(RectContact {
            normal: delta / distance,
            penetration: circle.radius - distance,
        });
    }

    // Centre inside (or on the boundary of) the rect: leave through the
    // nearest edge.
    let to_left = circle.center.x - rect.origin.x;
    let to_right = rect.origin.x + rect.size.x - circle.center.x;
    let to_top = circle.center.y - rect.origin.y;
    let to_bottom = rect.origin.y + rect.size.y - circle.center.y;

    let candidates = [
        (to_left, Vec2::new(-1.0, 0.0)),
        (to_right, Vec2::new(1.0, 0.0)),
        (to_top, Vec2::new(0.0, -1.0)),
        (to_bottom, Vec2::new(0.0, 1.0)),
    ];
    let (edge_distance, normal) = candidates
        .into_iter()
        .fold((f32::INFINITY, FALLBACK_NORMAL), |best, candidate| {
            if candidate.0 < best.0 {
                candidate
            } else {
                best
            }
        });

    Some(RectContact {
        normal,
        penetration: edge_distance.max(0.0) + circle.radius,
    })
}
