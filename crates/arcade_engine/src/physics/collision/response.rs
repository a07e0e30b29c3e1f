//! Collision response: simplified elastic impulses and boundary bounce
//!
//! Arcade approximations only, not a rigid-body solver.

use crate::foundation::math::Vec2;

use super::primitives::RectContact;

/// Fraction of the relative normal velocity turned into impulse
pub const IMPULSE_SCALE: f32 = 0.5;

/// Impulses produced by one hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitImpulse {
    /// Impulse to add to the target
    pub target: Vec2,
    /// Impulse to add to the hiter
    pub hiter: Vec2,
}

/// Simplified elastic impulse between a hiter and a target
///
/// `normal` points from the target towards the hiter. Returns `None` when the
/// bodies are already separating along the normal: such a pair still deals
/// damage but gets no push.
pub fn hit_impulse(
    normal: Vec2,
    hiter_velocity: Vec2,
    target_velocity: Vec2,
    hiter_mass: f32,
    target_mass: f32,
) -> Option<HitImpulse> {
    let relative = hiter_velocity - target_velocity;
    let along_normal = relative.dot(&normal);
    if along_normal > 0.0 {
        return None;
    }
    let impulse = along_normal * IMPULSE_SCALE;
    Some(HitImpulse {
        target: normal * impulse * hiter_mass,
        hiter: -normal * impulse * target_mass,
    })
}

/// Speed-dependent restitution: faster impacts bounce harder, capped at 1
pub fn restitution(speed: f32) -> f32 {
    (0.5 + 0.1 * speed).min(1.0)
}

/// Push a circle out of a rect and reflect its normal velocity
///
/// Returns the corrected `(position, velocity)`.
pub fn resolve_boundary(position: Vec2, velocity: Vec2, contact: &RectContact) -> (Vec2, Vec2) {
    let corrected = position + contact.normal * contact.penetration;
    let along_normal = velocity.dot(&contact.normal);
    if along_normal >= 0.0 {
        return (corrected, velocity);
    }
    let bounce = restitution(velocity.norm());
    let reflected = velocity - contact.normal * along_normal * (1.0 + bounce);
    (corrected, reflected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_head_on_hit_pushes_bodies_apart() {
        // Hiter to the right of the target, moving left into it
        let normal = Vec2::new(1.0, 0.0);
        let impulse = hit_impulse(normal, Vec2::new(-2.0, 0.0), Vec2::zeros(), 1.0, 2.0).unwrap();
        assert_relative_eq!(impulse.target, Vec2::new(-1.0, 0.0));
        assert_relative_eq!(impulse.hiter, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_separating_bodies_get_no_impulse() {
        let normal = Vec2::new(1.0, 0.0);
        assert!(hit_impulse(normal, Vec2::new(3.0, 0.0), Vec2::zeros(), 1.0, 1.0).is_none());
    }

    #[test]
    fn test_restitution_is_capped() {
        assert_relative_eq!(restitution(0.0), 0.5);
        assert_relative_eq!(restitution(2.0), 0.7);
        assert_relative_eq!(restitution(50.0), 1.0);
    }

    #[test]
    fn test_boundary_reflects_incoming_velocity() {
        let contact = RectContact {
            normal: Vec2::new(1.0, 0.0),
            penetration: 2.0,
        };
        let (position, velocity) =
            resolve_boundary(Vec2::new(15.0, 50.0), Vec2::new(-2.0, 1.0), &contact);
        assert_relative_eq!(position, Vec2::new(17.0, 50.0));
        // speed = sqrt(5) ~ 2.236 -> restitution ~ 0.7236
        let e = restitution(5.0f32.sqrt());
        assert_relative_eq!(velocity.x, 2.0 * e, epsilon = 1e-5);
        assert_relative_eq!(velocity.y, 1.0);
    }

    #[test]
    fn test_boundary_keeps_outgoing_velocity() {
        let contact = RectContact {
            normal: Vec2::new(0.0, -1.0),
            penetration: 1.0,
        };
        let (_, velocity) = resolve_boundary(Vec2::zeros(), Vec2::new(0.0, -3.0), &contact);
        assert_eq!(velocity, Vec2::new(0.0, -3.0));
    }
}
