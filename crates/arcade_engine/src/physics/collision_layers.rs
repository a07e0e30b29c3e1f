//! Collision group system for filtering collision detection
//!
//! Every collider carries a `group` (what it is) and a `mask` (what it
//! interacts with). The group/mask test is the sole gate for any physical
//! interaction; geometry is only evaluated once it passes.
//!
//! Two rules exist and each has exactly one use:
//! - [`can_hit`]: directional, `group[target] & mask[hiter]`. Authoritative
//!   for damage and hit impulses.
//! - [`collision_eligible`]: symmetric, either side's mask accepts the other's
//!   group. Used for plain overlap and for boundary resolution.

use bitflags::bitflags;

bitflags! {
    /// Collision categories
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionGroups: u8 {
        /// Player ship
        const PLAYER = 1 << 0;
        /// Asteroids
        const ASTEROID = 1 << 1;
        /// Bullets
        const BULLET = 1 << 2;
        /// Static colliders (arena borders)
        const STATIC = 1 << 3;
    }
}

impl Default for CollisionGroups {
    fn default() -> Self {
        Self::empty()
    }
}

/// What each group interacts with
pub mod masks {
    use super::CollisionGroups;

    /// Player hits asteroids and static geometry
    pub const PLAYER: CollisionGroups = CollisionGroups::ASTEROID.union(CollisionGroups::STATIC);

    /// Asteroids interact with everything
    pub const ASTEROID: CollisionGroups = CollisionGroups::PLAYER
        .union(CollisionGroups::BULLET)
        .union(CollisionGroups::ASTEROID)
        .union(CollisionGroups::STATIC);

    /// Bullets hit asteroids only
    pub const BULLET: CollisionGroups = CollisionGroups::ASTEROID;

    /// Static geometry interacts with the player and asteroids
    pub const STATIC: CollisionGroups = CollisionGroups::PLAYER.union(CollisionGroups::ASTEROID);
}

/// Symmetric eligibility: A and B interact if either accepts the other
pub fn collision_eligible(
    group_a: CollisionGroups,
    mask_a: CollisionGroups,
    group_b: CollisionGroups,
    mask_b: CollisionGroups,
) -> bool {
    group_a.intersects(mask_b) || group_b.intersects(mask_a)
}

/// Directional eligibility: the hiter's mask must accept the target's group
pub fn can_hit(hiter_mask: CollisionGroups, target_group: CollisionGroups) -> bool {
    target_group.intersects(hiter_mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_either_side_suffices() {
        // Bullet's mask accepts asteroids; the asteroid's mask also accepts bullets
        assert!(collision_eligible(
            CollisionGroups::BULLET,
            masks::BULLET,
            CollisionGroups::ASTEROID,
            masks::ASTEROID
        ));
        // One-sided acceptance is enough
        assert!(collision_eligible(
            CollisionGroups::PLAYER,
            CollisionGroups::empty(),
            CollisionGroups::ASTEROID,
            CollisionGroups::PLAYER
        ));
    }

    #[test]
    fn test_disjoint_masks_never_interact() {
        assert!(!collision_eligible(
            CollisionGroups::PLAYER,
            masks::PLAYER,
            CollisionGroups::BULLET,
            masks::BULLET
        ));
        assert!(!can_hit(masks::BULLET, CollisionGroups::PLAYER));
        assert!(!can_hit(masks::PLAYER, CollisionGroups::BULLET));
    }

    #[test]
    fn test_hit_is_directional() {
        // Asteroids may hit bullets, bullets may hit asteroids
        assert!(can_hit(masks::ASTEROID, CollisionGroups::BULLET));
        assert!(can_hit(masks::BULLET, CollisionGroups::ASTEROID));
        // Static geometry accepts the player, but the player's mask drives hits
        assert!(can_hit(masks::STATIC, CollisionGroups::PLAYER));
        assert!(!can_hit(CollisionGroups::empty(), CollisionGroups::PLAYER));
    }
}
