//! Damage and health components

/// Hit points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Health {
    /// Current health; at or below zero the entity dies
    pub current: f32,
    /// Maximum health
    pub max: f32,
}

impl Health {
    /// Create a new health component at full health
    pub const fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Take damage, returning whether the entity is now dead
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.current -= amount;
        self.is_dead()
    }

    /// Check if dead
    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Damage this entity deals on contact
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hiter {
    /// Damage per hit
    pub value: f32,
}

impl Hiter {
    /// Create a hiter component
    pub const fn new(value: f32) -> Self {
        Self { value }
    }
}

/// One-tick pending damage event, drained by the damage system every tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Damage {
    /// Amount to subtract from health
    pub amount: f32,
    /// X position of the entity that dealt the hit
    pub source_x: f32,
    /// Y position of the entity that dealt the hit
    pub source_y: f32,
}

/// Per-player fire control
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Weapon {
    /// Seconds until the next shot is allowed
    pub cooldown: f32,
    /// Seconds between shots
    pub fire_interval: f32,
}

impl Weapon {
    /// Create a ready-to-fire weapon
    pub const fn new(fire_interval: f32) -> Self {
        Self {
            cooldown: 0.0,
            fire_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_damage() {
        let mut health = Health::new(15.0);
        assert!(!health.take_damage(10.0));
        assert_eq!(health.current, 5.0);
        assert!(health.take_damage(10.0));
    }

    #[test]
    fn test_exact_zero_is_dead() {
        let mut health = Health::new(1.0);
        assert!(health.take_damage(1.0));
    }
}
