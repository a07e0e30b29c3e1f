//! Lifetime Component
//!
//! Countdown for entities that should despawn on their own (bullets,
//! particles, explosions).

use crate::foundation::time::timer_expired;

/// Entity self-destructs once `time_left` reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lifetime {
    /// Seconds remaining
    pub time_left: f32,
}

impl Lifetime {
    /// Create a new lifetime component
    pub const fn new(seconds: f32) -> Self {
        Self { time_left: seconds }
    }

    /// Count down by `seconds`, returning whether the lifetime has expired
    pub fn tick(&mut self, seconds: f32) -> bool {
        self.time_left -= seconds;
        self.is_expired()
    }

    /// Check if this entity's lifetime has expired
    pub fn is_expired(&self) -> bool {
        timer_expired(self.time_left)
    }
}
