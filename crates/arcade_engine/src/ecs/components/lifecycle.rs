//! Lifecycle and role marker components
//!
//! Tags carry no data beyond their presence bit (except `Border`, which
//! remembers its side so the arena can be rebuilt on resize). They are used
//! for disambiguation only, never for physics.

/// Entity is queued for deferred destruction at the next removal flush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoveMark;

/// Player-controlled ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player;

/// Asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Asteroid;

/// Bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bullet;

/// Visual-only particle or explosion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Particle;

/// Entity is exposed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Renderable;

/// Which edge of the arena a border rect sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderSide {
    /// x = 0 edge
    #[default]
    Left,
    /// x = width edge
    Right,
    /// y = 0 edge
    Top,
    /// y = height edge
    Bottom,
}

impl BorderSide {
    /// All four sides
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];
}

/// Static arena border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Border {
    /// Edge this border covers
    pub side: BorderSide,
}
