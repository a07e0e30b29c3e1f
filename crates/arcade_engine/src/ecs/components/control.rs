//! Player control component

/// Per-tick intent snapshot for a controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    /// Thrust forward
    pub up: bool,
    /// Reserved; carried through but no system reacts to it
    pub down: bool,
    /// Turn counter-clockwise
    pub left: bool,
    /// Turn clockwise
    pub right: bool,
    /// Fire
    pub fire: bool,
}

impl Input {
    /// No keys held
    pub const IDLE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
        fire: false,
    };
}
