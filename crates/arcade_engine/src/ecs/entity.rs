//! Entity implementation

use std::fmt;

/// Entity identifier
///
/// An opaque handle: `index` addresses the entity's slot in every component
/// array, `generation` distinguishes successive occupants of the same slot so
/// a handle kept past its entity's removal is detected as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Create a new entity with the given slot index and generation
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Get the slot index
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Get the slot generation
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    pub(crate) const fn slot(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
