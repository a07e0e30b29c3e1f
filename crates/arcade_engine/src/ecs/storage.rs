//! Dense component storage
//!
//! One `ComponentArray` per component type, sized to the world's entity
//! capacity up front. Data for an entity lives at its slot index whether or
//! not the component is present; presence is tracked by the world's bitsets.
//! Slots never move, so removing a component or an entity leaves every other
//! entity's data where it was.

/// Fixed-capacity dense array for one component type
#[derive(Debug, Clone)]
pub struct ComponentArray<T> {
    data: Vec<T>,
}

impl<T: Copy + Default> ComponentArray<T> {
    /// Create an array with `capacity` default-initialised slots
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity],
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Read the value at `slot`
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.data.get(slot)
    }

    /// Mutable access to the value at `slot`
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.data.get_mut(slot)
    }

    /// Overwrite the value at `slot`
    pub fn set(&mut self, slot: usize, value: T) {
        if let Some(entry) = self.data.get_mut(slot) {
            *entry = value;
        }
    }

    /// Reset `slot` to the default value, returning what was there
    pub fn take(&mut self, slot: usize) -> Option<T> {
        self.data.get_mut(slot).map(std::mem::take)
    }
}
