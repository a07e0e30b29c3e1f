//! ECS error taxonomy

use super::{ComponentSet, Entity};

/// Errors raised by the component store, lifecycle manager and query engine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// No free entity slot is left
    #[error("entity capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Configured entity bound
        capacity: usize,
    },

    /// The handle refers to an entity that has already been flushed
    #[error("stale entity handle {entity}")]
    StaleHandle {
        /// The offending handle
        entity: Entity,
    },

    /// A query's required and excluded sets overlap
    #[error("invalid query: components {overlap:?} are both required and excluded")]
    InvalidQuery {
        /// Components present in both sets
        overlap: ComponentSet,
    },
}
