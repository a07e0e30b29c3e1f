//! Entity-Component-System implementation
//!
//! A fixed-capacity store with one dense column per registered component,
//! generational entity handles, bitmask queries and an explicitly ordered
//! system pipeline.

pub mod component;
pub mod components;
pub mod entity;
pub mod error;
pub mod query;
pub mod scheduler;
pub mod storage;
pub mod system;
pub mod systems;
pub mod world;

#[cfg(test)]
mod tests;

pub use component::{Component, ComponentSet};
pub use entity::Entity;
pub use error::EcsError;
pub use query::Query;
pub use scheduler::{Pipeline, ScheduleError, SystemId, SystemProfile};
pub use system::{System, TickContext};
pub use world::World;
