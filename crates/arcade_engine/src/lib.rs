//! # Arcade Engine
//!
//! The simulation core of a 2D arcade asteroids game: a fixed-capacity
//! entity-component store, bitmask queries, and an explicitly ordered system
//! pipeline that moves, collides, damages, splits and removes entities once
//! per tick.
//!
//! ## Features
//!
//! - **ECS Architecture**: dense per-component columns, generational handles
//!   and deferred removal
//! - **Collision**: group/mask filtering, circle hits with elastic impulses,
//!   circle/rect boundary bounce
//! - **Damage Chains**: one-tick damage events, health depletion and asteroid
//!   fragmentation
//! - **Headless**: rendering and input capture stay outside; the core emits
//!   lifecycle events and render snapshots
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut simulation = Simulation::new(SimConfig::default())?;
//!     simulation.set_input(Input { up: true, fire: true, ..Input::IDLE });
//!     for _ in 0..600 {
//!         simulation.tick(1.0);
//!     }
//!     for item in simulation.snapshot() {
//!         println!("{:?} at {:?}", item.kind, item.position);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod diagnostics;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod physics;
pub mod prefabs;
pub mod presentation;
pub mod simulation;

pub use simulation::{InputSnapshot, Simulation, SimulationError, SimulationState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PipelinePreset, SimConfig},
        diagnostics::{DiagnosticsListener, DiagnosticsTotals, TickReport},
        ecs::{
            components::*, Component, ComponentSet, EcsError, Entity, Pipeline, Query,
            ScheduleError, System, SystemId, TickContext, World,
        },
        events::{EventHandler, EventType, LifecycleEvent},
        foundation::{math::Vec2, time::Stopwatch},
        physics::{CollisionGroups, masks},
        presentation::{RenderItem, RenderKind, Shape},
        Simulation, SimulationError,
    };
}
