//! System trait and per-tick context

use crate::config::SimConfig;
use crate::foundation::time::ticks_to_seconds;
use crate::simulation::SimulationState;

use super::{EcsError, SystemId, World};

/// Everything a system may touch besides the world
pub struct TickContext<'a> {
    /// Tick-equivalent units; 1.0 is one tick at 60 ticks per second
    pub delta_time: f32,
    /// Tuning values
    pub config: &'a SimConfig,
    /// Cross-tick simulation state (RNG, input, spawn bookkeeping)
    pub state: &'a mut SimulationState,
}

impl TickContext<'_> {
    /// `delta_time` converted to seconds
    pub fn seconds(&self) -> f32 {
        ticks_to_seconds(self.delta_time)
    }
}

/// System trait for processing entities and components
///
/// `run` returns the number of entities the system processed; it is reported
/// to the diagnostics listener and has no effect on the simulation.
pub trait System {
    /// System identifier
    fn id(&self) -> SystemId;

    /// Run the system
    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError>;
}
