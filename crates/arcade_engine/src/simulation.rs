//! Simulation entry point
//!
//! [`Simulation`] owns the world, the tuning config, the cross-tick
//! [`SimulationState`] and the validated pipeline. [`Simulation::tick`] is
//! the only way time moves forward:
//!
//! 1. queued bounds from [`Simulation::resize`] are applied
//! 2. every scheduled system runs once, in order
//! 3. the frame is closed (flushed slots become reusable)
//! 4. lifecycle events are dispatched to registered handlers
//! 5. the diagnostics listener, if any, receives the tick report

use std::collections::HashMap;

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, ConfigError, SimConfig, WorldConfig};
use crate::diagnostics::{DiagnosticsListener, TickReport};
use crate::ecs::components::{Border, Collision, Input, Position};
use crate::ecs::{
    ComponentSet, EcsError, Entity, Pipeline, Query, ScheduleError, SystemId, TickContext, World,
};
use crate::events::{EventHandler, EventSystem, EventType, LifecycleEvent};
use crate::foundation::math::Vec2;
use crate::presentation::{self, RenderItem};
use crate::prefabs;

const BORDERS: Query = Query::with(ComponentSet::BORDER.union(ComponentSet::POSITION));

/// Errors raised while building a simulation
#[derive(thiserror::Error, Debug)]
pub enum SimulationError {
    /// The pipeline order is invalid
    #[error("invalid pipeline: {0}")]
    Schedule(#[from] ScheduleError),

    /// Initial entities could not be created
    #[error("failed to populate world: {0}")]
    Ecs(#[from] EcsError),

    /// The configuration is out of range
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Per-tick input intent
///
/// `shared` applies to every player; an override replaces it for one entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Input for every player without an override
    pub shared: Input,
    overrides: HashMap<Entity, Input>,
}

impl InputSnapshot {
    /// Set the input of one entity
    pub fn set_override(&mut self, entity: Entity, input: Input) {
        self.overrides.insert(entity, input);
    }

    /// Drop the override of one entity
    pub fn clear_override(&mut self, entity: Entity) {
        self.overrides.remove(&entity);
    }

    /// Input that applies to `entity`
    pub fn for_entity(&self, entity: Entity) -> Input {
        self.overrides.get(&entity).copied().unwrap_or(self.shared)
    }
}

/// Cross-tick state read and written by systems
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Seeded random source for spawns and fragmentation
    pub rng: StdRng,
    /// Input intent for the coming tick
    pub input: InputSnapshot,
    /// Current arena size
    pub bounds: WorldConfig,
    /// Whether the initial asteroid field exists
    pub field_spawned: bool,
    /// Seconds until the next wave, once armed
    pub wave_timer: Option<f32>,
    /// Pairs evaluated by the last hit pass
    pub hit_pairs: usize,
}

impl SimulationState {
    /// Fresh state seeded from `config`
    pub fn new(config: &SimConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            input: InputSnapshot::default(),
            bounds: config.world.clone(),
            field_spawned: false,
            wave_timer: None,
            hit_pairs: 0,
        }
    }
}

/// A world plus everything needed to advance it
pub struct Simulation {
    world: World,
    config: SimConfig,
    state: SimulationState,
    pipeline: Pipeline,
    events: EventSystem,
    diagnostics: Option<Box<dyn DiagnosticsListener>>,
    pending_bounds: Option<(f32, f32)>,
    player: Option<Entity>,
    tick: u64,
}

impl Simulation {
    /// Build the configured preset and spawn the ship (and arena borders when
    /// the pipeline resolves boundaries)
    pub fn new(config: SimConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let pipeline = Pipeline::from_preset(config.pipeline)?;
        let mut simulation = Self::with_pipeline(config, pipeline);
        simulation.populate()?;
        Ok(simulation)
    }

    /// Empty world driven by a caller-built pipeline
    pub fn with_pipeline(config: SimConfig, pipeline: Pipeline) -> Self {
        info!(
            "simulation: capacity {}, seed {:#x}, systems {:?}",
            config.capacity,
            config.seed,
            pipeline.order()
        );
        Self {
            world: World::new(config.capacity),
            state: SimulationState::new(&config),
            config,
            pipeline,
            events: EventSystem::new(),
            diagnostics: None,
            pending_bounds: None,
            player: None,
            tick: 0,
        }
    }

    fn populate(&mut self) -> Result<(), EcsError> {
        let centre = Vec2::new(self.state.bounds.width / 2.0, self.state.bounds.height / 2.0);
        let ship = prefabs::spawn_ship(&mut self.world, &self.config.ship, &self.config.bullet, centre)?;
        self.player = Some(ship);
        if self.pipeline.contains(SystemId::Boundary) {
            prefabs::spawn_borders(&mut self.world, &self.state.bounds)?;
        }
        Ok(())
    }

    /// The world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for setup and tests
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Tuning config
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Cross-tick state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable cross-tick state
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Scheduled system order
    pub fn order(&self) -> Vec<SystemId> {
        self.pipeline.order()
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// The ship spawned by [`Simulation::new`], while it is alive
    pub fn player(&self) -> Option<Entity> {
        self.player.filter(|&ship| self.world.contains(ship))
    }

    /// Set the input every player sees next tick
    pub fn set_input(&mut self, input: Input) {
        self.state.input.shared = input;
    }

    /// Set the input one entity sees next tick
    pub fn set_entity_input(&mut self, entity: Entity, input: Input) {
        self.state.input.set_override(entity, input);
    }

    /// Return one entity to the shared input
    pub fn clear_entity_input(&mut self, entity: Entity) {
        self.state.input.clear_override(entity);
    }

    /// Queue new world bounds, applied before the next tick's systems run
    pub fn resize(&mut self, width: f32, height: f32) {
        self.pending_bounds = Some((width, height));
    }

    /// Register a lifecycle event handler
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.events.register_handler(event_type, handler);
    }

    /// Attach a diagnostics listener; systems are timed while one is set
    pub fn set_diagnostics_listener(&mut self, listener: Box<dyn DiagnosticsListener>) {
        self.diagnostics = Some(listener);
    }

    /// Detach the diagnostics listener
    pub fn clear_diagnostics_listener(&mut self) -> Option<Box<dyn DiagnosticsListener>> {
        self.diagnostics.take()
    }

    /// Renderable entities as of the end of the last tick
    pub fn snapshot(&self) -> Vec<RenderItem> {
        presentation::snapshot(&self.world)
    }

    fn apply_pending_bounds(&mut self) -> Result<(), EcsError> {
        let Some((width, height)) = self.pending_bounds.take() else {
            return Ok(());
        };
        debug!("resizing world to {}x{}", width, height);
        self.state.bounds.width = width;
        self.state.bounds.height = height;

        for entity in self.world.run_query(&BORDERS) {
            let Some(border) = self.world.read::<Border>(entity) else {
                continue;
            };
            let (origin, size) = prefabs::border_rect(border.side, &self.state.bounds);
            self.world.add(entity, Position(origin))?;
            if let Some(collision) = self.world.get_mut::<Collision>(entity)? {
                collision.rect_w = size.x;
                collision.rect_h = size.y;
            }
        }
        Ok(())
    }

    fn describe(&self, mut event: LifecycleEvent) -> LifecycleEvent {
        if event.event_type != EventType::Created {
            return event;
        }
        if let Ok(components) = self.world.components(event.entity) {
            event.components = components;
            if let Some(position) = self.world.read::<Position>(event.entity) {
                event = event.with_position(position.0);
            }
            if let Some(collision) = self.world.read::<Collision>(event.entity) {
                event = event.with_radius(collision.radius);
            }
        }
        event
    }

    /// Advance the simulation by one tick
    ///
    /// `delta_time` is in tick-equivalent units: 1.0 is one tick at 60 ticks
    /// per second.
    pub fn tick(&mut self, delta_time: f32) -> TickReport {
        if let Err(err) = self.apply_pending_bounds() {
            error!("resize failed: {}", err);
        }

        let timed = self.diagnostics.is_some();
        let systems = {
            let mut ctx = TickContext {
                delta_time,
                config: &self.config,
                state: &mut self.state,
            };
            self.pipeline.run(&mut self.world, &mut ctx, timed)
        };
        self.world.end_frame();

        let recorded = self.world.drain_events();
        let described: Vec<LifecycleEvent> =
            recorded.into_iter().map(|event| self.describe(event)).collect();
        self.events.send_all(described);
        let events = self.events.dispatch();

        let report = TickReport {
            tick: self.tick,
            live_entities: self.world.len(),
            hit_pairs: self.state.hit_pairs,
            events,
            systems,
        };
        if let Some(listener) = self.diagnostics.as_mut() {
            listener.on_tick(&report);
        }
        self.tick += 1;
        report
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.tick)
            .field("live", &self.world.len())
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
