//! Entity lifecycle events
//!
//! The world records a `Created` event for every allocation and a `Destroyed`
//! event for every entity removed at the flush point. The simulation hands
//! them to an [`EventSystem`] at the end of the same tick so a presentation
//! layer can create or release visuals without polling the world.
//!
//! Key principles:
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Events are queued during the tick and delivered once, in order

use std::collections::HashMap;

use crate::ecs::{ComponentSet, Entity};
use crate::foundation::math::Vec2;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// An entity was allocated
    Created,
    /// An entity was removed at the flush point
    Destroyed,
}

/// Snapshot of an entity at the moment the event is delivered
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleEvent {
    /// Type of event
    pub event_type: EventType,
    /// The entity concerned; stale for `Destroyed`
    pub entity: Entity,
    /// Tick in which the event happened
    pub tick: u64,
    /// Components the entity carried
    pub components: ComponentSet,
    /// Last known position
    pub position: Option<Vec2>,
    /// Collider radius, if any
    pub radius: Option<f32>,
}

impl LifecycleEvent {
    /// Event for a freshly allocated entity
    pub fn created(entity: Entity, tick: u64) -> Self {
        Self {
            event_type: EventType::Created,
            entity,
            tick,
            components: ComponentSet::empty(),
            position: None,
            radius: None,
        }
    }

    /// Event for an entity removed at the flush point
    pub fn destroyed(entity: Entity, tick: u64, components: ComponentSet) -> Self {
        Self {
            event_type: EventType::Destroyed,
            entity,
            tick,
            components,
            position: None,
            radius: None,
        }
    }

    /// Attach the last known position (builder pattern)
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach the collider radius (builder pattern)
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Whether the entity carried every component in `kinds`
    pub fn had(&self, kinds: ComponentSet) -> bool {
        self.components.contains(kinds)
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &LifecycleEvent) -> bool;
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern
#[derive(Default)]
pub struct EventSystem {
    queue: Vec<LifecycleEvent>,
    handlers: HashMap<EventType, Vec<Box<dyn EventHandler>>>,
}

impl EventSystem {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a specific event type
    /// Only handlers registered for this type will be notified
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Whether any handler is registered
    pub fn has_handlers(&self) -> bool {
        self.handlers.values().any(|handlers| !handlers.is_empty())
    }

    /// Queue an event for the next dispatch
    pub fn send(&mut self, event: LifecycleEvent) {
        self.queue.push(event);
    }

    /// Queue several events, preserving their order
    pub fn send_all(&mut self, events: impl IntoIterator<Item = LifecycleEvent>) {
        self.queue.extend(events);
    }

    /// Number of queued events
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Dispatch all pending events in the order they were sent
    pub fn dispatch(&mut self) -> usize {
        let queued = std::mem::take(&mut self.queue);
        let count = queued.len();
        for event in &queued {
            self.dispatch_event(event);
        }
        count
    }

    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &LifecycleEvent) {
        if let Some(handlers) = self.handlers.get_mut(&event.event_type) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    break;
                }
            }
        }
    }

    /// Drop all queued events
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl std::fmt::Debug for EventSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSystem")
            .field("queued", &self.queue.len())
            .field("handler_types", &self.handlers.len())
            .finish()
    }
}
