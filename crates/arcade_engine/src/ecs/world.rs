//! ECS World implementation
//!
//! The world is both the component store and the entity lifecycle manager.
//! Capacity is fixed at construction; every component column is allocated
//! up front and an entity's data lives at its slot index.
//!
//! Destruction is deferred: [`World::destroy`] only attaches a
//! [`RemoveMark`]. [`World::flush_removals`] deallocates marked entities once
//! per tick, and their slots become reusable only after [`World::end_frame`].

use log::{debug, trace};

use super::components::{Columns, RemoveMark};
use super::{Component, ComponentSet, EcsError, Entity, Query};
use crate::events::LifecycleEvent;

/// ECS World containing all entities and components
#[derive(Debug, Clone)]
pub struct World {
    capacity: usize,
    generations: Vec<u32>,
    alive: Vec<bool>,
    presence: Vec<ComponentSet>,
    columns: Columns,
    /// Slots never handed out yet start here
    next_unused: usize,
    free: Vec<u32>,
    pending_free: Vec<u32>,
    live: usize,
    frame: u64,
    events: Vec<LifecycleEvent>,
}

impl World {
    /// Create a world holding at most `capacity` live entities
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            generations: vec![0; capacity],
            alive: vec![false; capacity],
            presence: vec![ComponentSet::empty(); capacity],
            columns: Columns::with_capacity(capacity),
            next_unused: 0,
            free: Vec::new(),
            pending_free: Vec::new(),
            live: 0,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Maximum number of entities
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live entities, including those marked for removal
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no entity is alive
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Frames completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Result<Entity, EcsError> {
        let index = if let Some(index) = self.free.pop() {
            index
        } else if self.next_unused < self.capacity {
            let index = u32::try_from(self.next_unused).map_err(|_| EcsError::CapacityExceeded {
                capacity: self.capacity,
            })?;
            self.next_unused += 1;
            index
        } else {
            return Err(EcsError::CapacityExceeded {
                capacity: self.capacity,
            });
        };

        let slot = index as usize;
        self.alive[slot] = true;
        self.presence[slot] = ComponentSet::empty();
        self.live += 1;

        let entity = Entity::new(index, self.generations[slot]);
        trace!("created entity {}", entity);
        self.events.push(LifecycleEvent::created(entity, self.frame));
        Ok(entity)
    }

    /// Whether `entity` refers to a live entity (marked or not)
    pub fn contains(&self, entity: Entity) -> bool {
        self.resolve(entity).is_ok()
    }

    fn resolve(&self, entity: Entity) -> Result<usize, EcsError> {
        let slot = entity.slot();
        let live = slot < self.next_unused
            && self.alive[slot]
            && self.generations[slot] == entity.generation();
        if live {
            Ok(slot)
        } else {
            Err(EcsError::StaleHandle { entity })
        }
    }

    /// Add a component to an entity, replacing any previous value
    pub fn add<T: Component>(&mut self, entity: Entity, component: T) -> Result<(), EcsError> {
        let slot = self.resolve(entity)?;
        T::column_mut(&mut self.columns).set(slot, component);
        self.presence[slot] |= T::KIND;
        Ok(())
    }

    /// Remove a component from an entity, returning the old value
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Result<Option<T>, EcsError> {
        let slot = self.resolve(entity)?;
        if !self.presence[slot].contains(T::KIND) {
            return Ok(None);
        }
        self.presence[slot].remove(T::KIND);
        Ok(T::column_mut(&mut self.columns).take(slot))
    }

    /// Get a component from an entity
    pub fn get<T: Component>(&self, entity: Entity) -> Result<Option<&T>, EcsError> {
        let slot = self.resolve(entity)?;
        if !self.presence[slot].contains(T::KIND) {
            return Ok(None);
        }
        Ok(T::column(&self.columns).get(slot))
    }

    /// Get a mutable component from an entity
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Result<Option<&mut T>, EcsError> {
        let slot = self.resolve(entity)?;
        if !self.presence[slot].contains(T::KIND) {
            return Ok(None);
        }
        Ok(T::column_mut(&mut self.columns).get_mut(slot))
    }

    /// Copy of a component, `None` when absent or the handle is stale
    pub fn read<T: Component>(&self, entity: Entity) -> Option<T> {
        self.get::<T>(entity).ok().flatten().copied()
    }

    /// Whether a live entity carries `T`
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.components(entity)
            .is_ok_and(|components| components.contains(T::KIND))
    }

    /// Presence set of an entity
    pub fn components(&self, entity: Entity) -> Result<ComponentSet, EcsError> {
        self.resolve(entity).map(|slot| self.presence[slot])
    }

    /// Mark an entity for removal at the next flush
    ///
    /// Returns whether the entity was newly marked; marking twice is a no-op.
    pub fn destroy(&mut self, entity: Entity) -> Result<bool, EcsError> {
        if self.components(entity)?.contains(ComponentSet::REMOVE_MARK) {
            return Ok(false);
        }
        self.add(entity, RemoveMark)?;
        trace!("marked entity {} for removal", entity);
        Ok(true)
    }

    /// Deallocate every entity carrying a removal mark
    ///
    /// Handles of flushed entities are stale from here on. Their slots are
    /// held back until [`World::end_frame`].
    pub fn flush_removals(&mut self) -> Vec<Entity> {
        let mut removed = Vec::new();
        for slot in 0..self.next_unused {
            if !self.alive[slot] || !self.presence[slot].contains(ComponentSet::REMOVE_MARK) {
                continue;
            }
            let Ok(index) = u32::try_from(slot) else {
                continue;
            };
            let entity = Entity::new(index, self.generations[slot]);
            let components = self.presence[slot];

            let mut event = LifecycleEvent::destroyed(entity, self.frame, components);
            if let Some(position) = self.read::<super::components::Position>(entity) {
                event = event.with_position(*position);
            }
            if let Some(collision) = self.read::<super::components::Collision>(entity) {
                event = event.with_radius(collision.radius);
            }
            self.events.push(event);

            self.columns.clear_slot(slot, components);
            self.presence[slot] = ComponentSet::empty();
            self.alive[slot] = false;
            self.generations[slot] = self.generations[slot].wrapping_add(1);
            self.pending_free.push(index);
            self.live -= 1;
            removed.push(entity);
        }
        if !removed.is_empty() {
            debug!("flushed {} entities", removed.len());
        }
        removed
    }

    /// Close the frame: slots flushed during it become reusable
    pub fn end_frame(&mut self) {
        self.free.append(&mut self.pending_free);
        self.frame += 1;
    }

    /// Live entities matching `required` and not `excluded`, ascending
    pub fn query(
        &self,
        required: ComponentSet,
        excluded: ComponentSet,
    ) -> Result<Vec<Entity>, EcsError> {
        Ok(self.run_query(&Query::new(required, excluded)?))
    }

    /// Run a prebuilt query
    pub fn run_query(&self, query: &Query) -> Vec<Entity> {
        self.entities()
            .filter(|entity| query.matches(self.presence[entity.slot()]))
            .collect()
    }

    /// Number of live entities matching a query
    pub fn count(&self, query: &Query) -> usize {
        self.entities()
            .filter(|entity| query.matches(self.presence[entity.slot()]))
            .count()
    }

    /// Get an iterator over all live entities in ascending order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        (0..self.next_unused)
            .filter(|&slot| self.alive[slot])
            .filter_map(|slot| {
                u32::try_from(slot)
                    .ok()
                    .map(|index| Entity::new(index, self.generations[slot]))
            })
    }

    /// Take the lifecycle events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Damage, Health, Position, Velocity};
    use crate::events::EventType;

    #[test]
    fn test_add_get_remove() {
        let mut world = World::new(4);
        let e = world.create_entity().unwrap();
        world.add(e, Position::new(1.0, 2.0)).unwrap();

        assert!(world.has::<Position>(e));
        assert!(!world.has::<Velocity>(e));
        assert_eq!(world.get::<Position>(e).unwrap(), Some(&Position::new(1.0, 2.0)));
        assert_eq!(world.get::<Velocity>(e).unwrap(), None);

        world.get_mut::<Position>(e).unwrap().unwrap().x = 5.0;
        assert_eq!(world.read::<Position>(e), Some(Position::new(5.0, 2.0)));

        assert_eq!(world.remove::<Position>(e).unwrap(), Some(Position::new(5.0, 2.0)));
        assert_eq!(world.remove::<Position>(e).unwrap(), None);
        assert!(!world.has::<Position>(e));
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut world = World::new(2);
        world.create_entity().unwrap();
        world.create_entity().unwrap();
        assert_eq!(
            world.create_entity(),
            Err(EcsError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_destroy_is_deferred_and_idempotent() {
        let mut world = World::new(4);
        let e = world.create_entity().unwrap();
        world.add(e, Health::new(10.0)).unwrap();

        assert_eq!(world.destroy(e), Ok(true));
        assert_eq!(world.destroy(e), Ok(false));
        // Still readable until the flush
        assert_eq!(world.read::<Health>(e), Some(Health::new(10.0)));

        assert_eq!(world.flush_removals(), vec![e]);
        assert_eq!(world.get::<Health>(e), Err(EcsError::StaleHandle { entity: e }));
        assert_eq!(world.destroy(e), Err(EcsError::StaleHandle { entity: e }));
        assert!(world.flush_removals().is_empty());
    }

    #[test]
    fn test_slots_recycled_only_after_end_frame() {
        let mut world = World::new(1);
        let first = world.create_entity().unwrap();
        world.destroy(first).unwrap();
        world.flush_removals();

        assert!(world.create_entity().is_err());

        world.end_frame();
        let second = world.create_entity().unwrap();
        assert_eq!(second.index(), first.index());
        assert_ne!(second.generation(), first.generation());
        assert!(!world.contains(first));
        assert!(world.read::<Health>(second).is_none());
    }

    #[test]
    fn test_removal_does_not_move_other_entities() {
        let mut world = World::new(4);
        let entities: Vec<_> = (0..3).map(|_| world.create_entity().unwrap()).collect();
        for (i, &e) in entities.iter().enumerate() {
            world.add(e, Position::new(i as f32, 0.0)).unwrap();
        }
        world.destroy(entities[1]).unwrap();
        world.flush_removals();

        assert_eq!(world.read::<Position>(entities[2]), Some(Position::new(2.0, 0.0)));
        assert_eq!(
            world.query(ComponentSet::POSITION, ComponentSet::empty()).unwrap(),
            vec![entities[0], entities[2]]
        );
    }

    #[test]
    fn test_query_ordering_and_exclusion() {
        let mut world = World::new(8);
        let a = world.create_entity().unwrap();
        let b = world.create_entity().unwrap();
        let c = world.create_entity().unwrap();
        for e in [c, a, b] {
            world.add(e, Health::new(1.0)).unwrap();
        }
        world.add(b, Damage::default()).unwrap();

        let result = world.query(ComponentSet::HEALTH, ComponentSet::DAMAGE).unwrap();
        assert_eq!(result, vec![a, c]);
        assert!(world
            .query(ComponentSet::HEALTH, ComponentSet::HEALTH)
            .is_err());
    }

    #[test]
    fn test_lifecycle_events_recorded() {
        let mut world = World::new(4);
        let e = world.create_entity().unwrap();
        world.add(e, Position::new(3.0, 4.0)).unwrap();
        world.destroy(e).unwrap();
        world.flush_removals();

        let events = world.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EventType::Created);
        assert_eq!(events[1].event_type, EventType::Destroyed);
        assert_eq!(events[1].entity, e);
        assert!(events[1].had(ComponentSet::POSITION | ComponentSet::REMOVE_MARK));
        assert!(world.drain_events().is_empty());
    }
}
