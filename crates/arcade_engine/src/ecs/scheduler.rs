//! System scheduling and ordering
//!
//! The per-tick order is an explicit list of [`SystemId`]s. Each id declares
//! which systems must precede it when both are present and which systems must
//! be present at all; [`validate_order`] rejects any list breaking those
//! rules, so ordering invariants are checked instead of implied by call
//! order.

use std::collections::HashSet;
use std::time::Duration;

use log::{error, trace};

use crate::config::PipelinePreset;
use crate::foundation::time::Stopwatch;

use super::system::{System, TickContext};
use super::systems;
use super::World;

/// Unique identifier for systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemId {
    /// Copy the input snapshot into player `Input`
    Input,
    /// Rotation, thrust and speed clamp
    PlayerControl,
    /// Initial field and periodic waves
    Spawner,
    /// Per-tick velocity decay
    Friction,
    /// Impulse application and position integration
    Movement,
    /// Weapon cooldown and bullet spawn
    Fire,
    /// Collision-delay countdown
    CollisionDelay,
    /// Directional hiter/target detection
    Hit,
    /// Damage application
    Damage,
    /// Asteroid splitting
    Fragmentation,
    /// Fade/grow advancement
    Vfx,
    /// Deferred-removal flush
    Removal,
    /// Circle/rect boundary resolution
    Boundary,
    /// Lifetime countdown
    Lifetime,
    /// Symmetric overlap, marks both sides
    Overlap,
    /// Screen wrap
    Wrap,
}

impl SystemId {
    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::PlayerControl => "player_control",
            Self::Spawner => "spawner",
            Self::Friction => "friction",
            Self::Movement => "movement",
            Self::Fire => "fire",
            Self::CollisionDelay => "collision_delay",
            Self::Hit => "hit",
            Self::Damage => "damage",
            Self::Fragmentation => "fragmentation",
            Self::Vfx => "vfx",
            Self::Removal => "removal",
            Self::Boundary => "boundary",
            Self::Lifetime => "lifetime",
            Self::Overlap => "overlap",
            Self::Wrap => "wrap",
        }
    }

    /// Systems that must run earlier in the tick when both are scheduled
    pub const fn runs_after(self) -> &'static [SystemId] {
        match self {
            Self::Input => &[],
            Self::PlayerControl => &[Self::Input],
            Self::Spawner => &[Self::PlayerControl],
            Self::Friction => &[Self::Spawner],
            Self::Movement => &[Self::PlayerControl, Self::Spawner, Self::Friction],
            Self::Fire => &[Self::Input, Self::Movement],
            Self::CollisionDelay => &[Self::Movement, Self::Fire],
            Self::Hit => &[Self::Movement, Self::Fire, Self::CollisionDelay],
            Self::Damage => &[Self::Hit],
            Self::Fragmentation => &[Self::Damage],
            Self::Vfx => &[Self::Damage],
            Self::Overlap => &[Self::Movement, Self::Fire, Self::CollisionDelay],
            Self::Removal => &[Self::Damage, Self::Fragmentation, Self::Vfx, Self::Overlap],
            Self::Boundary => &[Self::Movement, Self::Removal],
            Self::Wrap => &[Self::Movement, Self::Removal],
            Self::Lifetime => &[Self::Removal, Self::Boundary, Self::Wrap],
        }
    }

    /// Systems that must be scheduled whenever this one is
    pub const fn requires(self) -> &'static [SystemId] {
        match self {
            // Damage is a one-tick event and must be drained every tick
            Self::Hit => &[Self::Damage],
            // Splitting reads marked entities before they are flushed
            Self::Fragmentation | Self::Damage | Self::Overlap | Self::Lifetime => &[Self::Removal],
            Self::PlayerControl => &[Self::Input],
            _ => &[],
        }
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pipeline ordering errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A system is scheduled without a system it requires
    #[error("system {system} requires {dependency}, which is not scheduled")]
    MissingDependency {
        /// The dependent system
        system: SystemId,
        /// The missing system
        dependency: SystemId,
    },

    /// A system is scheduled before a system it must follow
    #[error("system {system} must run after {dependency}")]
    OutOfOrder {
        /// The misplaced system
        system: SystemId,
        /// The system it must follow
        dependency: SystemId,
    },

    /// A system appears more than once
    #[error("system {system} is scheduled twice")]
    Duplicate {
        /// The repeated system
        system: SystemId,
    },
}

/// Standard tick order: directional hits, damage, fragmentation, bounce
pub const STANDARD_ORDER: &[SystemId] = &[
    SystemId::Input,
    SystemId::PlayerControl,
    SystemId::Spawner,
    SystemId::Friction,
    SystemId::Movement,
    SystemId::Fire,
    SystemId::CollisionDelay,
    SystemId::Hit,
    SystemId::Damage,
    SystemId::Fragmentation,
    SystemId::Vfx,
    SystemId::Removal,
    SystemId::Boundary,
    SystemId::Lifetime,
];

/// Classic tick order: symmetric overlap destroys both sides, positions wrap
pub const CLASSIC_ORDER: &[SystemId] = &[
    SystemId::Input,
    SystemId::PlayerControl,
    SystemId::Spawner,
    SystemId::Movement,
    SystemId::Fire,
    SystemId::CollisionDelay,
    SystemId::Overlap,
    SystemId::Removal,
    SystemId::Wrap,
    SystemId::Lifetime,
];

/// Order for a preset
pub const fn preset_order(preset: PipelinePreset) -> &'static [SystemId] {
    match preset {
        PipelinePreset::Standard => STANDARD_ORDER,
        PipelinePreset::Classic => CLASSIC_ORDER,
    }
}

/// Check an order against every system's declared constraints
pub fn validate_order(order: &[SystemId]) -> Result<(), ScheduleError> {
    let mut seen = HashSet::new();
    for &system in order {
        if !seen.insert(system) {
            return Err(ScheduleError::Duplicate { system });
        }
    }

    for (position, &system) in order.iter().enumerate() {
        for &dependency in system.requires() {
            if !seen.contains(&dependency) {
                return Err(ScheduleError::MissingDependency { system, dependency });
            }
        }
        for &dependency in system.runs_after() {
            if order[position + 1..].contains(&dependency) {
                return Err(ScheduleError::OutOfOrder { system, dependency });
            }
        }
    }
    Ok(())
}

/// Entity count and timing of one system run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemProfile {
    /// Which system ran
    pub system: SystemId,
    /// Entities it processed
    pub entity_count: usize,
    /// Wall time, measured only when requested
    pub time: Option<Duration>,
    /// Whether the run returned an error
    pub failed: bool,
}

/// Validated, ordered list of systems run once per tick
pub struct Pipeline {
    systems: Vec<Box<dyn System>>,
}

impl Pipeline {
    /// Build a pipeline from boxed systems, validating their order
    pub fn new(systems: Vec<Box<dyn System>>) -> Result<Self, ScheduleError> {
        let order: Vec<SystemId> = systems.iter().map(|system| system.id()).collect();
        validate_order(&order)?;
        Ok(Self { systems })
    }

    /// Build the built-in systems for `order`
    pub fn from_order(order: &[SystemId]) -> Result<Self, ScheduleError> {
        validate_order(order)?;
        Ok(Self {
            systems: order.iter().map(|&id| systems::build(id)).collect(),
        })
    }

    /// Build a preset pipeline
    pub fn from_preset(preset: PipelinePreset) -> Result<Self, ScheduleError> {
        Self::from_order(preset_order(preset))
    }

    /// Whether `system` is scheduled
    pub fn contains(&self, system: SystemId) -> bool {
        self.systems.iter().any(|scheduled| scheduled.id() == system)
    }

    /// Scheduled order
    pub fn order(&self) -> Vec<SystemId> {
        self.systems.iter().map(|system| system.id()).collect()
    }

    /// Run every system once, in order
    ///
    /// A failing system is logged and skipped; the rest of the tick still
    /// runs.
    pub fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>, timed: bool) -> Vec<SystemProfile> {
        let mut profiles = Vec::with_capacity(self.systems.len());
        let mut stopwatch = Stopwatch::new();

        for system in &mut self.systems {
            let id = system.id();
            if timed {
                stopwatch.restart();
            }
            let result = system.run(world, ctx);
            let time = timed.then(|| stopwatch.elapsed());

            let (entity_count, failed) = match result {
                Ok(count) => {
                    trace!("system {} processed {} entities", id, count);
                    (count, false)
                }
                Err(err) => {
                    error!("system {} failed: {}", id, err);
                    (0, true)
                }
            };
            profiles.push(SystemProfile {
                system: id,
                entity_count,
                time,
                failed,
            });
        }
        profiles
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").field("order", &self.order()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(validate_order(STANDARD_ORDER), Ok(()));
        assert_eq!(validate_order(CLASSIC_ORDER), Ok(()));
    }

    #[test]
    fn test_damage_must_follow_hit() {
        let order = [SystemId::Damage, SystemId::Hit, SystemId::Removal];
        assert_eq!(
            validate_order(&order),
            Err(ScheduleError::OutOfOrder {
                system: SystemId::Damage,
                dependency: SystemId::Hit
            })
        );
    }

    #[test]
    fn test_fragmentation_before_removal() {
        let order = [
            SystemId::Hit,
            SystemId::Damage,
            SystemId::Removal,
            SystemId::Fragmentation,
        ];
        assert_eq!(
            validate_order(&order),
            Err(ScheduleError::OutOfOrder {
                system: SystemId::Removal,
                dependency: SystemId::Fragmentation
            })
        );
    }

    #[test]
    fn test_hit_without_damage_rejected() {
        let order = [SystemId::Movement, SystemId::Hit, SystemId::Removal];
        assert_eq!(
            validate_order(&order),
            Err(ScheduleError::MissingDependency {
                system: SystemId::Hit,
                dependency: SystemId::Damage
            })
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let order = [SystemId::Movement, SystemId::Movement];
        assert_eq!(
            validate_order(&order),
            Err(ScheduleError::Duplicate {
                system: SystemId::Movement
            })
        );
    }

    #[test]
    fn test_pipeline_reports_preset_order() {
        let pipeline = Pipeline::from_preset(PipelinePreset::Classic).unwrap();
        assert_eq!(pipeline.order(), CLASSIC_ORDER.to_vec());
    }
}
