//! Simulation tuning tree
//!
//! Every gameplay constant the systems read lives here so a run can be
//! retuned from a TOML/RON file without recompiling. Velocities and rates are
//! per tick (60 Hz), durations are in seconds.

use serde::{Deserialize, Serialize};

/// Which system order the simulation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelinePreset {
    /// Directional hit/damage model with bouncing borders
    #[default]
    Standard,
    /// Legacy model: symmetric overlap removes both entities, positions wrap
    Classic,
}

/// Root simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Maximum number of live entities
    pub capacity: usize,
    /// RNG seed for spawns and fragmentation
    pub seed: u64,
    /// System order preset
    pub pipeline: PipelinePreset,
    /// Arena settings
    pub world: WorldConfig,
    /// Player ship tuning
    pub ship: ShipConfig,
    /// Bullet and weapon tuning
    pub bullet: BulletConfig,
    /// Asteroid field tuning
    pub asteroid: AsteroidConfig,
    /// Asteroid splitting tuning
    pub fragmentation: FragmentationConfig,
    /// Visual effect entities
    pub vfx: VfxConfig,
    /// Diagnostic thresholds
    pub diagnostics: DiagnosticsConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: 512,
            seed: 0x5EED,
            pipeline: PipelinePreset::Standard,
            world: WorldConfig::default(),
            ship: ShipConfig::default(),
            bullet: BulletConfig::default(),
            asteroid: AsteroidConfig::default(),
            fragmentation: FragmentationConfig::default(),
            vfx: VfxConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

/// Arena configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in units
    pub width: f32,
    /// World height in units
    pub height: f32,
    /// Thickness of the four static border rects
    pub border_thickness: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            border_thickness: 12.0,
        }
    }
}

/// Player ship configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Collision radius
    pub radius: f32,
    /// Turn rate in radians per tick
    pub rotation_speed: f32,
    /// Thrust in units per tick squared
    pub acceleration: f32,
    /// Speed clamp in units per tick
    pub max_speed: f32,
    /// Velocity multiplier applied each tick
    pub friction: f32,
    /// Impulse weighting
    pub mass: f32,
    /// Starting health
    pub health: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            rotation_speed: 0.1,
            acceleration: 0.5,
            max_speed: 5.0,
            friction: 0.98,
            mass: 1.0,
            health: 100.0,
        }
    }
}

/// Bullet and weapon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Muzzle speed in units per tick
    pub speed: f32,
    /// Collision radius
    pub radius: f32,
    /// Seconds before the bullet expires
    pub lifetime: f32,
    /// Impulse weighting
    pub mass: f32,
    /// Damage dealt on contact
    pub damage: f32,
    /// Bullet health (asteroid contact damage destroys it)
    pub health: f32,
    /// Seconds between shots
    pub fire_interval: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 4.0,
            radius: 2.0,
            lifetime: 2.0,
            mass: 0.1,
            damage: 10.0,
            health: 1.0,
            fire_interval: 0.3,
        }
    }
}

/// Asteroid field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Asteroids in the initial field
    pub initial_count: u32,
    /// Smallest spawned radius
    pub min_radius: f32,
    /// Largest spawned radius
    pub max_radius: f32,
    /// Slowest spawned speed in units per tick
    pub min_speed: f32,
    /// Fastest spawned speed in units per tick
    pub max_speed: f32,
    /// Velocity multiplier applied each tick
    pub friction: f32,
    /// Immunity window for field spawns, in seconds
    pub spawn_collision_delay: f32,
    /// Seconds after the field is cleared before a new one spawns (0 = never)
    pub wave_interval: f32,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            initial_count: 5,
            min_radius: 10.0,
            max_radius: 20.0,
            min_speed: 0.5,
            max_speed: 1.5,
            friction: 0.99,
            spawn_collision_delay: 0.5,
            wave_interval: 0.0,
        }
    }
}

/// Asteroid splitting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentationConfig {
    /// Asteroids at or below this radius do not split
    pub min_radius: f32,
    /// Child radius as a fraction of the parent radius
    pub scale: f32,
    /// Fewest children per split
    pub min_children: u32,
    /// Most children per split
    pub max_children: u32,
    /// Immunity window for children, in seconds
    pub child_collision_delay: f32,
    /// Candidate speed offsets added to the parent velocity
    pub speed_tiers: Vec<f32>,
    /// Relative weight of each speed tier
    pub speed_weights: Vec<f32>,
}

impl Default for FragmentationConfig {
    fn default() -> Self {
        Self {
            min_radius: 10.0,
            scale: 0.6,
            min_children: 2,
            max_children: 4,
            child_collision_delay: 0.25,
            speed_tiers: vec![0.5, 1.0, 2.0],
            speed_weights: vec![5.0, 3.0, 1.0],
        }
    }
}

/// Visual effect configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VfxConfig {
    /// Spawn particle and explosion entities at all
    pub enabled: bool,
    /// Particles per damage event
    pub damage_particles: u32,
    /// Particle speed in units per tick
    pub particle_speed: f32,
    /// Nominal particle lifetime in seconds
    pub particle_lifetime: f32,
    /// Explosion lifetime in seconds
    pub explosion_lifetime: f32,
    /// Explosion scale at spawn
    pub explosion_min_scale: f32,
    /// Explosion scale when it expires
    pub explosion_max_scale: f32,
}

impl Default for VfxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            damage_particles: 8,
            particle_speed: 2.0,
            particle_lifetime: 1.5,
            explosion_lifetime: 0.8,
            explosion_min_scale: 0.1,
            explosion_max_scale: 1.0,
        }
    }
}

/// Diagnostic thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Hit-pair evaluations per tick above which a warning is logged
    pub pair_budget: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { pair_budget: 4096 }
    }
}
