//! Asteroid spawner: the initial field once, then optional periodic waves
//!
//! A wave is armed when no asteroid is left and fires `wave_interval`
//! seconds later. All spawn bookkeeping lives in `SimulationState`.

use log::{debug, warn};

use crate::ecs::{ComponentSet, EcsError, Query, System, SystemId, TickContext, World};
use crate::foundation::math::Vec2;
use crate::foundation::time::timer_expired;
use crate::prefabs::{self, AsteroidSpawn};

const ASTEROIDS: Query = Query::with(ComponentSet::ASTEROID);

/// Spawns asteroid fields
#[derive(Debug, Default)]
pub struct SpawnerSystem;

impl SpawnerSystem {
    fn spawn_field(world: &mut World, ctx: &mut TickContext<'_>) -> usize {
        let config = &ctx.config.asteroid;
        let bounds = Vec2::new(ctx.state.bounds.width, ctx.state.bounds.height);
        let mut spawned = 0;
        for _ in 0..config.initial_count {
            let spawn = AsteroidSpawn::random(&mut ctx.state.rng, config, bounds);
            match prefabs::spawn_asteroid(world, config, &spawn) {
                Ok(_) => spawned += 1,
                Err(err) => {
                    warn!("asteroid spawn skipped: {}", err);
                    break;
                }
            }
        }
        debug!("spawned asteroid field of {}", spawned);
        spawned
    }
}

impl System for SpawnerSystem {
    fn id(&self) -> SystemId {
        SystemId::Spawner
    }

    fn run(&mut self, world: &mut World, ctx: &mut TickContext<'_>) -> Result<usize, EcsError> {
        if !ctx.state.field_spawned {
            ctx.state.field_spawned = true;
            return Ok(Self::spawn_field(world, ctx));
        }

        let interval = ctx.config.asteroid.wave_interval;
        if interval <= 0.0 {
            return Ok(0);
        }

        match ctx.state.wave_timer {
            None => {
                if world.count(&ASTEROIDS) == 0 {
                    debug!("field cleared, next wave in {}s", interval);
                    ctx.state.wave_timer = Some(interval);
                }
                Ok(0)
            }
            Some(time_left) => {
                let time_left = time_left - ctx.seconds();
                if timer_expired(time_left) {
                    ctx.state.wave_timer = None;
                    Ok(Self::spawn_field(world, ctx))
                } else {
                    ctx.state.wave_timer = Some(time_left);
                    Ok(0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::simulation::SimulationState;

    fn run(world: &mut World, config: &SimConfig, state: &mut SimulationState) -> usize {
        let mut ctx = TickContext {
            delta_time: 60.0,
            config,
            state,
        };
        SpawnerSystem.run(world, &mut ctx).unwrap()
    }

    #[test]
    fn test_initial_field_spawns_once() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config);
        let mut world = World::new(64);

        assert_eq!(run(&mut world, &config, &mut state), 5);
        assert_eq!(run(&mut world, &config, &mut state), 0);
        assert_eq!(world.count(&ASTEROIDS), 5);
    }

    #[test]
    fn test_wave_after_field_cleared() {
        let mut config = SimConfig::default();
        config.asteroid.wave_interval = 2.0;
        let mut state = SimulationState::new(&config);
        let mut world = World::new(64);

        run(&mut world, &config, &mut state);
        for e in world.run_query(&ASTEROIDS) {
            world.destroy(e).unwrap();
        }
        world.flush_removals();
        world.end_frame();

        // Arms the timer, then counts one second per call
        assert_eq!(run(&mut world, &config, &mut state), 0);
        assert_eq!(run(&mut world, &config, &mut state), 0);
        assert_eq!(run(&mut world, &config, &mut state), 5);
        assert!(state.wave_timer.is_none());
    }

    #[test]
    fn test_capacity_limits_field() {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config);
        let mut world = World::new(3);
        assert_eq!(run(&mut world, &config, &mut state), 3);
    }
}
