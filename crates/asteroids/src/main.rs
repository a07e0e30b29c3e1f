//! Headless asteroids run
//!
//! Loads a [`GameConfig`] (path from the first argument, falling back to
//! `asteroids.toml` and then to defaults), runs the simulation for the
//! configured number of ticks and prints a summary.

mod autopilot;
mod config;
mod reporting;

use std::cell::RefCell;
use std::rc::Rc;

use arcade_engine::config::Config;
use arcade_engine::diagnostics::DiagnosticsTotals;
use arcade_engine::ecs::ComponentSet;
use arcade_engine::events::EventType;
use arcade_engine::foundation::logging;
use arcade_engine::Simulation;
use log::info;

use autopilot::Autopilot;
use config::{GameConfig, DEFAULT_CONFIG_PATH};
use reporting::{EventLog, RunStats, TotalsRecorder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load_or_default(&path)?;
    logging::init_with_level(&config.log_level);
    info!(
        "running {} ticks of the {:?} pipeline (seed {:#x})",
        config.ticks, config.sim.pipeline, config.sim.seed
    );

    let mut simulation = Simulation::new(config.sim.clone())?;
    let stats = Rc::new(RefCell::new(RunStats::default()));
    let totals = Rc::new(RefCell::new(DiagnosticsTotals::new()));
    simulation.register_handler(EventType::Created, Box::new(EventLog::new(Rc::clone(&stats))));
    simulation.register_handler(EventType::Destroyed, Box::new(EventLog::new(Rc::clone(&stats))));
    simulation.set_diagnostics_listener(Box::new(TotalsRecorder::new(Rc::clone(&totals))));

    let mut pilot = config.autopilot.then(Autopilot::new);
    for _ in 0..config.ticks {
        if let Some(pilot) = pilot.as_mut() {
            simulation.set_input(pilot.next_input());
        }
        simulation.tick(config.delta_time);
    }

    print_summary(&simulation, &stats.borrow(), &totals.borrow());
    Ok(())
}

fn print_summary(simulation: &Simulation, stats: &RunStats, totals: &DiagnosticsTotals) {
    let asteroids = simulation
        .world()
        .query(ComponentSet::ASTEROID, ComponentSet::empty())
        .map_or(0, |found| found.len());

    println!("ticks run:            {}", simulation.ticks());
    println!("live entities:        {}", simulation.world().len());
    println!("asteroids remaining:  {asteroids}");
    println!("asteroids spawned:    {}", stats.asteroids_spawned);
    println!("asteroids destroyed:  {}", stats.asteroids_destroyed);
    println!("shots fired:          {}", stats.shots);
    match stats.ship_lost_at {
        Some(tick) => println!("ship destroyed:       tick {tick}"),
        None => println!("ship destroyed:       no"),
    }
    println!("peak entities:        {}", totals.peak_entities);
    println!("peak hit pairs:       {}", totals.peak_hit_pairs);
    println!("system failures:      {}", totals.failures);

    println!("mean time per system:");
    for id in simulation.order() {
        if let Some(system) = totals.system(id) {
            println!("  {:<16} {:>10.3?}", id.name(), system.mean_time());
        }
    }
}
