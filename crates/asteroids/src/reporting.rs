//! Run statistics gathered from lifecycle events and tick diagnostics

use std::cell::RefCell;
use std::rc::Rc;

use arcade_engine::diagnostics::{DiagnosticsListener, DiagnosticsTotals, TickReport};
use arcade_engine::ecs::ComponentSet;
use arcade_engine::events::{EventHandler, EventType, LifecycleEvent};
use log::{debug, info};

/// Ticks between periodic progress lines
const PROGRESS_INTERVAL: u64 = 600;

/// Counts of notable lifecycle events over a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Bullets spawned
    pub shots: u64,
    /// Asteroids spawned, fragments included
    pub asteroids_spawned: u64,
    /// Asteroids removed
    pub asteroids_destroyed: u64,
    /// Tick in which the ship was destroyed
    pub ship_lost_at: Option<u64>,
}

/// Event handler feeding a shared [`RunStats`]
#[derive(Debug, Clone)]
pub struct EventLog {
    stats: Rc<RefCell<RunStats>>,
}

impl EventLog {
    /// Handler writing into `stats`
    pub fn new(stats: Rc<RefCell<RunStats>>) -> Self {
        Self { stats }
    }
}

impl EventHandler for EventLog {
    fn on_event(&mut self, event: &LifecycleEvent) -> bool {
        let mut stats = self.stats.borrow_mut();
        match event.event_type {
            EventType::Created => {
                if event.had(ComponentSet::BULLET) {
                    stats.shots += 1;
                } else if event.had(ComponentSet::ASTEROID) {
                    stats.asteroids_spawned += 1;
                }
            }
            EventType::Destroyed => {
                if event.had(ComponentSet::ASTEROID) {
                    stats.asteroids_destroyed += 1;
                    debug!(
                        "tick {}: asteroid {} gone at {:?}",
                        event.tick, event.entity, event.position
                    );
                } else if event.had(ComponentSet::PLAYER) {
                    stats.ship_lost_at = Some(event.tick);
                    info!("tick {}: ship destroyed", event.tick);
                }
            }
        }
        false
    }
}

/// Diagnostics listener accumulating into shared totals
#[derive(Debug, Clone)]
pub struct TotalsRecorder {
    totals: Rc<RefCell<DiagnosticsTotals>>,
}

impl TotalsRecorder {
    /// Listener writing into `totals`
    pub fn new(totals: Rc<RefCell<DiagnosticsTotals>>) -> Self {
        Self { totals }
    }
}

impl DiagnosticsListener for TotalsRecorder {
    fn on_tick(&mut self, report: &TickReport) {
        self.totals.borrow_mut().record(report);
        if report.tick % PROGRESS_INTERVAL == 0 {
            info!(
                "tick {}: {} live entities, {} hit pairs",
                report.tick, report.live_entities, report.hit_pairs
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::config::SimConfig;
    use arcade_engine::Simulation;

    #[test]
    fn test_event_log_counts_field_and_shots() {
        let mut simulation = Simulation::new(SimConfig::default()).unwrap();
        let stats = Rc::new(RefCell::new(RunStats::default()));
        simulation.register_handler(EventType::Created, Box::new(EventLog::new(Rc::clone(&stats))));
        simulation.register_handler(EventType::Destroyed, Box::new(EventLog::new(Rc::clone(&stats))));
        simulation.set_input(arcade_engine::ecs::components::Input {
            fire: true,
            ..arcade_engine::ecs::components::Input::IDLE
        });

        simulation.tick(1.0);
        let stats = stats.borrow();
        assert_eq!(stats.asteroids_spawned, 5);
        assert_eq!(stats.shots, 1);
        assert_eq!(stats.ship_lost_at, None);
    }

    #[test]
    fn test_recorder_accumulates_ticks() {
        let mut simulation = Simulation::new(SimConfig::default()).unwrap();
        let totals = Rc::new(RefCell::new(DiagnosticsTotals::new()));
        simulation.set_diagnostics_listener(Box::new(TotalsRecorder::new(Rc::clone(&totals))));

        for _ in 0..3 {
            simulation.tick(1.0);
        }
        assert_eq!(totals.borrow().ticks, 3);
    }
}
