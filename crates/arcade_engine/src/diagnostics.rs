//! Diagnostics: per-tick entity counts and optional system timing
//!
//! Timing is measured only while a [`DiagnosticsListener`] is attached;
//! without one the pipeline skips the stopwatch entirely.

use std::collections::HashMap;
use std::time::Duration;

use crate::ecs::{SystemId, SystemProfile};

/// Everything measured during one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Index of the tick
    pub tick: u64,
    /// Live entities after the tick
    pub live_entities: usize,
    /// Hiter x target pairs evaluated by hit detection
    pub hit_pairs: usize,
    /// Lifecycle events dispatched at the end of the tick
    pub events: usize,
    /// One entry per scheduled system, in run order
    pub systems: Vec<SystemProfile>,
}

impl TickReport {
    /// Profile of one system, if it is scheduled
    pub fn profile(&self, system: SystemId) -> Option<&SystemProfile> {
        self.systems.iter().find(|profile| profile.system == system)
    }

    /// Summed system time, when timing was measured
    pub fn total_time(&self) -> Option<Duration> {
        self.systems.iter().map(|profile| profile.time).sum()
    }

    /// Systems that returned an error this tick
    pub fn failures(&self) -> impl Iterator<Item = SystemId> + '_ {
        self.systems
            .iter()
            .filter(|profile| profile.failed)
            .map(|profile| profile.system)
    }
}

/// Receives a report after every tick
pub trait DiagnosticsListener {
    /// Called once per tick, after lifecycle events are dispatched
    fn on_tick(&mut self, report: &TickReport);
}

/// Accumulated figures for one system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemTotals {
    /// Runs recorded
    pub runs: u64,
    /// Entities processed over all runs
    pub entities: u64,
    /// Time spent over all runs
    pub time: Duration,
    /// Slowest single run
    pub peak_time: Duration,
}

impl SystemTotals {
    /// Mean time per run
    pub fn mean_time(&self) -> Duration {
        u32::try_from(self.runs)
            .ok()
            .filter(|&runs| runs > 0)
            .map_or(Duration::ZERO, |runs| self.time / runs)
    }
}

/// Running totals over many ticks
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsTotals {
    /// Ticks recorded
    pub ticks: u64,
    /// Highest live entity count seen
    pub peak_entities: usize,
    /// Highest hit pair count seen
    pub peak_hit_pairs: usize,
    /// Failed system runs
    pub failures: u64,
    systems: HashMap<SystemId, SystemTotals>,
}

impl DiagnosticsTotals {
    /// Create empty totals
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick into the totals
    pub fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.peak_entities = self.peak_entities.max(report.live_entities);
        self.peak_hit_pairs = self.peak_hit_pairs.max(report.hit_pairs);
        for profile in &report.systems {
            let totals = self.systems.entry(profile.system).or_default();
            totals.runs += 1;
            totals.entities += profile.entity_count as u64;
            if let Some(time) = profile.time {
                totals.time += time;
                totals.peak_time = totals.peak_time.max(time);
            }
            if profile.failed {
                self.failures += 1;
            }
        }
    }

    /// Totals for one system
    pub fn system(&self, system: SystemId) -> Option<&SystemTotals> {
        self.systems.get(&system)
    }
}

impl DiagnosticsListener for DiagnosticsTotals {
    fn on_tick(&mut self, report: &TickReport) {
        self.record(report);
    }
}
