//! Scripted ship input for unattended runs
//!
//! A fixed cycle: turn left while firing, thrust briefly, then coast and
//! fire. Deterministic, so two runs with the same seed match tick for tick.

use arcade_engine::ecs::components::Input;

/// Length of one manoeuvre cycle in ticks
const CYCLE: u64 = 240;
/// Ticks spent turning at the start of each cycle
const TURN: u64 = 60;
/// Ticks spent thrusting after the turn
const THRUST: u64 = 30;

/// Produces one input snapshot per tick
#[derive(Debug, Default)]
pub struct Autopilot {
    tick: u64,
}

impl Autopilot {
    /// Start at the beginning of a cycle
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next tick
    pub fn next_input(&mut self) -> Input {
        let phase = self.tick % CYCLE;
        self.tick += 1;
        Input {
            left: phase < TURN,
            up: (TURN..TURN + THRUST).contains(&phase),
            fire: true,
            ..Input::IDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_phases() {
        let mut pilot = Autopilot::new();
        let inputs: Vec<Input> = (0..CYCLE + 1).map(|_| pilot.next_input()).collect();

        assert!(inputs[0].left && !inputs[0].up);
        assert!(!inputs[TURN as usize].left && inputs[TURN as usize].up);
        assert!(!inputs[(TURN + THRUST) as usize].up);
        assert!(inputs.iter().all(|input| input.fire && !input.down && !input.right));
        // Wraps to the start
        assert_eq!(inputs[CYCLE as usize], inputs[0]);
    }
}
