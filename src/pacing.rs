//! Animation cadence between step events, and the gate that implements pause.

use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::instrumented::CancellationToken;

/// Speed setting from 1 (slowest) to 10 (fastest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimationSpeed(u8);

impl AnimationSpeed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Out of range values are clamped.
    pub fn new(speed: u8) -> Self {
        Self(speed.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Delay between two events: `max(10, 200 - 18 * speed)` milliseconds.
    pub fn delay(self) -> Duration {
        let ms = 200u64.saturating_sub(18 * self.0 as u64).max(10);
        Duration::from_millis(ms)
    }
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        Self(5)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pacing {
    /// No delay at all. Used for measurement and tests.
    #[default]
    Immediate,
    Animated(AnimationSpeed),
}

impl Pacing {
    pub fn delay(self) -> Duration {
        match self {
            Pacing::Immediate => Duration::ZERO,
            Pacing::Animated(speed) => speed.delay(),
        }
    }
}

#[derive(Debug)]
struct GateState {
    paused: bool,
    pacing: Pacing,
}

/// Blocks the worker between events: for the pacing delay, and for as long
/// as the run is paused. Both waits end as soon as the run is cancelled.
#[derive(Debug)]
pub struct PacingGate {
    state: Mutex<GateState>,
    wake: Condvar,
}

impl PacingGate {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            state: Mutex::new(GateState {
                paused: false,
                pacing,
            }),
            wake: Condvar::new(),
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.state.lock().pacing
    }

    pub fn set_pacing(&self, pacing: Pacing) {
        self.state.lock().pacing = pacing;
        self.wake.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        self.state.lock().paused
    }

    pub fn pause(&self) {
        self.state.lock().paused = true;
    }

    pub fn resume(&self) {
        self.state.lock().paused = false;
        self.wake.notify_all();
    }

    /// Wakes every waiter so it can observe a cancellation.
    pub fn interrupt(&self) {
        let _state = self.state.lock();
        self.wake.notify_all();
    }

    /// Called by the worker after each delivered event.
    pub fn wait(&self, cancel: &CancellationToken) {
        let mut state = self.state.lock();

        while state.paused && cancel.is_running() {
            self.wake.wait(&mut state);
        }

        let delay = state.pacing.delay();
        if delay.is_zero() {
            return;
        }

        let deadline = Instant::now() + delay;
        while cancel.is_running() && !state.paused {
            if self.wake.wait_until(&mut state, deadline).timed_out() {
                break;
            }
        }

        // Paused during the delay: hold here until resumed.
        while state.paused && cancel.is_running() {
            self.wake.wait(&mut state);
        }
    }
}

impl Default for PacingGate {
    fn default() -> Self {
        Self::new(Pacing::Immediate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_speed_delay_curve() {
        assert_eq!(AnimationSpeed::new(1).delay(), Duration::from_millis(182));
        assert_eq!(AnimationSpeed::new(5).delay(), Duration::from_millis(110));
        assert_eq!(AnimationSpeed::new(10).delay(), Duration::from_millis(20));
        assert!(AnimationSpeed::new(3).delay() > AnimationSpeed::new(7).delay());
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(AnimationSpeed::new(0).get(), 1);
        assert_eq!(AnimationSpeed::new(42).get(), 10);
    }

    #[test]
    fn test_immediate_gate_does_not_block() {
        let gate = PacingGate::default();
        let start = Instant::now();
        for _ in 0..1000 {
            gate.wait(&CancellationToken::new());
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_cancel_releases_paused_worker() {
        let gate = Arc::new(PacingGate::default());
        let cancel = CancellationToken::new();
        gate.pause();

        let worker = {
            let gate = gate.clone();
            let cancel = cancel.clone();
            std::thread::spawn(move || gate.wait(&cancel))
        };

        std::thread::sleep(Duration::from_millis(20));
        cancel.cancel();
        gate.interrupt();
        worker.join().unwrap();
        assert!(gate.is_paused());
    }
}
