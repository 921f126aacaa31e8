//! Timer state and pure countdown transitions

use serde::Serialize;

use super::events::{DisplayUpdate, TimerEvent};

/// Length of one focus interval in seconds (25 minutes)
pub const FOCUS_DURATION_SECS: u64 = 25 * 60;

/// Countdown state for the single focus interval
///
/// This struct is the whole engine: every operation is a total function over
/// it, returning the events it emits. Activation of the actual one-second
/// tick source is the runtime layer's job; the engine only tracks the
/// explicit `running` flag.
#[derive(Debug, Clone, Serialize)]
pub struct TimerState {
    pub seconds_left: u64,
    pub running: bool,
    pub cycle_count: u64,
    pub total_duration: u64,
}

impl TimerState {
    /// Create a fresh idle timer at the top of a focus interval
    pub fn new() -> Self {
        Self {
            seconds_left: FOCUS_DURATION_SECS,
            running: false,
            cycle_count: 0,
            total_duration: FOCUS_DURATION_SECS,
        }
    }

    /// Check if the tick source should be active
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin counting down
    ///
    /// Idempotent: returns `false` without touching anything when the timer
    /// is already running, so at most one tick source is ever activated.
    /// Emits nothing; the first visible change is the tick one second later.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Advance the countdown by one second
    ///
    /// The tick that reaches zero also completes the cycle: the interval
    /// counter bumps, the countdown rewinds to the full duration, and the
    /// tick source deactivates until the next `start`.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();

        if self.seconds_left > 0 {
            self.seconds_left = self.seconds_left.saturating_sub(1);
            events.push(TimerEvent::DisplayChanged(self.display_update(false)));
        }

        if self.seconds_left == 0 {
            events.push(TimerEvent::CycleCompleted);
            self.running = false;
            self.cycle_count += 1;
            self.seconds_left = self.total_duration;
            events.push(TimerEvent::DisplayChanged(self.display_update(false)));
        }

        events
    }

    /// Stop counting and rewind to the top of the current interval
    ///
    /// The cycle counter is untouched; pausing mid-interval forfeits the
    /// partial progress rather than freezing it.
    pub fn pause(&mut self) -> Vec<TimerEvent> {
        self.running = false;
        self.seconds_left = self.total_duration;
        vec![TimerEvent::DisplayChanged(self.display_update(false))]
    }

    /// Stop counting and clear all progress, including completed cycles
    pub fn reset(&mut self) -> Vec<TimerEvent> {
        self.running = false;
        self.seconds_left = self.total_duration;
        self.cycle_count = 0;
        vec![TimerEvent::DisplayChanged(self.display_update(true))]
    }

    /// Display payload for the current state, outside any transition
    pub fn display_snapshot(&self) -> DisplayUpdate {
        self.display_update(false)
    }

    fn display_update(&self, suppress_cycle_text: bool) -> DisplayUpdate {
        DisplayUpdate {
            seconds_left: self.seconds_left,
            total_duration: self.total_duration,
            cycle_count: self.cycle_count,
            suppress_cycle_text,
            running: self.running,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
