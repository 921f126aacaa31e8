//! Events emitted by the timer engine

use serde::{Deserialize, Serialize};

/// Snapshot payload for a display refresh
///
/// Carries everything a renderer needs to repaint: the raw countdown values
/// plus `running`, which lets the renderer derive title/favicon restoration
/// instead of being told to restore imperatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUpdate {
    pub seconds_left: u64,
    pub total_duration: u64,
    pub cycle_count: u64,
    /// Set by `reset` so the renderer clears the cycle counter text
    pub suppress_cycle_text: bool,
    pub running: bool,
}

/// Event emitted by timer transitions and fanned out to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The visible countdown state changed and should be repainted
    DisplayChanged(DisplayUpdate),
    /// A focus interval counted all the way down
    CycleCompleted,
}
