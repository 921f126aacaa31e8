//! State management module
//!
//! The pure timer engine, the events it emits, and the shared application
//! state that wires the engine to its subscriber tasks.

pub mod app_state;
pub mod events;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use events::{DisplayUpdate, TimerEvent};
pub use timer_state::{TimerState, FOCUS_DURATION_SECS};
