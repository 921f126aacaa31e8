//! Rendering module
//!
//! Pure computation of everything the client paints from a display update.

pub mod display;
pub mod favicon;

// Re-export main types
pub use display::{render_frame, DisplayFrame};
pub use favicon::FaviconSpec;
