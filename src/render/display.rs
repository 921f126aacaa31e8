//! Pure display computation
//!
//! Turns a `DisplayUpdate` into everything a client repaints: clock text,
//! window title, cycle label, progress fraction, and the stroke-dash values
//! for the SVG progress arc. Nothing here touches state or does IO.

use serde::{Deserialize, Serialize};

use crate::render::favicon::{favicon_arc, FaviconSpec};
use crate::state::DisplayUpdate;

/// Title shown while no countdown is running
pub const IDLE_TITLE: &str = "Focus Timer";

/// Label for the single supported interval phase
pub const INTERVAL_LABEL: &str = "Focus";

/// Radius of the on-page SVG progress circle
const ARC_RADIUS: f64 = 100.0;

/// Full stroke length of the progress circle
pub const CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * ARC_RADIUS;

/// Stroke-dash values driving the SVG progress arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressArc {
    pub dasharray: f64,
    pub dashoffset: f64,
}

/// One fully rendered frame of the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Zero-padded `MM:SS` countdown text
    pub clock: String,
    pub interval_label: String,
    /// `None` after a reset, which clears the cycle counter text
    pub cycle_label: Option<String>,
    /// Window/page title; reverts to [`IDLE_TITLE`] whenever the timer is idle
    pub title: String,
    /// Fraction of the interval elapsed, 0.0 at the top and 1.0 at completion
    pub progress: f64,
    pub arc: ProgressArc,
    /// Favicon overlay geometry; `None` while idle so the client restores
    /// the original icon
    pub favicon: Option<FaviconSpec>,
}

/// Format a second count as zero-padded `MM:SS`
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Fraction of the interval already elapsed
pub fn progress(seconds_left: u64, total_duration: u64) -> f64 {
    1.0 - seconds_left as f64 / total_duration as f64
}

/// Render the frame for a display update
pub fn render_frame(update: &DisplayUpdate) -> DisplayFrame {
    let clock = format_clock(update.seconds_left);
    let progress = progress(update.seconds_left, update.total_duration);

    let cycle_label = if update.suppress_cycle_text {
        None
    } else {
        Some(format!("Cycle: {}", update.cycle_count + 1))
    };

    let title = if update.running {
        format!("{} Focus time", clock)
    } else {
        IDLE_TITLE.to_string()
    };

    let favicon = if update.running {
        Some(favicon_arc(progress))
    } else {
        None
    };

    DisplayFrame {
        clock,
        interval_label: INTERVAL_LABEL.to_string(),
        cycle_label,
        title,
        progress,
        arc: ProgressArc {
            dasharray: CIRCUMFERENCE,
            dashoffset: CIRCUMFERENCE * (1.0 - progress),
        },
        favicon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(seconds_left: u64, running: bool) -> DisplayUpdate {
        DisplayUpdate {
            seconds_left,
            total_duration: 1500,
            cycle_count: 0,
            suppress_cycle_text: false,
            running,
        }
    }

    #[test]
    fn test_format_clock_zero_pads() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress(1500, 1500), 0.0);
        assert_eq!(progress(0, 1500), 1.0);
        assert!((progress(750, 1500) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_running_frame() {
        let frame = render_frame(&update(1125, true));
        assert_eq!(frame.clock, "18:45");
        assert_eq!(frame.title, "18:45 Focus time");
        assert_eq!(frame.interval_label, "Focus");
        assert_eq!(frame.cycle_label.as_deref(), Some("Cycle: 1"));
        assert!((frame.progress - 0.25).abs() < 1e-9);
        assert!(frame.favicon.is_some());
    }

    #[test]
    fn test_idle_frame_restores_title_and_favicon() {
        let frame = render_frame(&update(1500, false));
        assert_eq!(frame.clock, "25:00");
        assert_eq!(frame.title, IDLE_TITLE);
        assert!(frame.favicon.is_none());
    }

    #[test]
    fn test_idle_rendering_is_idempotent() {
        let first = render_frame(&update(1500, false));
        let second = render_frame(&update(1500, false));
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_suppresses_cycle_label() {
        let mut reset = update(1500, false);
        reset.suppress_cycle_text = true;
        let frame = render_frame(&reset);
        assert!(frame.cycle_label.is_none());
    }

    #[test]
    fn test_arc_dash_values() {
        let frame = render_frame(&update(750, true));
        assert!((frame.arc.dasharray - CIRCUMFERENCE).abs() < 1e-9);
        assert!((frame.arc.dashoffset - CIRCUMFERENCE * 0.5).abs() < 1e-9);

        let done = render_frame(&update(0, true));
        assert!(done.arc.dashoffset.abs() < 1e-9);
    }
}
