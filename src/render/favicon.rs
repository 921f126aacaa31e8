//! Favicon overlay geometry
//!
//! The original widget painted timer progress onto a 64px canvas favicon: a
//! white disc, a pink ring swept clockwise from twelve o'clock, and a pale
//! inner disc matching the page background. The server does no pixel work;
//! it ships the same geometry so a thin client can draw it.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Icon edge length in pixels
pub const ICON_SIZE: u32 = 64;

const BACKGROUND_COLOR: &str = "#fff";
const RING_COLOR: &str = "#f06292";
const INNER_COLOR: &str = "#fff0f6";

/// Drawing instructions for one favicon frame
///
/// Angles are radians in canvas convention: 0 points right, positive sweeps
/// clockwise. The ring runs from `start_angle` to `end_angle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaviconSpec {
    pub size: u32,
    pub background_radius: f64,
    pub background_color: String,
    pub ring_radius: f64,
    pub ring_width: f64,
    pub ring_color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub inner_color: String,
}

/// Compute the favicon arc for an elapsed fraction in `[0, 1]`
pub fn favicon_arc(progress: f64) -> FaviconSpec {
    let size = f64::from(ICON_SIZE);
    let start_angle = -PI / 2.0;

    FaviconSpec {
        size: ICON_SIZE,
        background_radius: size / 2.0,
        background_color: BACKGROUND_COLOR.to_string(),
        ring_radius: size / 2.0 - 6.0,
        ring_width: 8.0,
        ring_color: RING_COLOR.to_string(),
        start_angle,
        end_angle: start_angle + 2.0 * PI * progress,
        inner_radius: size / 2.0 - 14.0,
        inner_color: INNER_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_match_icon_size() {
        let spec = favicon_arc(0.0);
        assert_eq!(spec.size, 64);
        assert_eq!(spec.background_radius, 32.0);
        assert_eq!(spec.ring_radius, 26.0);
        assert_eq!(spec.ring_width, 8.0);
        assert_eq!(spec.inner_radius, 18.0);
    }

    #[test]
    fn test_arc_sweep() {
        let empty = favicon_arc(0.0);
        assert!((empty.end_angle - empty.start_angle).abs() < 1e-9);

        let half = favicon_arc(0.5);
        assert!((half.end_angle - half.start_angle - PI).abs() < 1e-9);

        let full = favicon_arc(1.0);
        assert!((full.end_angle - full.start_angle - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_starts_at_twelve_o_clock() {
        let spec = favicon_arc(0.25);
        assert!((spec.start_angle + PI / 2.0).abs() < 1e-9);
    }
}
