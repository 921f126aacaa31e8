//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::render::DisplayFrame;
use crate::state::TimerState;

/// API response structure for timer control endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a response for a running countdown
    pub fn running(message: String, timer: TimerState) -> Self {
        Self::new("running".to_string(), message, timer)
    }

    /// Create a response for an idle countdown
    pub fn idle(message: String, timer: TimerState) -> Self {
        Self::new("idle".to_string(), message, timer)
    }
}

/// Status response with timer state and the latest rendered frame
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub display: DisplayFrame,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: "1.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_serializes_timer_fields() {
        let response = ApiResponse::running("Focus countdown started".to_string(), TimerState::new());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "running");
        assert_eq!(json["timer"]["seconds_left"], 1500);
        assert_eq!(json["timer"]["total_duration"], 1500);
        assert_eq!(json["timer"]["cycle_count"], 0);
        assert_eq!(json["timer"]["running"], false);
    }

    #[test]
    fn test_health_response_is_ok() {
        let health = HealthResponse::ok();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, "1.0.0");
    }
}
