//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /start - Start the focus countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.start_timer() {
        Ok((timer, started)) => {
            let message = if started {
                info!("Start endpoint called - countdown activated");
                "Focus countdown started"
            } else {
                info!("Start endpoint called - countdown already running");
                "Focus countdown already running"
            };
            Ok(Json(ApiResponse::running(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to start countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /pause - Pause and rewind the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.pause_timer() {
        Ok(timer) => {
            info!("Pause endpoint called - countdown paused and rewound");
            Ok(Json(ApiResponse::idle(
                "Countdown paused and rewound to 25:00".to_string(),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to pause countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Reset the countdown and cycle count
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset_timer() {
        Ok(timer) => {
            info!("Reset endpoint called - countdown and cycle count cleared");
            Ok(Json(ApiResponse::idle(
                "Countdown and cycle count reset".to_string(),
                timer,
            )))
        }
        Err(e) => {
            error!("Failed to reset countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return timer state and the latest rendered frame
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        display: state.current_frame(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
