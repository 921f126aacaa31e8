//! Display rendering background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::render::render_frame;
use crate::state::{AppState, TimerEvent};

/// Background task that repaints the widget on display events
///
/// Each `DisplayChanged` is rendered to a full frame and published on the
/// frame channel, where the status endpoint picks it up. Frames are derived
/// entirely from the event payload, so repainting the same state twice is a
/// no-op.
pub async fn display_task(state: Arc<AppState>) {
    info!("Starting display task");

    let mut events = state.event_tx.subscribe();

    loop {
        match events.recv().await {
            Ok(TimerEvent::DisplayChanged(update)) => {
                let frame = render_frame(&update);
                debug!(
                    "Frame: {} {} cycle_label={:?} title={:?}",
                    frame.interval_label, frame.clock, frame.cycle_label, frame.title
                );
                state.update_display_frame(frame);
            }
            Ok(TimerEvent::CycleCompleted) => {
                info!("Focus interval complete");
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Display task lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Event bus closed, stopping display task");
                break;
            }
        }
    }
}
