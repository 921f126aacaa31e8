//! Completion notification background task

use std::sync::Arc;
use notify_rust::Notification;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

use crate::state::{AppState, TimerEvent};

/// Messages rotated through the completion popup, keyed by cycle count
const MOTIVATION: [&str; 4] = [
    "Great focus! Stand up, stretch, and grab some water.",
    "Another interval down. Your future self says thanks.",
    "Deep work pays off. Take a real break before the next round.",
    "That was a solid 25 minutes. Keep the streak alive!",
];

/// Background task that fires the chime notification when a cycle completes
pub async fn notifier_task(state: Arc<AppState>) {
    info!("Starting notifier task");

    let mut events = state.event_tx.subscribe();

    loop {
        match events.recv().await {
            Ok(TimerEvent::CycleCompleted) => {
                let cycles = match state.get_timer_state() {
                    Ok(timer) => timer.cycle_count,
                    Err(e) => {
                        error!("Failed to read timer state for notification: {}", e);
                        continue;
                    }
                };

                if let Err(e) = send_completion_notification(cycles) {
                    error!("Failed to send completion notification: {}", e);
                }
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                warn!("Notifier task lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Event bus closed, stopping notifier task");
                break;
            }
        }
    }
}

/// Show the completion popup with a chime hint
///
/// No auto-dismiss timeout: the popup stays until the user closes it, and
/// dismissal feeds nothing back into the timer.
fn send_completion_notification(cycle_count: u64) -> Result<(), notify_rust::error::Error> {
    Notification::new()
        .summary("Focus Timer")
        .body(motivation_for(cycle_count))
        .sound_name("complete")
        .timeout(0)
        .show()?;
    Ok(())
}

fn motivation_for(cycle_count: u64) -> &'static str {
    // cycle_count was already bumped by the completing tick
    let index = cycle_count.saturating_sub(1) as usize % MOTIVATION.len();
    MOTIVATION[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motivation_rotates_deterministically() {
        assert_eq!(motivation_for(1), MOTIVATION[0]);
        assert_eq!(motivation_for(2), MOTIVATION[1]);
        assert_eq!(motivation_for(4), MOTIVATION[3]);
        assert_eq!(motivation_for(5), MOTIVATION[0]);
    }

    #[test]
    fn test_motivation_tolerates_zero_cycles() {
        assert_eq!(motivation_for(0), MOTIVATION[0]);
    }
}
