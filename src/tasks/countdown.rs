//! Countdown tick source background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that owns the one-second tick source
///
/// The engine never holds a timer handle; this task watches the run flag and
/// holds the `tokio` interval only while the flag is up. There is exactly one
/// of these per process, so a double `start` can never produce a second
/// active source.
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown task");

    let mut run_rx = state.run_flag();

    loop {
        // Idle until the run flag goes up
        while !*run_rx.borrow_and_update() {
            if run_rx.changed().await.is_err() {
                info!("Run flag channel closed, stopping countdown task");
                return;
            }
        }

        debug!("Tick source activated");

        // The first interval fire is immediate; consume it so the countdown
        // visibly moves one second after start, not at start.
        let mut ticker = interval(Duration::from_secs(1));
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match state.tick_timer() {
                        Ok(true) => {}
                        Ok(false) => {
                            debug!("Tick source deactivated");
                            break;
                        }
                        Err(e) => {
                            error!("Failed to apply tick: {}", e);
                            break;
                        }
                    }
                }

                changed = run_rx.changed() => {
                    if changed.is_err() {
                        info!("Run flag channel closed, stopping countdown task");
                        return;
                    }
                    if !*run_rx.borrow() {
                        debug!("Tick source cancelled");
                        break;
                    }
                }
            }
        }
    }
}
