//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use crate::render::{render_frame, DisplayFrame};

use super::{TimerEvent, TimerState};

/// Main application state wrapping the timer engine
///
/// Owns the single `TimerState` plus the channels that connect it to its
/// collaborators: the event bus the renderer and notifier subscribe to, the
/// run flag the countdown task watches, and the latest rendered frame served
/// by the status endpoint.
#[derive(Debug)]
pub struct AppState {
    /// The countdown engine, touched only under this lock
    pub timer_state: Arc<Mutex<TimerState>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Event bus carrying timer events to subscriber tasks
    pub event_tx: broadcast::Sender<TimerEvent>,
    /// Run flag consumed by the countdown task
    pub run_tx: watch::Sender<bool>,
    /// Latest rendered frame, published by the display task
    pub display_tx: watch::Sender<DisplayFrame>,
    /// Keep the receivers alive to prevent channel closure
    pub _run_rx: watch::Receiver<bool>,
    pub _display_rx: watch::Receiver<DisplayFrame>,
}

impl AppState {
    /// Create a new AppState with an idle timer at the top of an interval
    pub fn new(port: u16, host: String) -> Self {
        let timer = TimerState::new();
        let initial_frame = render_frame(&timer.display_snapshot());

        let (event_tx, _) = broadcast::channel(100);
        let (run_tx, run_rx) = watch::channel(false);
        let (display_tx, display_rx) = watch::channel(initial_frame);

        Self {
            timer_state: Arc::new(Mutex::new(timer)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            event_tx,
            run_tx,
            display_tx,
            _run_rx: run_rx,
            _display_rx: display_rx,
        }
    }

    /// Start the countdown
    ///
    /// Returns the timer snapshot and whether this call actually activated
    /// the tick source; a second `start` while running changes nothing.
    pub fn start_timer(&self) -> Result<(TimerState, bool), String> {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let started = timer.start();
        let snapshot = timer.clone();
        drop(timer); // Release the lock early

        if started {
            info!("Countdown started");
            self.record_action("start");
            if let Err(e) = self.run_tx.send(true) {
                warn!("Failed to raise run flag: {}", e);
            }
        }

        Ok((snapshot, started))
    }

    /// Pause the countdown and rewind to the top of the interval
    pub fn pause_timer(&self) -> Result<TimerState, String> {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let events = timer.pause();
        let snapshot = timer.clone();
        drop(timer);

        info!("Countdown paused and rewound");
        self.record_action("pause");
        if let Err(e) = self.run_tx.send(false) {
            warn!("Failed to lower run flag: {}", e);
        }
        self.publish_events(events);

        Ok(snapshot)
    }

    /// Reset the countdown and the completed-cycle count
    pub fn reset_timer(&self) -> Result<TimerState, String> {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let events = timer.reset();
        let snapshot = timer.clone();
        drop(timer);

        info!("Countdown and cycle count reset");
        self.record_action("reset");
        if let Err(e) = self.run_tx.send(false) {
            warn!("Failed to lower run flag: {}", e);
        }
        self.publish_events(events);

        Ok(snapshot)
    }

    /// Apply one tick from the countdown task
    ///
    /// Returns whether the tick source should keep ticking. A tick that was
    /// already in flight when a pause or reset landed is discarded here by
    /// re-checking `running` under the lock.
    pub fn tick_timer(&self) -> Result<bool, String> {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        if !timer.is_running() {
            return Ok(false);
        }

        let events = timer.tick();
        let still_running = timer.is_running();
        drop(timer);

        if !still_running {
            // Natural completion deactivates the tick source
            if let Err(e) = self.run_tx.send(false) {
                warn!("Failed to lower run flag: {}", e);
            }
        }
        self.publish_events(events);

        Ok(still_running)
    }

    /// Get a snapshot of the current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer_state.lock()
            .map(|timer| timer.clone())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Publish the latest rendered frame for the status endpoint
    pub fn update_display_frame(&self, frame: DisplayFrame) {
        if let Err(e) = self.display_tx.send(frame) {
            warn!("Failed to send display frame update: {}", e);
        }
    }

    /// Get the most recently rendered frame
    pub fn current_frame(&self) -> DisplayFrame {
        self.display_tx.borrow().clone()
    }

    /// Subscribe a fresh watcher to the run flag
    pub fn run_flag(&self) -> watch::Receiver<bool> {
        self.run_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    fn publish_events(&self, events: Vec<TimerEvent>) {
        for event in events {
            if let Err(e) = self.event_tx.send(event) {
                warn!("Failed to send timer event notification: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent_through_app_state() {
        let state = AppState::new(0, "127.0.0.1".to_string());

        let (timer, started) = state.start_timer().unwrap();
        assert!(started);
        assert!(timer.running);
        assert!(*state.run_tx.borrow());

        let (timer, started) = state.start_timer().unwrap();
        assert!(!started);
        assert!(timer.running);
    }

    #[test]
    fn test_tick_discarded_while_idle() {
        let state = AppState::new(0, "127.0.0.1".to_string());

        assert!(!state.tick_timer().unwrap());
        assert_eq!(state.get_timer_state().unwrap().seconds_left, 1500);
    }

    #[test]
    fn test_tick_publishes_display_events() {
        let state = AppState::new(0, "127.0.0.1".to_string());
        let mut events = state.event_tx.subscribe();

        state.start_timer().unwrap();
        assert!(state.tick_timer().unwrap());

        match events.try_recv().unwrap() {
            TimerEvent::DisplayChanged(update) => {
                assert_eq!(update.seconds_left, 1499);
                assert!(update.running);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_pause_lowers_run_flag_and_rewinds() {
        let state = AppState::new(0, "127.0.0.1".to_string());

        state.start_timer().unwrap();
        for _ in 0..10 {
            state.tick_timer().unwrap();
        }
        let timer = state.pause_timer().unwrap();

        assert!(!timer.running);
        assert_eq!(timer.seconds_left, 1500);
        assert_eq!(timer.cycle_count, 0);
        assert!(!*state.run_tx.borrow());

        // A tick racing the pause is dropped
        assert!(!state.tick_timer().unwrap());
        assert_eq!(state.get_timer_state().unwrap().seconds_left, 1500);
    }

    #[test]
    fn test_completion_lowers_run_flag() {
        let state = AppState::new(0, "127.0.0.1".to_string());
        let mut events = state.event_tx.subscribe();

        state.start_timer().unwrap();
        for _ in 0..1499 {
            assert!(state.tick_timer().unwrap());
        }
        // The final tick reports that the source should stop
        assert!(!state.tick_timer().unwrap());

        let timer = state.get_timer_state().unwrap();
        assert_eq!(timer.cycle_count, 1);
        assert_eq!(timer.seconds_left, 1500);
        assert!(!timer.running);
        assert!(!*state.run_tx.borrow());

        // The receiver lags behind the burst of display events; skip past
        // the lag marker and count what the channel retained.
        let mut completions = 0;
        loop {
            match events.try_recv() {
                Ok(TimerEvent::CycleCompleted) => completions += 1,
                Ok(_) => {}
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_reset_clears_cycles() {
        let state = AppState::new(0, "127.0.0.1".to_string());

        state.start_timer().unwrap();
        for _ in 0..1500 {
            state.tick_timer().unwrap();
        }
        assert_eq!(state.get_timer_state().unwrap().cycle_count, 1);

        let timer = state.reset_timer().unwrap();
        assert_eq!(timer.cycle_count, 0);
        assert!(!timer.running);

        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("reset"));
        assert!(time.is_some());
    }
}
