//! Global keyboard and mouse hook.
//!
//! `rdev::listen` blocks its thread for the lifetime of the process, so the
//! listener runs on a dedicated thread and is restarted after errors.
//! Stopping only detaches it: events are ignored from then on.

use crate::libs::activity::{ActivityTracker, SessionClock};
use crate::libs::messages::Message;
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const RESTART_DELAY: Duration = Duration::from_secs(1);

/// Turns raw input events into tracker records.
#[derive(Debug, Default)]
pub struct InputRecorder {
    last_position: Option<(f64, f64)>,
}

impl InputRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &EventType, tracker: &mut ActivityTracker, now: f64) {
        match *event {
            EventType::KeyPress(_) => tracker.record_keypress(now),
            // Button events carry no position; travel up to the click was
            // already recorded by the preceding move events.
            EventType::ButtonPress(_) => tracker.record_click(now),
            EventType::MouseMove { x, y } => {
                if let Some((last_x, last_y)) = self.last_position {
                    tracker.record_mouse_move(x - last_x, y - last_y, now);
                }
                self.last_position = Some((x, y));
            }
            _ => {}
        }
    }
}

#[derive(Debug, Default)]
struct MonitorState {
    running: AtomicBool,
    failure: Mutex<Option<String>>,
}

pub struct InputMonitor {
    tracker: Arc<Mutex<ActivityTracker>>,
    clock: SessionClock,
    state: Arc<MonitorState>,
    started: bool,
}

impl InputMonitor {
    pub fn new(tracker: Arc<Mutex<ActivityTracker>>, clock: SessionClock) -> Self {
        Self {
            tracker,
            clock,
            state: Arc::new(MonitorState::default()),
            started: false,
        }
    }

    pub fn start(&mut self) {
        self.state.running.store(true, Ordering::SeqCst);
        if self.started {
            return;
        }
        self.started = true;

        let tracker = Arc::clone(&self.tracker);
        let state = Arc::clone(&self.state);
        let clock = self.clock;
        let spawned = thread::Builder::new().name("input-monitor".into()).spawn(move || loop {
            let tracker = Arc::clone(&tracker);
            let listener_state = Arc::clone(&state);
            let mut recorder = InputRecorder::new();
            let result = listen(move |event: Event| {
                if !listener_state.running.load(Ordering::Relaxed) {
                    return;
                }
                recorder.handle(&event.event_type, &mut tracker.lock(), clock.now());
            });
            match result {
                Ok(()) => break,
                Err(e) => {
                    let reason = format!("{:?}", e);
                    let first = state.failure.lock().replace(reason.clone()).is_none();
                    if first {
                        tracing::warn!("{}", Message::ErrorInRdevListener(reason));
                    } else {
                        tracing::debug!("{}", Message::ErrorInRdevListener(reason));
                    }
                    thread::sleep(RESTART_DELAY);
                }
            }
        });
        if let Err(e) = spawned {
            *self.state.failure.lock() = Some(e.to_string());
        }
    }

    pub fn stop(&mut self) {
        self.state.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.started && self.state.running.load(Ordering::SeqCst)
    }

    /// False once the listener has failed at least once.
    pub fn is_supported(&self) -> bool {
        self.state.failure.lock().is_none()
    }

    pub fn unavailable_reason(&self) -> Option<String> {
        self.state.failure.lock().clone()
    }
}
