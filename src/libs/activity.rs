//! Sliding-window activity metrics.
//!
//! The tracker keeps the timestamps of recent keypresses, clicks and mouse
//! movements inside a fixed window and derives rates from them. All times
//! are session seconds (`f64`) handed in by the caller, which keeps the
//! tracker deterministic under test and lets the demo mode run on a virtual
//! clock.

use std::collections::VecDeque;
use std::time::Instant;

/// Default width of the sliding window in seconds.
pub const DEFAULT_WINDOW_SECONDS: f64 = 10.0;

/// Characters per word used for the WPM estimate.
const CHARS_PER_WORD: f64 = 5.0;

/// Lower bound for the effective window so a burst of events at the same
/// instant never divides by zero.
const MIN_EFFECTIVE_WINDOW: f64 = 0.001;

/// Maps wall-clock instants to session seconds.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }

    /// Seconds elapsed since the clock was created.
    pub fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Rates derived from the current window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivitySnapshot {
    pub typing_wpm: f64,
    /// Clicks per second.
    pub click_rate: f64,
    /// Mouse travel per second, in screen units.
    pub mouse_speed: f64,
    pub seconds_since_input: f64,
    pub total_active_seconds: f64,
}

/// Lifetime counters of the session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityTotals {
    pub total_keypresses: u64,
    pub total_clicks: u64,
    pub total_mouse_distance: f64,
    pub total_active_seconds: f64,
}

#[derive(Debug, Clone)]
pub struct ActivityTracker {
    window_seconds: f64,
    key_events: VecDeque<f64>,
    click_events: VecDeque<f64>,
    mouse_samples: VecDeque<(f64, f64)>,
    last_input_time: f64,
    session_start_time: f64,
    total_keypresses: u64,
    total_clicks: u64,
    total_mouse_distance: f64,
}

impl ActivityTracker {
    /// Creates a tracker whose session (and last input) starts at `now`.
    pub fn new(window_seconds: f64, now: f64) -> Self {
        Self {
            window_seconds,
            key_events: VecDeque::new(),
            click_events: VecDeque::new(),
            mouse_samples: VecDeque::new(),
            last_input_time: now,
            session_start_time: now,
            total_keypresses: 0,
            total_clicks: 0,
            total_mouse_distance: 0.0,
        }
    }

    pub fn record_keypress(&mut self, now: f64) {
        self.last_input_time = now;
        self.key_events.push_back(now);
        self.total_keypresses += 1;
        self.prune(now);
    }

    pub fn record_click(&mut self, now: f64) {
        self.last_input_time = now;
        self.click_events.push_back(now);
        self.total_clicks += 1;
        self.prune(now);
    }

    pub fn record_mouse_move(&mut self, dx: f64, dy: f64, now: f64) {
        let distance = dx.hypot(dy);
        self.last_input_time = now;
        self.mouse_samples.push_back((now, distance));
        self.total_mouse_distance += distance;
        self.prune(now);
    }

    pub fn snapshot(&mut self, now: f64) -> ActivitySnapshot {
        self.prune(now);
        ActivitySnapshot {
            typing_wpm: self.typing_wpm(now),
            click_rate: self.click_rate(now),
            mouse_speed: self.mouse_speed(now),
            seconds_since_input: (now - self.last_input_time).max(0.0),
            total_active_seconds: (now - self.session_start_time).max(0.0),
        }
    }

    pub fn totals(&self, now: f64) -> ActivityTotals {
        ActivityTotals {
            total_keypresses: self.total_keypresses,
            total_clicks: self.total_clicks,
            total_mouse_distance: self.total_mouse_distance,
            total_active_seconds: (now - self.session_start_time).max(0.0),
        }
    }

    fn effective_window(&self, now: f64, oldest: f64) -> f64 {
        self.window_seconds.min((now - oldest).max(MIN_EFFECTIVE_WINDOW))
    }

    fn typing_wpm(&self, now: f64) -> f64 {
        let Some(&oldest) = self.key_events.front() else {
            return 0.0;
        };
        let chars_per_min = self.key_events.len() as f64 * 60.0 / self.effective_window(now, oldest);
        chars_per_min / CHARS_PER_WORD
    }

    fn click_rate(&self, now: f64) -> f64 {
        let Some(&oldest) = self.click_events.front() else {
            return 0.0;
        };
        self.click_events.len() as f64 / self.effective_window(now, oldest)
    }

    fn mouse_speed(&self, now: f64) -> f64 {
        let Some(&(oldest, _)) = self.mouse_samples.front() else {
            return 0.0;
        };
        let total_distance: f64 = self.mouse_samples.iter().map(|(_, distance)| distance).sum();
        total_distance / self.effective_window(now, oldest)
    }

    fn prune(&mut self, now: f64) {
        let cutoff = now - self.window_seconds;
        while self.key_events.front().is_some_and(|&ts| ts < cutoff) {
            self.key_events.pop_front();
        }
        while self.click_events.front().is_some_and(|&ts| ts < cutoff) {
            self.click_events.pop_front();
        }
        while self.mouse_samples.front().is_some_and(|&(ts, _)| ts < cutoff) {
            self.mouse_samples.pop_front();
        }
    }
}
