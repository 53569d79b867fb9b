//! Mood state machine for the companion character.

use crate::libs::activity::ActivitySnapshot;
use crate::libs::config::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum typing speed (wpm) that counts as "doing something".
const WATCHING_MIN_WPM: f64 = 1.0;
/// Minimum mouse speed that counts as "doing something".
const WATCHING_MIN_MOUSE_SPEED: f64 = 10.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MoodState {
    Idle,
    Sleeping,
    Watching,
    Excited,
    Dizzy,
    Alarmed,
    Cheering,
    Sweating,
}

impl MoodState {
    pub const ALL: [MoodState; 8] = [
        MoodState::Idle,
        MoodState::Sleeping,
        MoodState::Watching,
        MoodState::Excited,
        MoodState::Dizzy,
        MoodState::Alarmed,
        MoodState::Cheering,
        MoodState::Sweating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodState::Idle => "idle",
            MoodState::Sleeping => "sleeping",
            MoodState::Watching => "watching",
            MoodState::Excited => "excited",
            MoodState::Dizzy => "dizzy",
            MoodState::Alarmed => "alarmed",
            MoodState::Cheering => "cheering",
            MoodState::Sweating => "sweating",
        }
    }
}

impl fmt::Display for MoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one [`StateMachine::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: MoodState,
    pub changed: bool,
}

/// Thresholds the machine reads from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodThresholds {
    pub sleep_timeout_seconds: f64,
    pub idle_timeout_seconds: f64,
    pub rage_click_threshold: f64,
    pub dizzy_mouse_speed: f64,
    pub typing_fast_wpm: f64,
    pub cheering_after_seconds: f64,
}

impl From<&Config> for MoodThresholds {
    fn from(config: &Config) -> Self {
        Self {
            sleep_timeout_seconds: f64::from(config.sleep_timeout_seconds),
            idle_timeout_seconds: f64::from(config.idle_timeout_seconds),
            rage_click_threshold: f64::from(config.rage_click_threshold),
            dizzy_mouse_speed: config.dizzy_mouse_speed,
            typing_fast_wpm: f64::from(config.typing_fast_wpm),
            cheering_after_seconds: f64::from(config.cheering_after_minutes) * 60.0,
        }
    }
}

/// Maps activity snapshots to moods, holding each mood for at least the
/// cooldown so the character does not flicker.
#[derive(Debug, Clone)]
pub struct StateMachine {
    thresholds: MoodThresholds,
    cooldown_seconds: f64,
    state: MoodState,
    last_transition: Option<f64>,
    sweating: bool,
}

impl StateMachine {
    /// Creates a machine using the configured cooldown.
    pub fn new(config: &Config) -> Self {
        Self::with_cooldown(config, config.state_cooldown_seconds)
    }

    pub fn with_cooldown(config: &Config, cooldown_seconds: f64) -> Self {
        Self {
            thresholds: MoodThresholds::from(config),
            cooldown_seconds,
            state: MoodState::Idle,
            last_transition: None,
            sweating: false,
        }
    }

    pub fn state(&self) -> MoodState {
        self.state
    }

    /// Marks the machine as under system load, which favours the sweating mood.
    pub fn set_sweating(&mut self, sweating: bool) {
        self.sweating = sweating;
    }

    pub fn update(&mut self, snapshot: &ActivitySnapshot, now: f64) -> Transition {
        let target = self.target_state(snapshot);
        if target == self.state {
            return Transition { state: self.state, changed: false };
        }
        if let Some(last) = self.last_transition {
            let elapsed = now - last;
            // A negative elapsed time means the clock was reset; treat the cooldown as served.
            if elapsed >= 0.0 && elapsed < self.cooldown_seconds {
                return Transition { state: self.state, changed: false };
            }
        }
        self.state = target;
        self.last_transition = Some(now);
        Transition { state: self.state, changed: true }
    }

    /// Jumps to `state` immediately and restarts the cooldown.
    pub fn force_state(&mut self, state: MoodState, now: f64) {
        self.state = state;
        self.last_transition = Some(now);
    }

    /// The mood the snapshot asks for, ignoring the cooldown.
    pub fn target_state(&self, snapshot: &ActivitySnapshot) -> MoodState {
        let t = &self.thresholds;
        if snapshot.seconds_since_input >= t.sleep_timeout_seconds {
            MoodState::Sleeping
        } else if snapshot.seconds_since_input >= t.idle_timeout_seconds {
            MoodState::Idle
        } else if snapshot.click_rate >= t.rage_click_threshold {
            MoodState::Alarmed
        } else if snapshot.mouse_speed >= t.dizzy_mouse_speed {
            MoodState::Dizzy
        } else if self.sweating {
            MoodState::Sweating
        } else if snapshot.typing_wpm >= t.typing_fast_wpm {
            MoodState::Excited
        } else if snapshot.total_active_seconds >= t.cheering_after_seconds {
            MoodState::Cheering
        } else if snapshot.typing_wpm > WATCHING_MIN_WPM || snapshot.mouse_speed > WATCHING_MIN_MOUSE_SPEED {
            MoodState::Watching
        } else {
            MoodState::Idle
        }
    }
}
