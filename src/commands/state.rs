use crate::libs::activity::{ActivityTracker, DEFAULT_WINDOW_SECONDS};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::mood::{MoodState, StateMachine};
use crate::msg_print;
use anyhow::Result;
use std::path::Path;

/// Mood of a fresh session with no input yet.
pub fn initial_state(config: &Config) -> MoodState {
    let mut tracker = ActivityTracker::new(DEFAULT_WINDOW_SECONDS, 0.0);
    let snapshot = tracker.snapshot(0.0);
    StateMachine::new(config).update(&snapshot, 0.0).state
}

pub fn cmd(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(&Config::resolve_path(config_path)?)?;
    msg_print!(Message::CurrentMood(initial_state(&config).to_string()));
    Ok(())
}
