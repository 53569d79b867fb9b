//! Display implementation for asciipal messages.
//!
//! Every user-facing line of text lives here, so the rest of the crate only
//! deals with typed `Message` values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigCreated(path) => format!("Created default configuration at {}", path),
            Message::ConfigPath(path) => path.clone(),
            Message::ConfigInvalid(error) => format!("Invalid configuration: {}", error),
            Message::ConfigModuleTimings => "Break and mood timings".to_string(),
            Message::ConfigOpenFailed(error) => format!("Failed to open configuration file: {}", error),

            // === COMPANION MESSAGES ===
            Message::CompanionStarted { headless, demo } => format!(
                "AsciiPal is running (mode: {}{})",
                if *headless { "headless" } else { "overlay" },
                if *demo { ", demo input" } else { "" }
            ),
            Message::CompanionStopped => "AsciiPal stopped".to_string(),
            Message::CompanionTickFailed(error) => format!("Tick failed: {}", error),
            Message::OverlayUnavailable(error) => format!("Overlay unavailable: {}. Falling back to headless mode.", error),
            Message::StartupNote(note) => format!("Note: {}", note),
            Message::CompanionStatus { state, break_line } => match break_line {
                Some(line) => format!("State={} {}", state, line),
                None => format!("State={}", state),
            },
            Message::CurrentMood(state) => state.clone(),
            Message::Diagnostic(line) => line.clone(),
            Message::ConfigDump(json) => json.clone(),
            Message::ConfigOpened(path) => format!("Opened configuration file {}", path),

            // === SIGNAL MESSAGES ===
            Message::ReceivedSigterm => "Received SIGTERM, shutting down".to_string(),
            Message::ReceivedSigint => "Received SIGINT, shutting down".to_string(),
            Message::ReceivedCtrlC => "Received Ctrl+C, shutting down".to_string(),
            Message::CtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::SignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === INPUT MONITOR MESSAGES ===
            Message::InputMonitorUnavailable => {
                "Global input monitor unavailable. Check platform permissions/runtime.".to_string()
            }
            Message::ErrorInRdevListener(error) => format!("Failed to listen for input events: {}. Retrying in 1 second...", error),

            // === BREAK MESSAGES ===
            Message::BreakForced => "Break started".to_string(),
            Message::BreakSkipped => "Break skipped".to_string(),

            // === WEATHER MESSAGES ===
            Message::WeatherEnabled => "Weather effects enabled".to_string(),
            Message::WeatherDisabled => "Weather effects disabled".to_string(),
            Message::WeatherFetchFailed(error) => format!("Failed to fetch weather: {}", error),
            Message::WeatherUpdated(effect) => format!("Weather updated: {}", effect),

            // === STATS MESSAGES ===
            Message::StatsLoadFailed(error) => format!("Failed to load lifetime stats, starting fresh: {}", error),
            Message::StatsSaveFailed(error) => format!("Failed to save lifetime stats: {}", error),
            Message::StatsHeader => "AsciiPal Lifetime Stats".to_string(),
            Message::AchievementsHeader => "Achievements".to_string(),
            Message::NoAchievementsYet => "(none yet)".to_string(),

            // === SESSION SUMMARY ===
            Message::SessionSummary {
                active_seconds,
                keypresses,
                clicks,
                mouse_distance,
                breaks_taken,
                break_seconds,
            } => format!(
                "Session summary\n  active_seconds={}\n  keypresses={}\n  clicks={}\n  mouse_distance={}\n  breaks_taken={}\n  break_seconds={}",
                active_seconds, keypresses, clicks, mouse_distance, breaks_taken, break_seconds
            ),

            // === PROMPTS ===
            Message::PromptBreakInterval => "Minutes of focus before a break".to_string(),
            Message::PromptBreakDuration => "Break length in minutes".to_string(),
            Message::PromptPomodoroMode => "Use pomodoro timers".to_string(),
            Message::PromptPomodoroWork => "Pomodoro work minutes".to_string(),
            Message::PromptPomodoroBreak => "Pomodoro break minutes".to_string(),
            Message::PromptIdleTimeout => "Seconds without input before idle".to_string(),
            Message::PromptSleepTimeout => "Seconds without input before sleeping".to_string(),
            Message::PromptNotifications => "Notification level".to_string(),
        };
        write!(f, "{}", text)
    }
}
