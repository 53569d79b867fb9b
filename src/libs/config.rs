//! Configuration management for asciipal.
//!
//! The configuration is a single flat JSON document stored in the platform
//! data directory (see [`DataStorage`]). Every field has a default, so a
//! partial file only overrides what it names and a missing file is created
//! with defaults on first use.
//!
//! ## Resolution Order
//!
//! 1. An explicit path (the CLI `--config` flag)
//! 2. The `ASCIIPAL_CONFIG_PATH` environment variable
//! 3. `config.json` inside the data directory
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use asciipal::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Break every {} minutes", config.break_interval_minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::mood::MoodState;
use crate::{msg_error_anyhow, msg_print};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides the configuration location.
pub const CONFIG_PATH_ENV: &str = "ASCIIPAL_CONFIG_PATH";

/// Lower bound for the weather polling period.
pub const MIN_WEATHER_POLL_MINUTES: u32 = 5;

/// Screen anchor for the overlay.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Placement of an overlay edge along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Position {
    pub fn horizontal(self) -> Anchor {
        match self {
            Position::TopLeft | Position::CenterLeft | Position::BottomLeft => Anchor::Start,
            Position::TopCenter | Position::Center | Position::BottomCenter => Anchor::Middle,
            Position::TopRight | Position::CenterRight | Position::BottomRight => Anchor::End,
        }
    }

    pub fn vertical(self) -> Anchor {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => Anchor::Start,
            Position::CenterLeft | Position::Center | Position::CenterRight => Anchor::Middle,
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => Anchor::End,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    Default,
    GreenTerminal,
    Pastel,
    AmberTerminal,
    Ocean,
}

/// How much the companion says about breaks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationLevel {
    Gentle,
    Verbose,
    Silent,
}

impl NotificationLevel {
    pub const ALL: [NotificationLevel; 3] = [NotificationLevel::Gentle, NotificationLevel::Verbose, NotificationLevel::Silent];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Gentle => "gentle",
            NotificationLevel::Verbose => "verbose",
            NotificationLevel::Silent => "silent",
        }
    }
}

/// A configuration value that breaks one of the validation rules.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be > 0")]
    MustBePositive(&'static str),
    #[error("state_cooldown_seconds must be >= 0")]
    NegativeCooldown,
    #[error("sleep_timeout_seconds must be > idle_timeout_seconds")]
    SleepNotAfterIdle,
    #[error("widget_opacity must be between 0.2 and 1.0")]
    OpacityOutOfRange,
}

/// Complete runtime configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Minutes of focused work before a break is suggested.
    pub break_interval_minutes: u32,
    /// Length of a regular break in minutes.
    pub break_duration_minutes: u32,
    /// Use the pomodoro timers instead of the regular break timers.
    ///
    /// In pomodoro mode going idle does not reset the focus timer.
    pub pomodoro_mode: bool,
    pub pomodoro_work_minutes: u32,
    pub pomodoro_break_minutes: u32,

    /// Typing speed that makes the character excited.
    pub typing_fast_wpm: u32,
    /// Clicks per second that alarm the character.
    pub rage_click_threshold: u32,
    /// Mouse travel per second that makes the character dizzy.
    pub dizzy_mouse_speed: f64,
    /// Session minutes after which the character starts cheering.
    pub cheering_after_minutes: u32,
    /// Minimum seconds between two mood changes.
    pub state_cooldown_seconds: f64,
    /// Seconds without input before the user counts as idle.
    pub idle_timeout_seconds: u32,
    /// Seconds without input before the character falls asleep.
    pub sleep_timeout_seconds: u32,

    pub position: Position,
    pub character_scale: f64,
    pub widget_mode: bool,
    pub widget_opacity: f64,
    pub color_scheme: ColorScheme,
    pub notifications: NotificationLevel,

    /// Optional art file per mood name. Missing or `null` entries use the bundled art.
    pub custom_art: BTreeMap<String, Option<PathBuf>>,

    pub weather_enabled: bool,
    /// wttr.in location; empty means "detect from IP".
    pub weather_location: String,
    pub weather_poll_minutes: u32,
    pub time_awareness_enabled: bool,
    pub system_resources_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            break_interval_minutes: 25,
            break_duration_minutes: 5,
            pomodoro_mode: false,
            pomodoro_work_minutes: 25,
            pomodoro_break_minutes: 5,
            typing_fast_wpm: 80,
            rage_click_threshold: 5,
            dizzy_mouse_speed: 700.0,
            cheering_after_minutes: 45,
            state_cooldown_seconds: 2.0,
            idle_timeout_seconds: 10,
            sleep_timeout_seconds: 120,
            position: Position::BottomRight,
            character_scale: 1.0,
            widget_mode: true,
            widget_opacity: 0.95,
            color_scheme: ColorScheme::Default,
            notifications: NotificationLevel::Gentle,
            custom_art: MoodState::ALL.iter().map(|state| (state.as_str().to_string(), None)).collect(),
            weather_enabled: false,
            weather_location: String::new(),
            weather_poll_minutes: 30,
            time_awareness_enabled: false,
            system_resources_enabled: true,
        }
    }
}

impl Config {
    /// Resolves the configuration path: explicit path, then the
    /// `ASCIIPAL_CONFIG_PATH` variable, then the data directory.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
            if !env_path.trim().is_empty() {
                return Ok(PathBuf::from(env_path));
            }
        }
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Writes a default configuration to `path` if nothing is there yet.
    ///
    /// Returns `true` when a new file was created.
    pub fn ensure_exists(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Config::default().save_to(path)?;
        Ok(true)
    }

    /// Loads, normalizes and validates the configuration at `path`,
    /// creating it with defaults first when missing.
    pub fn load(path: &Path) -> Result<Config> {
        Self::ensure_exists(path)?;
        let config_str = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&config_str)
    }

    /// Reads the configuration from the default location.
    pub fn read() -> Result<Config> {
        let path = Self::resolve_path(None)?;
        Self::load(&path)
    }

    /// Parses a JSON document, merges it over the defaults and validates it.
    /// Blank input yields the defaults.
    pub fn from_json(config_str: &str) -> Result<Config> {
        let mut config: Config = if config_str.trim().is_empty() {
            Config::default()
        } else {
            serde_json::from_str(config_str).context("configuration must be a JSON object")?
        };
        config.normalize();
        config.validate().map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies the silent corrections: the weather poll never drops below
    /// five minutes.
    pub fn normalize(&mut self) {
        self.weather_poll_minutes = self.weather_poll_minutes.max(MIN_WEATHER_POLL_MINUTES);
        // Moods missing from a partial `custom_art` table fall back to the bundled art.
        for state in MoodState::ALL {
            self.custom_art.entry(state.as_str().to_string()).or_insert(None);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("break_interval_minutes", self.break_interval_minutes),
            ("break_duration_minutes", self.break_duration_minutes),
            ("pomodoro_work_minutes", self.pomodoro_work_minutes),
            ("pomodoro_break_minutes", self.pomodoro_break_minutes),
            ("typing_fast_wpm", self.typing_fast_wpm),
            ("rage_click_threshold", self.rage_click_threshold),
            ("cheering_after_minutes", self.cheering_after_minutes),
            ("idle_timeout_seconds", self.idle_timeout_seconds),
        ];
        if let Some(&(name, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::MustBePositive(name));
        }
        if !(self.dizzy_mouse_speed > 0.0) {
            return Err(ConfigError::MustBePositive("dizzy_mouse_speed"));
        }
        if self.state_cooldown_seconds < 0.0 || self.state_cooldown_seconds.is_nan() {
            return Err(ConfigError::NegativeCooldown);
        }
        if self.sleep_timeout_seconds <= self.idle_timeout_seconds {
            return Err(ConfigError::SleepNotAfterIdle);
        }
        if !(self.character_scale > 0.0) {
            return Err(ConfigError::MustBePositive("character_scale"));
        }
        if !(0.2..=1.0).contains(&self.widget_opacity) {
            return Err(ConfigError::OpacityOutOfRange);
        }
        Ok(())
    }

    /// Focus time before a break is due, in seconds.
    pub fn focus_interval_seconds(&self) -> f64 {
        let minutes = if self.pomodoro_mode { self.pomodoro_work_minutes } else { self.break_interval_minutes };
        f64::from(minutes) * 60.0
    }

    /// Length of one break, in seconds.
    pub fn break_length_seconds(&self) -> f64 {
        let minutes = if self.pomodoro_mode { self.pomodoro_break_minutes } else { self.break_duration_minutes };
        f64::from(minutes) * 60.0
    }

    /// Custom art path configured for a mood, if any.
    pub fn custom_art_for(&self, state: MoodState) -> Option<&Path> {
        self.custom_art.get(state.as_str()).and_then(|path| path.as_deref())
    }

    /// Runs an interactive wizard over the timing settings, starting from `self`.
    pub fn init(&self) -> Result<Config> {
        let theme = ColorfulTheme::default();
        let mut config = self.clone();

        msg_print!(Message::ConfigModuleTimings);
        config.break_interval_minutes = Input::with_theme(&theme)
            .with_prompt(Message::PromptBreakInterval.to_string())
            .default(config.break_interval_minutes)
            .interact_text()?;
        config.break_duration_minutes = Input::with_theme(&theme)
            .with_prompt(Message::PromptBreakDuration.to_string())
            .default(config.break_duration_minutes)
            .interact_text()?;
        config.pomodoro_mode = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptPomodoroMode.to_string())
            .default(config.pomodoro_mode)
            .interact()?;
        if config.pomodoro_mode {
            config.pomodoro_work_minutes = Input::with_theme(&theme)
                .with_prompt(Message::PromptPomodoroWork.to_string())
                .default(config.pomodoro_work_minutes)
                .interact_text()?;
            config.pomodoro_break_minutes = Input::with_theme(&theme)
                .with_prompt(Message::PromptPomodoroBreak.to_string())
                .default(config.pomodoro_break_minutes)
                .interact_text()?;
        }
        config.idle_timeout_seconds = Input::with_theme(&theme)
            .with_prompt(Message::PromptIdleTimeout.to_string())
            .default(config.idle_timeout_seconds)
            .interact_text()?;
        config.sleep_timeout_seconds = Input::with_theme(&theme)
            .with_prompt(Message::PromptSleepTimeout.to_string())
            .default(config.sleep_timeout_seconds)
            .interact_text()?;

        let levels: Vec<&str> = NotificationLevel::ALL.iter().map(|level| level.as_str()).collect();
        let current = NotificationLevel::ALL.iter().position(|level| *level == config.notifications).unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptNotifications.to_string())
            .items(&levels)
            .default(current)
            .interact()?;
        config.notifications = NotificationLevel::ALL[selected];

        config.normalize();
        config.validate().map_err(|e| msg_error_anyhow!(Message::ConfigInvalid(e.to_string())))?;
        Ok(config)
    }
}
