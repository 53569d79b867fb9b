//! Break reminder timer with escalation.
//!
//! Focus time accumulates from the last reset. Five minutes before a break
//! is due the companion starts suggesting one; once overdue it escalates
//! from suggestion to insistence (2 minutes over) to tantrum (5 minutes
//! over). Going idle after the break is due starts the rest period.

use crate::libs::activity::ActivitySnapshot;
use crate::libs::config::Config;
use std::fmt;

/// How long before the break is due the companion starts suggesting one.
pub const SUGGESTION_LEAD_SECONDS: f64 = 5.0 * 60.0;
/// Overtime after which a suggestion turns into insistence.
pub const INSISTENCE_AFTER_SECONDS: f64 = 2.0 * 60.0;
/// Overtime after which insistence turns into a tantrum.
pub const TANTRUM_AFTER_SECONDS: f64 = 5.0 * 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakStage {
    None,
    Suggestion,
    Insistence,
    Tantrum,
    OnBreak,
}

impl BreakStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakStage::None => "none",
            BreakStage::Suggestion => "suggestion",
            BreakStage::Insistence => "insistence",
            BreakStage::Tantrum => "tantrum",
            BreakStage::OnBreak => "on_break",
        }
    }
}

impl fmt::Display for BreakStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakStatus {
    /// The break is overdue and the user is still working.
    pub should_break: bool,
    pub stage: BreakStage,
    pub seconds_until_break: f64,
    pub break_seconds_remaining: f64,
}

impl BreakStatus {
    fn idle(seconds_until_break: f64) -> Self {
        Self {
            should_break: false,
            stage: BreakStage::None,
            seconds_until_break,
            break_seconds_remaining: 0.0,
        }
    }

    fn resting(seconds_until_break: f64, break_seconds_remaining: f64) -> Self {
        Self {
            should_break: false,
            stage: BreakStage::OnBreak,
            seconds_until_break,
            break_seconds_remaining,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BreakManager {
    interval_seconds: f64,
    break_duration_seconds: f64,
    idle_timeout_seconds: f64,
    pomodoro_mode: bool,
    active_start: f64,
    break_started: Option<f64>,
    breaks_taken: u32,
    total_break_seconds: f64,
}

impl BreakManager {
    /// Creates a manager whose focus timer starts at `now`.
    pub fn new(config: &Config, now: f64) -> Self {
        Self {
            interval_seconds: config.focus_interval_seconds(),
            break_duration_seconds: config.break_length_seconds(),
            idle_timeout_seconds: f64::from(config.idle_timeout_seconds),
            pomodoro_mode: config.pomodoro_mode,
            active_start: now,
            break_started: None,
            breaks_taken: 0,
            total_break_seconds: 0.0,
        }
    }

    pub fn breaks_taken(&self) -> u32 {
        self.breaks_taken
    }

    pub fn total_break_seconds(&self) -> f64 {
        self.total_break_seconds
    }

    pub fn is_on_break(&self) -> bool {
        self.break_started.is_some()
    }

    pub fn update(&mut self, snapshot: &ActivitySnapshot, now: f64) -> BreakStatus {
        if let Some(started) = self.break_started {
            let elapsed_break = now - started;
            if elapsed_break >= self.break_duration_seconds {
                self.breaks_taken += 1;
                self.total_break_seconds += self.break_duration_seconds;
                self.break_started = None;
                self.active_start = now;
                return BreakStatus::idle(self.interval_seconds);
            }
            let remaining_break = (self.break_duration_seconds - elapsed_break).max(0.0);
            return BreakStatus::resting(self.interval_seconds, remaining_break);
        }

        let remaining = self.interval_seconds - (now - self.active_start);
        let is_idle = snapshot.seconds_since_input >= self.idle_timeout_seconds;

        if remaining <= 0.0 && is_idle {
            self.start_break(now);
            return BreakStatus::resting(self.interval_seconds, self.break_duration_seconds);
        }

        if is_idle && !self.pomodoro_mode {
            self.active_start = now;
            return BreakStatus::idle(self.interval_seconds);
        }

        if remaining > 0.0 {
            let stage = if remaining <= SUGGESTION_LEAD_SECONDS { BreakStage::Suggestion } else { BreakStage::None };
            return BreakStatus {
                should_break: false,
                stage,
                seconds_until_break: remaining,
                break_seconds_remaining: 0.0,
            };
        }

        let overtime = -remaining;
        let stage = if overtime < INSISTENCE_AFTER_SECONDS {
            BreakStage::Suggestion
        } else if overtime < TANTRUM_AFTER_SECONDS {
            BreakStage::Insistence
        } else {
            BreakStage::Tantrum
        };
        BreakStatus {
            should_break: true,
            stage,
            seconds_until_break: 0.0,
            break_seconds_remaining: 0.0,
        }
    }

    pub fn start_break(&mut self, now: f64) {
        self.break_started = Some(now);
    }

    /// Starts a break unless one is already running.
    pub fn force_break(&mut self, now: f64) {
        if self.break_started.is_none() {
            self.start_break(now);
        }
    }

    /// Ends any running break without counting it and restarts the focus timer.
    pub fn skip_break(&mut self, now: f64) {
        self.break_started = None;
        self.active_start = now;
    }
}
