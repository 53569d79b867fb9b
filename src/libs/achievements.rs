//! Lifetime statistics and milestone achievements.
//!
//! Session totals are added on top of the totals loaded from `stats.json`,
//! so the numbers keep growing across runs. Each call to
//! [`AchievementManager::update`] unlocks at most one milestone and keeps
//! its banner visible for a few ticks.

use crate::libs::activity::ActivityTotals;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const STATS_FILE_NAME: &str = "stats.json";

pub const KEYPRESS_MILESTONES: [u64; 5] = [1_000, 5_000, 10_000, 50_000, 100_000];
pub const ACTIVE_HOUR_MILESTONES: [u64; 5] = [1, 5, 10, 50, 100];
pub const MOUSE_KM_MILESTONES: [u64; 3] = [10, 50, 100];

/// Mouse travel units that make up one "kilometre".
pub const UNITS_PER_KM: f64 = 100_000.0;

/// Ticks an achievement banner stays on screen.
pub const BANNER_TICKS: u32 = 12;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct StatsData {
    pub lifetime_keypresses: u64,
    pub lifetime_clicks: u64,
    pub lifetime_mouse_distance: f64,
    pub lifetime_active_seconds: f64,
    /// Breaks taken per calendar day.
    pub daily_breaks: BTreeMap<NaiveDate, u32>,
    pub break_streak: u32,
    /// Achievement ids in unlock order.
    pub unlocked: Vec<String>,
}

impl StatsData {
    pub fn active_hours(&self) -> f64 {
        self.lifetime_active_seconds / 3600.0
    }

    pub fn mouse_km(&self) -> f64 {
        self.lifetime_mouse_distance / UNITS_PER_KM
    }
}

/// Formats an integer with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Counts consecutive days with at least one break, newest first.
/// Days without breaks before the newest day with a break are skipped.
pub fn break_streak(daily_breaks: &BTreeMap<NaiveDate, u32>) -> u32 {
    let mut streak = 0;
    let mut prev: Option<NaiveDate> = None;
    for (&day, &count) in daily_breaks.iter().rev() {
        if count < 1 {
            if prev.is_none() {
                continue;
            }
            break;
        }
        match prev {
            None => streak = 1,
            Some(later) if (later - day).num_days() == 1 => streak += 1,
            Some(_) => break,
        }
        prev = Some(day);
    }
    streak
}

pub struct AchievementManager {
    path: PathBuf,
    stats: StatsData,
    base: StatsData,
    banner: Option<String>,
    banner_ticks_remaining: u32,
}

impl AchievementManager {
    /// Loads stats from the default data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(STATS_FILE_NAME)?;
        Ok(Self::with_path(path))
    }

    /// Loads stats from `path`. A missing or unreadable file starts fresh.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stats = Self::load(&path);
        Self {
            path,
            base: stats.clone(),
            stats,
            banner: None,
            banner_ticks_remaining: 0,
        }
    }

    fn load(path: &Path) -> StatsData {
        if !path.exists() {
            return StatsData::default();
        }
        match fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|text| Ok(serde_json::from_str(&text)?)) {
            Ok(stats) => stats,
            Err(e) => {
                msg_warning!(Message::StatsLoadFailed(e.to_string()));
                StatsData::default()
            }
        }
    }

    pub fn stats(&self) -> &StatsData {
        &self.stats
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Folds the session totals into the lifetime stats and returns the
    /// banner to show this tick, if any.
    pub fn update(&mut self, totals: &ActivityTotals, breaks_taken: u32, today: NaiveDate) -> Option<String> {
        self.stats.lifetime_keypresses = self.base.lifetime_keypresses + totals.total_keypresses;
        self.stats.lifetime_clicks = self.base.lifetime_clicks + totals.total_clicks;
        self.stats.lifetime_mouse_distance = self.base.lifetime_mouse_distance + totals.total_mouse_distance;
        self.stats.lifetime_active_seconds = self.base.lifetime_active_seconds + totals.total_active_seconds;
        self.stats.daily_breaks.insert(today, breaks_taken);

        if let Some(unlocked) = self.check_milestones() {
            self.banner = Some(unlocked);
            self.banner_ticks_remaining = BANNER_TICKS;
        }

        if self.banner_ticks_remaining > 0 {
            self.banner_ticks_remaining -= 1;
            return self.banner.clone();
        }
        self.banner = None;
        None
    }

    fn unlock(&mut self, id: String) -> bool {
        if self.stats.unlocked.contains(&id) {
            return false;
        }
        self.stats.unlocked.push(id);
        true
    }

    fn check_milestones(&mut self) -> Option<String> {
        for threshold in KEYPRESS_MILESTONES {
            if self.stats.lifetime_keypresses >= threshold && self.unlock(format!("keypresses_{}", threshold)) {
                return Some(format!("★ Keypresses: {}! ★", group_thousands(threshold)));
            }
        }

        let hours = self.stats.active_hours();
        for threshold in ACTIVE_HOUR_MILESTONES {
            if hours >= threshold as f64 && self.unlock(format!("active_hours_{}", threshold)) {
                return Some(format!("★ Active Time: {}h! ★", threshold));
            }
        }

        let km = self.stats.mouse_km();
        for threshold in MOUSE_KM_MILESTONES {
            if km >= threshold as f64 && self.unlock(format!("mouse_km_{}", threshold)) {
                return Some(format!("★ Mouse Distance: {}km! ★", threshold));
            }
        }

        None
    }

    pub fn update_break_streak(&mut self) {
        self.stats.break_streak = break_streak(&self.stats.daily_breaks);
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.stats)?)?;
        Ok(())
    }
}
