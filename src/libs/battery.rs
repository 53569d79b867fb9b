//! Battery level and charging state.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

pub const BATTERY_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[cfg(target_os = "linux")]
const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatterySnapshot {
    pub percent: u8,
    pub charging: bool,
}

impl BatterySnapshot {
    pub fn format_line(&self) -> String {
        let icon = if self.charging { " ⚡" } else { "" };
        format!("Battery: {}%{}", self.percent, icon)
    }
}

/// Reads `capacity` and `status` from a sysfs battery directory.
/// A full battery on AC counts as charging.
pub fn read_sysfs_battery(dir: &Path) -> Option<BatterySnapshot> {
    let percent: u8 = fs::read_to_string(dir.join("capacity")).ok()?.trim().parse().ok()?;
    let charging = fs::read_to_string(dir.join("status"))
        .map(|status| matches!(status.trim().to_lowercase().as_str(), "charging" | "full"))
        .unwrap_or(false);
    Some(BatterySnapshot { percent: percent.min(100), charging })
}

/// Picks the `InternalBattery` line out of `pmset -g batt`.
pub fn parse_pmset(output: &str) -> Option<BatterySnapshot> {
    let line = output.lines().find(|line| line.contains("InternalBattery"))?;
    let info = line.split('\t').nth(1)?;
    let percent: u8 = info.split('%').next()?.trim().parse().ok()?;
    let lower = info.to_lowercase();
    let charging = lower.contains("charging") && !lower.contains("discharging");
    Some(BatterySnapshot { percent: percent.min(100), charging })
}

#[cfg(target_os = "linux")]
fn read_battery() -> Option<BatterySnapshot> {
    let mut batteries: Vec<_> = fs::read_dir(POWER_SUPPLY_DIR)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("BAT"))
        .map(|entry| entry.path())
        .collect();
    batteries.sort();
    batteries.iter().find_map(|dir| read_sysfs_battery(dir))
}

#[cfg(target_os = "macos")]
fn read_battery() -> Option<BatterySnapshot> {
    let output = std::process::Command::new("pmset").args(["-g", "batt"]).output().ok()?;
    parse_pmset(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(windows)]
fn read_battery() -> Option<BatterySnapshot> {
    use winapi::um::winbase::{GetSystemPowerStatus, SYSTEM_POWER_STATUS};

    const NO_SYSTEM_BATTERY: u8 = 128;
    const UNKNOWN_PERCENT: u8 = 255;

    let mut status: SYSTEM_POWER_STATUS = unsafe { std::mem::zeroed() };
    if unsafe { GetSystemPowerStatus(&mut status) } == 0 {
        return None;
    }
    if status.BatteryFlag & NO_SYSTEM_BATTERY != 0 || status.BatteryLifePercent == UNKNOWN_PERCENT {
        return None;
    }
    Some(BatterySnapshot {
        percent: status.BatteryLifePercent.min(100),
        charging: status.ACLineStatus == 1,
    })
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
fn read_battery() -> Option<BatterySnapshot> {
    None
}

/// Polls the battery at most once per interval.
pub struct BatteryMonitor {
    poll_interval: Duration,
    cached: Option<(Instant, Option<BatterySnapshot>)>,
}

impl BatteryMonitor {
    pub fn new() -> Self {
        Self::with_interval(BATTERY_POLL_INTERVAL)
    }

    pub fn with_interval(poll_interval: Duration) -> Self {
        Self { poll_interval, cached: None }
    }

    pub fn snapshot(&mut self) -> Option<BatterySnapshot> {
        if let Some((polled_at, snapshot)) = self.cached {
            if polled_at.elapsed() < self.poll_interval {
                return snapshot;
            }
        }
        let snapshot = read_battery();
        self.cached = Some((Instant::now(), snapshot));
        snapshot
    }

    /// `None` when no battery is present.
    pub fn format_line(&mut self) -> Option<String> {
        self.snapshot().map(|snapshot| snapshot.format_line())
    }
}

impl Default for BatteryMonitor {
    fn default() -> Self {
        Self::new()
    }
}
