//! Disk, memory and CPU load readings.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};
use sysinfo::{Disks, System};

pub const RESOURCES_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Load per CPU at which the companion starts sweating.
pub const SATURATION_THRESHOLD: f64 = 0.8;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourceSnapshot {
    pub disk_used_gb: f64,
    pub disk_total_gb: f64,
    pub mem_used_gb: f64,
    pub mem_total_gb: f64,
    /// One-minute load average divided by the number of CPUs. Zero where
    /// the platform has no load average.
    pub cpu_load: f64,
}

impl ResourceSnapshot {
    pub fn format_lines(&self) -> Vec<String> {
        vec![
            format!("Disk: {:.1}/{:.1} GB", self.disk_used_gb, self.disk_total_gb),
            format!("RAM: {:.1}/{:.1} GB", self.mem_used_gb, self.mem_total_gb),
        ]
    }

    pub fn is_saturated(&self, threshold: f64) -> bool {
        self.cpu_load >= threshold
    }
}

fn root_disk_usage() -> (f64, f64) {
    let disks = Disks::new_with_refreshed_list();
    let root = disks
        .list()
        .iter()
        .find(|disk| disk.mount_point() == Path::new("/"))
        .or_else(|| disks.list().first());
    match root {
        Some(disk) => {
            let total = disk.total_space() as f64;
            let used = total - disk.available_space() as f64;
            (used.max(0.0) / BYTES_PER_GB, total / BYTES_PER_GB)
        }
        None => (0.0, 0.0),
    }
}

fn cpu_load() -> f64 {
    let cpus = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    System::load_average().one / cpus as f64
}

/// Caches a [`ResourceSnapshot`] for the poll interval.
pub struct ResourceMonitor {
    system: System,
    poll_interval: Duration,
    cached: Option<(Instant, ResourceSnapshot)>,
}

impl ResourceMonitor {
    pub fn new() -> Self {
        Self::with_interval(RESOURCES_POLL_INTERVAL)
    }

    pub fn with_interval(poll_interval: Duration) -> Self {
        Self {
            system: System::new(),
            poll_interval,
            cached: None,
        }
    }

    pub fn snapshot(&mut self) -> ResourceSnapshot {
        if let Some((polled_at, snapshot)) = self.cached {
            if polled_at.elapsed() < self.poll_interval {
                return snapshot;
            }
        }
        self.system.refresh_memory();
        let (disk_used_gb, disk_total_gb) = root_disk_usage();
        let snapshot = ResourceSnapshot {
            disk_used_gb,
            disk_total_gb,
            mem_used_gb: self.system.used_memory() as f64 / BYTES_PER_GB,
            mem_total_gb: self.system.total_memory() as f64 / BYTES_PER_GB,
            cpu_load: cpu_load(),
        };
        tracing::debug!(?snapshot, "system resources polled");
        self.cached = Some((Instant::now(), snapshot));
        snapshot
    }

    pub fn is_saturated(&mut self, threshold: f64) -> bool {
        self.snapshot().is_saturated(threshold)
    }

    pub fn format_lines(&mut self) -> Vec<String> {
        self.snapshot().format_lines()
    }
}

impl Default for ResourceMonitor {
    fn default() -> Self {
        Self::new()
    }
}
