#[cfg(test)]
mod tests {
    use asciipal::libs::resources::{ResourceMonitor, ResourceSnapshot, SATURATION_THRESHOLD};
    use std::time::Duration;

    #[test]
    fn test_format_lines() {
        let snapshot = ResourceSnapshot {
            disk_used_gb: 120.456,
            disk_total_gb: 500.0,
            mem_used_gb: 7.31,
            mem_total_gb: 16.0,
            cpu_load: 0.3,
        };
        assert_eq!(snapshot.format_lines(), vec!["Disk: 120.5/500.0 GB".to_string(), "RAM: 7.3/16.0 GB".to_string()]);
    }

    #[test]
    fn test_saturation() {
        let calm = ResourceSnapshot { cpu_load: 0.5, ..Default::default() };
        let busy = ResourceSnapshot { cpu_load: 0.8, ..Default::default() };
        assert!(!calm.is_saturated(SATURATION_THRESHOLD));
        assert!(busy.is_saturated(SATURATION_THRESHOLD));
    }

    #[test]
    fn test_monitor_reads_this_machine() {
        let mut monitor = ResourceMonitor::with_interval(Duration::from_secs(3600));
        let first = monitor.snapshot();
        assert!(first.mem_total_gb >= first.mem_used_gb);
        assert!(first.cpu_load >= 0.0);
        // Cached until the interval passes.
        assert_eq!(monitor.snapshot(), first);
        assert_eq!(monitor.format_lines().len(), 2);
    }
}
