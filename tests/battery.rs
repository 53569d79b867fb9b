#[cfg(test)]
mod tests {
    use asciipal::libs::battery::{parse_pmset, read_sysfs_battery, BatterySnapshot};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SysfsTestContext {
        battery_dir: TempDir,
    }

    impl SysfsTestContext {
        fn write(&self, capacity: &str, status: &str) {
            fs::write(self.battery_dir.path().join("capacity"), capacity).unwrap();
            fs::write(self.battery_dir.path().join("status"), status).unwrap();
        }
    }

    impl TestContext for SysfsTestContext {
        fn setup() -> Self {
            SysfsTestContext {
                battery_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_format_line() {
        assert_eq!(BatterySnapshot { percent: 42, charging: false }.format_line(), "Battery: 42%");
        assert_eq!(BatterySnapshot { percent: 100, charging: true }.format_line(), "Battery: 100% ⚡");
    }

    #[test_context(SysfsTestContext)]
    #[test]
    fn test_sysfs_charging(ctx: &mut SysfsTestContext) {
        ctx.write("87\n", "Charging\n");
        assert_eq!(read_sysfs_battery(ctx.battery_dir.path()), Some(BatterySnapshot { percent: 87, charging: true }));
    }

    #[test_context(SysfsTestContext)]
    #[test]
    fn test_sysfs_full_counts_as_charging(ctx: &mut SysfsTestContext) {
        ctx.write("100\n", "Full\n");
        assert_eq!(read_sysfs_battery(ctx.battery_dir.path()).map(|snapshot| snapshot.charging), Some(true));
    }

    #[test_context(SysfsTestContext)]
    #[test]
    fn test_sysfs_discharging(ctx: &mut SysfsTestContext) {
        ctx.write("31", "Discharging");
        assert_eq!(read_sysfs_battery(ctx.battery_dir.path()), Some(BatterySnapshot { percent: 31, charging: false }));
    }

    #[test_context(SysfsTestContext)]
    #[test]
    fn test_sysfs_unreadable_capacity(ctx: &mut SysfsTestContext) {
        assert_eq!(read_sysfs_battery(ctx.battery_dir.path()), None);
        ctx.write("unknown", "Charging");
        assert_eq!(read_sysfs_battery(ctx.battery_dir.path()), None);
    }

    #[test]
    fn test_pmset_output() {
        let charging = "Now drawing from 'AC Power'\n -InternalBattery-0 (id=4653155)\t95%; charging; 0:20 remaining present: true\n";
        assert_eq!(parse_pmset(charging), Some(BatterySnapshot { percent: 95, charging: true }));

        let discharging = "Now drawing from 'Battery Power'\n -InternalBattery-0 (id=4653155)\t64%; discharging; 4:02 remaining present: true\n";
        assert_eq!(parse_pmset(discharging), Some(BatterySnapshot { percent: 64, charging: false }));

        assert_eq!(parse_pmset("Now drawing from 'AC Power'\n"), None);
    }
}
