use crate::libs::achievements::{group_thousands, StatsData};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn stats_table(stats: &StatsData) -> Table {
        let mut table = Table::new();
        table.add_row(row!["STAT", "VALUE"]);
        table.add_row(row!["Keypresses", group_thousands(stats.lifetime_keypresses)]);
        table.add_row(row!["Clicks", group_thousands(stats.lifetime_clicks)]);
        table.add_row(row!["Mouse distance", format!("{:.2} km", stats.mouse_km())]);
        table.add_row(row!["Active time", format!("{:.1} h", stats.active_hours())]);
        table.add_row(row!["Break streak", format!("{} days", stats.break_streak)]);
        table.add_row(row!["Breaks today", stats.daily_breaks.get(&Local::now().date_naive()).copied().unwrap_or(0)]);
        table
    }

    pub fn achievements_table(stats: &StatsData) -> Table {
        let mut table = Table::new();
        table.add_row(row!["#", "ACHIEVEMENT"]);
        for (i, id) in stats.unlocked.iter().enumerate() {
            table.add_row(row![i + 1, id]);
        }
        table
    }

    pub fn stats(stats: &StatsData) -> Result<()> {
        msg_print!(Message::StatsHeader, true);
        Self::stats_table(stats).printstd();

        msg_print!(Message::AchievementsHeader, true);
        if stats.unlocked.is_empty() {
            msg_print!(Message::NoAchievementsYet);
        } else {
            Self::achievements_table(stats).printstd();
        }
        Ok(())
    }
}
