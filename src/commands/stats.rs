use crate::libs::achievements::AchievementManager;
use crate::libs::view::View;
use anyhow::Result;

/// Prints lifetime stats and unlocked achievements.
pub fn cmd() -> Result<()> {
    let manager = AchievementManager::new()?;
    View::stats(manager.stats())
}
