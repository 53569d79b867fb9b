use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use std::path::Path;

/// Prints the effective configuration as pretty JSON.
pub fn cmd(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(&Config::resolve_path(config_path)?)?;
    msg_print!(Message::ConfigDump(serde_json::to_string_pretty(&config)?));
    Ok(())
}
