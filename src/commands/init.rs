//! Configuration initialization command.
//!
//! Creates the configuration file with defaults when it is missing and
//! prints its path. With `--interactive` a short wizard walks through the
//! break and mood timings first.

use crate::{
    libs::{config::Config, messages::Message},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Walk through the timing settings before saving
    #[arg(short, long)]
    pub interactive: bool,
}

pub fn cmd(init_args: InitArgs, config_path: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    if Config::ensure_exists(&path)? {
        msg_success!(Message::ConfigCreated(path.display().to_string()));
    }

    if init_args.interactive {
        let config = Config::load(&path)?.init()?;
        config.save_to(&path)?;
        msg_success!(Message::ConfigSaved);
    }

    msg_print!(Message::ConfigPath(path.display().to_string()));
    Ok(())
}
