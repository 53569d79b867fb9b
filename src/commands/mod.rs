pub mod config;
pub mod doctor;
pub mod init;
pub mod run;
pub mod state;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Run the companion")]
    Run(run::RunArgs),
    #[command(about = "Create the configuration file if missing and print its path")]
    Init(init::InitArgs),
    #[command(about = "Print the effective configuration")]
    Config,
    #[command(about = "Run one snapshot tick and print the computed mood")]
    State,
    #[command(about = "Print lifetime stats and achievements")]
    Stats,
    #[command(about = "Print runtime diagnostics")]
    Doctor,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "ASCII desktop companion", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        Self::parse().dispatch().await
    }

    pub async fn dispatch(self) -> Result<()> {
        let config_path = self.config.as_deref();
        match self.command {
            Commands::Run(args) => run::cmd(args, config_path).await,
            Commands::Init(args) => init::cmd(args, config_path),
            Commands::Config => config::cmd(config_path),
            Commands::State => state::cmd(config_path),
            Commands::Stats => stats::cmd(),
            Commands::Doctor => doctor::cmd(config_path).await,
        }
    }
}
