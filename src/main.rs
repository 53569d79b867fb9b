use anyhow::Result;
use asciipal::commands::Cli;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let default_level = if std::env::var("ASCIIPAL_DEBUG").is_ok() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    Cli::menu().await
}
