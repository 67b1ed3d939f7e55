use clap::Parser;
use stormsense::services::config::{load_config, resolve_config_path};
use stormsense::services::telemetry::init_tracing;

mod cli;
mod commands;

use cli::Cli;
use commands::{handle_config_commands, handle_runtime_commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = load_config(&config_path)?;
    init_tracing(&config.logging.level);
    tracing::debug!(path = %config_path.display(), command = ?cli.command, "starting");

    if handle_config_commands(&cli, &config, &config_path)? {
        return Ok(());
    }
    handle_runtime_commands(&cli, &config)
}
