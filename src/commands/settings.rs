use crate::cli::{Cli, Commands, ConfigCommands};
use std::path::Path;
use stormsense::services::config::AppConfig;
use stormsense::services::output::print_one;

pub fn handle_config_commands(
    cli: &Cli,
    config: &AppConfig,
    config_path: &Path,
) -> anyhow::Result<bool> {
    let Commands::Config { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ConfigCommands::Show => {
            if cli.json {
                print_one(true, config, |_| String::new())?;
            } else {
                print!("{}", toml::to_string_pretty(config)?);
            }
        }
        ConfigCommands::Path => {
            let path = config_path.to_string_lossy().to_string();
            let data = serde_json::json!({ "path": path, "exists": config_path.exists() });
            print_one(cli.json, data, |_| path.clone())?;
        }
    }
    Ok(true)
}
