use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fleetdesk::config::{Config, ConfigError};
use fleetdesk::logging::init_tracing;
use fleetdesk::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "fleetdesk")]
#[command(version)]
#[command(about = "Terminal console for managing drivers, trucks and their daily assignments")]
struct Cli {
    /// Config file to load instead of ~/.config/fleetdesk/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the fleet service base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(1);
        }
    };

    match runtime::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "console exited with an error");
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_overrides(cli.api_url.clone())?;
    Ok(config)
}
