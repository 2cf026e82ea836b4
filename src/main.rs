//! KIAUH - Main entry point

use anyhow::Context;
use kiauh::cli::{Cli, Commands};
use kiauh::{Console, EngineConfig, Navigator, logging, menus};
use std::io::{self, IsTerminal};
use tracing::{debug, error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => EngineConfig::default(),
    };
    cli.apply_overrides(&mut config);

    logging::init_tracing(cli.verbose, config.log_file.as_deref())?;
    info!("KIAUH starting up");
    debug!(?config, "Effective configuration");

    match &cli.command {
        Some(Commands::Validate { path }) => validate_config_file(path),
        Some(Commands::PrintConfig) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        None => run_menus(&config),
    }
}

/// Validate a configuration file and exit non-zero when it is invalid
fn validate_config_file(path: &std::path::Path) -> anyhow::Result<()> {
    info!("Validating configuration file: {:?}", path);
    let result = EngineConfig::load_from_file(path).and_then(|config| config.validate());
    match result {
        Ok(()) => {
            println!("✓ Configuration file is valid: {:?}", path);
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {}", e);
            eprintln!("✗ Configuration validation failed: {}", e);
            std::process::exit(1)
        }
    }
}

/// Run the interactive menu tree until the user quits
fn run_menus(config: &EngineConfig) -> anyhow::Result<()> {
    config.validate().context("Invalid engine configuration")?;

    let no_color = std::env::var_os("NO_COLOR").is_some();
    let palette = config.palette(io::stdout().is_terminal(), no_color);
    let console = Console::stdio(palette);

    let mut navigator = Navigator::new(console, config);
    navigator
        .start(&menus::main_menu())
        .context("Menu navigation aborted")?;
    Ok(())
}
