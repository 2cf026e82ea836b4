use crate::config::{ColorChoice, EngineConfig};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// KIAUH - Klipper Installation And Update Helper
#[derive(Parser, Debug)]
#[command(name = "kiauh")]
#[command(about = "Menu-driven helper for installing and updating Klipper components")]
#[command(version)]
pub struct Cli {
    /// Path to an engine configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorChoice>,

    /// Disable colors (same as --color never)
    #[arg(long, global = true, conflicts_with = "color")]
    pub no_color: bool,

    /// Clear the screen before each menu
    #[arg(long, global = true)]
    pub clear: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Validate an engine configuration file
    Validate {
        /// Path to configuration file to validate
        path: PathBuf,
    },
    /// Print the effective configuration as JSON
    PrintConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply command line overrides on top of file settings.
    pub fn apply_overrides(&self, config: &mut EngineConfig) {
        if let Some(color) = self.color {
            config.color = color;
        }
        if self.no_color {
            config.color = ColorChoice::Never;
        }
        if self.clear {
            config.clear_screen = true;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}
