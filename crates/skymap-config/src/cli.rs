//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Sky map command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "skymap", about = "Constellation sky map")]
pub struct CliArgs {
    /// Constellation line dataset (JSON).
    #[arg(long)]
    pub line_data: Option<PathBuf>,

    /// Constellation info dataset (JSON).
    #[arg(long)]
    pub info_data: Option<PathBuf>,

    /// Constellation sphere radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Number of background stars (0 disables the starfield).
    #[arg(long)]
    pub stars: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Constellation id to select and describe after loading.
    #[arg(long)]
    pub select: Option<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.line_data {
            self.catalog.line_data = path.clone();
        }
        if let Some(ref path) = args.info_data {
            self.catalog.info_data = path.clone();
        }
        if let Some(radius) = args.radius {
            self.catalog.radius = radius;
        }
        if let Some(count) = args.stars {
            self.starfield.count = count;
            self.starfield.enabled = count > 0;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
