//! Configuration for the sky map.
//!
//! Settings persist to disk as `config.ron`, accept CLI overrides via clap,
//! and tolerate missing or unknown fields.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CatalogConfig, Config, DebugConfig, StarfieldConfig, StyleConfig};
pub use error::ConfigError;
