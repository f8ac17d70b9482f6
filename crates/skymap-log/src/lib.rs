//! Structured logging for the sky map.
//!
//! Console output with uptime timestamps and module targets, plus an optional
//! JSON log file for post-mortem analysis of dataset problems. The level comes
//! from the config and can be overridden with `RUST_LOG`.

use skymap_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written under the log directory.
pub const LOG_FILE_NAME: &str = "skymap.log";

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `log_dir` - Directory for the JSON log file
/// * `log_to_file` - Whether to write the JSON log file
/// * `config` - Optional configuration providing the log level
///
/// # Examples
///
/// ```no_run
/// use skymap_log::init_logging;
/// use skymap_config::Config;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, log_to_file: bool, config: Option<&Config>) {
    let filter_str = filter_for(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if log_to_file
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The filter string for `config`, falling back to [`DEFAULT_FILTER`].
pub fn filter_for(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_filter_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,skymap_catalog=trace".to_string();
        assert_eq!(filter_for(Some(&config)), "debug,skymap_catalog=trace");
    }

    #[test]
    fn test_empty_level_falls_back_to_default() {
        let mut config = Config::default();
        config.debug.log_level = "  ".to_string();
        assert_eq!(filter_for(Some(&config)), DEFAULT_FILTER);
        assert_eq!(filter_for(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,skymap_catalog=trace",
            "warn,skymap_scene=debug",
            "error",
        ];
        for filter_str in &valid_filters {
            let result = EnvFilter::try_new(filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {filter_str}");
        }
    }

    #[test]
    fn test_log_file_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file_path = temp_dir.path().join(LOG_FILE_NAME);
        assert_eq!(log_file_path.file_name().unwrap(), "skymap.log");
    }
}
