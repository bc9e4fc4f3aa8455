//! Configuration loading for vetro.
//!
//! Lives at `~/.config/vetro/config.toml`. Missing files silently
//! yield defaults; malformed files warn and fall back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Top-level configuration.
///
/// Missing sections fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File logging settings.
    pub log: LogConfig,
}

/// Returns the config directory: `~/.config/vetro/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("vetro"))
}

/// Returns the config file path: `~/.config/vetro/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A non-existent file silently returns defaults; any other failure
/// prints a warning and returns defaults.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("No such file")
        || e.contains("cannot find the path")
        || e.contains("cannot find the file")
}

/// Generates the commented default `config.toml` written by `vetro init`.
pub fn template() -> String {
    let defaults = LogConfig::default();
    format!(
        r#"# Vetro configuration.
# Delete any line to fall back to its default.

[log]
# Write a log file to ~/.config/vetro/logs/vetro.log
enabled = {enabled}
# Minimum level: "debug", "info", "warn", or "error"
level = "{level}"
# Rotate the log file after this many megabytes (one backup kept)
max_file_mb = {max_file_mb}
"#,
        enabled = defaults.enabled,
        level = defaults.level,
        max_file_mb = defaults.max_file_mb,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.log.enabled);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.max_file_mb, 10);
    }

    #[test]
    fn partial_log_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(!config.log.enabled);
    }

    #[test]
    fn template_round_trips_through_the_parser() {
        let config: Config = toml::from_str(&template()).unwrap();
        assert_eq!(config.log.max_file_mb, LogConfig::default().max_file_mb);
    }
}
