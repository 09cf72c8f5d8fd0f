//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Roster configuration, merged in priority order
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default roster data file for commands run without `--file`
    pub roster_file: Option<PathBuf>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order:
    /// built-in defaults, global user config, environment variables.
    /// Missing or unreadable config files are skipped, never fatal.
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/roster/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(file) = std::env::var("ROSTER_FILE") {
            config.roster_file = Some(PathBuf::from(file));
        }
        if let Ok(format) = std::env::var("ROSTER_FORMAT") {
            config.default_format = Some(format);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "roster")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.roster_file.is_some() {
            self.roster_file = other.roster_file;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            roster_file: Some(PathBuf::from("a.tsv")),
            default_format: None,
        };
        base.merge(Config {
            roster_file: Some(PathBuf::from("b.tsv")),
            default_format: Some("json".to_string()),
        });
        assert_eq!(base.roster_file, Some(PathBuf::from("b.tsv")));
        assert_eq!(base.default_format, Some("json".to_string()));
    }

    #[test]
    fn test_merge_keeps_base_when_other_empty() {
        let mut base = Config {
            roster_file: Some(PathBuf::from("a.tsv")),
            default_format: Some("table".to_string()),
        };
        base.merge(Config::default());
        assert_eq!(base.roster_file, Some(PathBuf::from("a.tsv")));
        assert_eq!(base.default_format, Some("table".to_string()));
    }

    #[test]
    fn test_yaml_parsing() {
        let config: Config =
            serde_yml::from_str("roster_file: staff.tsv\ndefault_format: tsv\n").unwrap();
        assert_eq!(config.roster_file, Some(PathBuf::from("staff.tsv")));
        assert_eq!(config.default_format, Some("tsv".to_string()));
    }
}
