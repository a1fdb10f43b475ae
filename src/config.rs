// Configuration loading module

use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::managers::TabBarConfigYaml;
use crate::utilities::parse_color;

/// Errors raised while loading or converting configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unknown color '{value}' for {field}")]
    UnknownColor { field: String, value: String },

    #[error("invalid tab {index}: {reason}")]
    InvalidTab { index: usize, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub application: ApplicationConfig,
    pub tab_bar: TabBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub status_text: String,
    /// Colors cycled through by the tint key
    #[serde(default = "default_tint_palette")]
    pub tint_palette: Vec<String>,
    /// Colors cycled through by the inactive color key
    #[serde(default = "default_inactive_palette")]
    pub inactive_palette: Vec<String>,
}

fn default_tint_palette() -> Vec<String> {
    ["cyan", "green", "magenta", "yellow"].iter().map(|s| s.to_string()).collect()
}

fn default_inactive_palette() -> Vec<String> {
    ["#777777", "white", "dark_gray"].iter().map(|s| s.to_string()).collect()
}

impl ApplicationConfig {
    pub fn tint_colors(&self) -> Result<Vec<Color>, ConfigError> {
        parse_palette("tint_palette", &self.tint_palette)
    }

    pub fn inactive_colors(&self) -> Result<Vec<Color>, ConfigError> {
        parse_palette("inactive_palette", &self.inactive_palette)
    }
}

fn parse_palette(field: &str, values: &[String]) -> Result<Vec<Color>, ConfigError> {
    values
        .iter()
        .map(|value| {
            parse_color(value).ok_or_else(|| ConfigError::UnknownColor {
                field: field.to_string(),
                value: value.clone(),
            })
        })
        .collect()
}

/// Default config path: src/config.yaml next to the manifest
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<DemoConfig, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<DemoConfig, ConfigError> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    log::debug!("loaded config from {}", path.display());
    parse_config(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::create_tab_bar_from_config;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = parse_config(include_str!("config.yaml")).unwrap();
        assert!(!config.application.title.is_empty());
        assert!(!config.application.tint_colors().unwrap().is_empty());
        assert!(!config.application.inactive_colors().unwrap().is_empty());

        let bar = create_tab_bar_from_config(&config.tab_bar).unwrap();
        assert_eq!(bar.item_count(), config.tab_bar.tabs.len());
    }

    #[test]
    fn test_palettes_default_when_missing() {
        let config = parse_config(
            "application:\n  title: T\n  status_text: S\ntab_bar:\n  tabs: []\n",
        )
        .unwrap();
        assert_eq!(config.application.tint_colors().unwrap()[0], Color::Cyan);
        assert_eq!(config.application.inactive_colors().unwrap().len(), 3);
    }

    #[test]
    fn test_bad_palette_entry_is_reported() {
        let config = parse_config(
            "application:\n  title: T\n  status_text: S\n  tint_palette: [red, nope]\ntab_bar:\n  tabs: []\n",
        )
        .unwrap();
        assert!(matches!(
            config.application.tint_colors(),
            Err(ConfigError::UnknownColor { ref value, .. }) if value == "nope"
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = PathBuf::from("/nonexistent/mini-tab-bar/config.yaml");
        match load_config(Some(path.clone())) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other.map(|c| c.application.title)),
        }
    }

    #[test]
    fn test_schema_mismatch_is_parse_error() {
        assert!(matches!(parse_config("application: 3\n"), Err(ConfigError::Parse(_))));
    }
}
