use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::delivery::APPLETON_TOWER;
use crate::domain::Position;
use crate::output::OutputFormat;
use crate::planner::{DEFAULT_MAX_EXPANSIONS, PlannerConfig};

fn default_base_url() -> String {
    "https://ilp-rest-2024.azurewebsites.net".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_destination() -> Position {
    APPLETON_TOWER
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_destination")]
    pub destination: Position,
    /// Read the catalog from this directory instead of the REST service
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            format: OutputFormat::default(),
            destination: default_destination(),
            data_dir: None,
            api: ApiConfig::default(),
            planner: PlannerConfig::default(),
        }
    }
}

impl FileConfig {
    /// First parseable config file from the search paths, if any
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Explicit file if given, else the first discovered one, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Ok(Self::load().unwrap_or_default()),
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("dronepath.toml"));
    paths.push(PathBuf::from(".dronepath.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("dronepath").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".dronepath.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.destination, APPLETON_TOWER);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.planner.max_expansions, DEFAULT_MAX_EXPANSIONS);
    }

    #[test]
    fn test_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            verbose = true
            format = "geojson"
            destination = { lng = -3.19, lat = 55.94 }
            data_dir = "snapshots/2025-01"

            [api]
            base_url = "http://localhost:8080"
            max_retries = 0

            [planner]
            heuristic_weight = 1.0
            max_expansions = 50000
            "#,
        )
        .unwrap();

        assert!(config.verbose);
        assert_eq!(config.format, OutputFormat::Geojson);
        assert_eq!(config.destination, Position::new(-3.19, 55.94));
        assert_eq!(config.data_dir, Some(PathBuf::from("snapshots/2025-01")));
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.max_retries, 0);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.planner.heuristic_weight, 1.0);
        assert_eq!(config.planner.step, 0.00015);
        assert_eq!(config.planner.max_expansions, 50_000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dronepath.toml");
        std::fs::write(&path, "format = \"json\"\n[planner]\ntolerance = 0.0003\n").unwrap();

        let config = FileConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.planner.tolerance, 0.0003);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::resolve(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "format = \"xml\"").unwrap();
        assert!(FileConfig::load_from(&path).is_err());
    }
}
