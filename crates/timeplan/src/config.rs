/// Configuration for the planner server
use crate::error::PlannerError;
use crate::schedule::PeriodTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Top-level planner configuration, loaded from a JSON file.
///
/// Every field has a default so a partial (or absent) config file works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Address the API server binds to
    pub bind_address: String,
    pub port: u16,
    /// Path to the SQLite database file
    pub db_path: String,
    /// Directory containing per-term catalog CSV exports (`<term>.csv`)
    pub catalog_dir: PathBuf,
    /// Credits required for graduation
    pub graduation_credits: f64,
    /// Institutional period-to-clock-time convention
    pub period_table: PeriodTable,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            bind_address: "127.0.0.1".to_string(),
            port: 3001,
            db_path: "planner.sqlite".to_string(),
            catalog_dir: PathBuf::from("catalogs"),
            graduation_credits: 120.0,
            period_table: PeriodTable::default(),
        }
    }
}

impl PlannerConfig {
    /// Loads the configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, PlannerError> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig =
            serde_json::from_str(&content).map_err(|e| PlannerError::Config {
                message: format!("{}: {}", path.display(), e),
            })?;
        Ok(config)
    }

    /// Loads from `path` if given, falling back to defaults when no path is
    /// supplied or the file does not exist. A file that exists but fails to
    /// parse is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, PlannerError> {
        match path {
            Some(p) if p.exists() => Self::load_from_file(p),
            Some(p) => {
                warn!("Config file {} not found, using defaults", p.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.graduation_credits, 120.0);
        assert_eq!(config.period_table.start_hour, 9);
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{"port": 9000, "period_table": {"start_hour": 8}}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.period_table.start_hour, 8);
        // untouched fields keep defaults
        assert_eq!(config.period_table.period_minutes, 60);
        assert_eq!(config.db_path, "planner.sqlite");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            PlannerConfig::load_or_default(Some(Path::new("/nonexistent/timeplan.json"))).unwrap();
        assert_eq!(config.graduation_credits, 120.0);
    }
}
