//! Engine configuration, read from a RON file.

use crate::errors::ConfigError;
use crate::evolution::EvolutionPolicy;
use crate::type_chart::TypeChartSource;
use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when none is passed explicitly.
pub const CONFIG_ENV_VAR: &str = "TEAM_ANALYSIS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Directory holding `species.ron` and `rosters.ron`
    pub data_dir: PathBuf,
    /// Override table; the built-in chart is used when unset
    pub type_chart: Option<PathBuf>,
    pub evolution: EvolutionPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            type_chart: None,
            evolution: EvolutionPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        let config: AnalysisConfig = ron::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Read the explicit path if given, then the path in `TEAM_ANALYSIS_CONFIG`,
    /// and fall back to defaults when neither is set.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn type_chart_source(&self) -> TypeChartSource {
        match &self.type_chart {
            Some(path) => TypeChartSource::File(path.clone()),
            None => TypeChartSource::BuiltIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_config("()");
        let config = AnalysisConfig::from_file(file.path()).expect("config should parse");
        assert_eq!(config, AnalysisConfig::default());
        assert!(config.evolution.assume_non_level_triggers_satisfied);
        assert_eq!(config.type_chart_source(), TypeChartSource::BuiltIn);
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"(
                data_dir: "saves",
                type_chart: Some("charts/custom.ron"),
                evolution: (assume_non_level_triggers_satisfied: false),
            )"#,
        );
        let config = AnalysisConfig::from_file(file.path()).expect("config should parse");
        assert_eq!(config.data_dir, PathBuf::from("saves"));
        assert_eq!(config.evolution, EvolutionPolicy::strict());
        assert_eq!(
            config.type_chart_source(),
            TypeChartSource::File(PathBuf::from("charts/custom.ron"))
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let file = write_config(r#"(data_dir: "explicit")"#);
        let config = AnalysisConfig::resolve(Some(file.path())).expect("config should parse");
        assert_eq!(config.data_dir, PathBuf::from("explicit"));
    }

    #[test]
    fn test_errors_name_the_file() {
        let file = write_config("(data_dir: 42)");
        assert!(matches!(
            AnalysisConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            AnalysisConfig::from_file(Path::new("/nonexistent/team_analysis.ron")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_bundled_config_parses() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/team_analysis.ron"));
        let config = AnalysisConfig::from_file(path).expect("bundled config should parse");
        assert_eq!(config, AnalysisConfig::default());
    }
}
