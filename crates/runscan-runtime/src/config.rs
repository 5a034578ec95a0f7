use crate::{Error, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. RUNSCAN_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.runscan (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: RUNSCAN_PATH environment variable
    if let Ok(env_path) = std::env::var("RUNSCAN_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("runscan"));
    }

    // Priority 4: ~/.runscan
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".runscan"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./out")
}

fn default_publish_raw() -> bool {
    true
}

fn default_runs_file() -> String {
    "runs.json".to_string()
}

fn default_live_file() -> String {
    "live.json".to_string()
}

fn default_manifest_file() -> String {
    "manifest.json".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `output_*.json` captures
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Year for historical file names, which carry month and day only.
    /// Defaults to the current local year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Copy historical captures into `<output>/raw/`
    #[serde(default = "default_publish_raw")]
    pub publish_raw: bool,

    #[serde(default = "default_runs_file")]
    pub runs_file: String,

    #[serde(default = "default_live_file")]
    pub live_file: String,

    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            year: None,
            publish_raw: default_publish_raw(),
            runs_file: default_runs_file(),
            live_file: default_live_file(),
            manifest_file: default_manifest_file(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn effective_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Output file names must be plain names inside the output directory.
    pub fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("runs_file", &self.runs_file),
            ("live_file", &self.live_file),
            ("manifest_file", &self.manifest_file),
        ] {
            if name.is_empty() || name.contains(['/', '\\']) || name == "raw" {
                return Err(Error::Config(format!(
                    "{} must be a plain file name, got {:?}",
                    key, name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.output_dir, PathBuf::from("./out"));
        assert!(config.publish_raw);
        assert_eq!(config.runs_file, "runs.json");
        assert_eq!(config.year, None);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            input_dir: PathBuf::from("/captures"),
            year: Some(2025),
            publish_raw: false,
            ..Config::default()
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.effective_year(), 2025);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "output_dir = \"/srv/www\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.output_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.live_file, "live.json");
        assert!(config.publish_raw);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "publish_raw = \"maybe\"\n")?;

        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn test_output_names_must_be_plain() {
        let config = Config {
            runs_file: "../runs.json".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        assert_eq!(
            resolve_workspace_path(Some("/data/runscan"))?,
            PathBuf::from("/data/runscan")
        );
        Ok(())
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
        assert_eq!(expand_tilde("/abs"), PathBuf::from("/abs"));
    }
}
