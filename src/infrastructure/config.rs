//! Configuration management

use crate::error::{FormatterError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Replaces the timesheet's extension to name the hours report
    pub output_suffix: String,
    /// Replaces the timesheet's extension to name the split timesheet
    pub separated_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_suffix: "_output.csv".to_string(),
            separated_suffix: "_separated.csv".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. Keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FormatterError::Config(format!("Config file not found: {}", path.display()))
            } else {
                FormatterError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.check()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Where the hours report for `timesheet` is written
    pub fn output_path_for(&self, timesheet: &Path) -> PathBuf {
        with_suffix(timesheet, &self.output_suffix)
    }

    /// Where the split timesheet for `timesheet` is written
    pub fn separated_path_for(&self, timesheet: &Path) -> PathBuf {
        with_suffix(timesheet, &self.separated_suffix)
    }

    fn check(&self) -> Result<()> {
        for (key, suffix) in [
            ("output_suffix", &self.output_suffix),
            ("separated_suffix", &self.separated_suffix),
        ] {
            if suffix.is_empty() || suffix.contains(['/', '\\']) {
                return Err(FormatterError::Config(format!(
                    "{} must be a non-empty file name suffix, got '{}'",
                    key, suffix
                )));
            }
        }
        Ok(())
    }
}

/// `dir/hours.csv` + `_output.csv` -> `dir/hours_output.csv`
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}{}", stem, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_suffix, "_output.csv");
        assert_eq!(config.separated_suffix, "_separated.csv");
    }

    #[test]
    fn test_output_path_replaces_extension() {
        let config = Config::default();
        assert_eq!(
            config.output_path_for(Path::new("/data/week1.csv")),
            PathBuf::from("/data/week1_output.csv")
        );
        assert_eq!(
            config.separated_path_for(Path::new("week1.CSV")),
            PathBuf::from("week1_separated.csv")
        );
        assert_eq!(
            config.output_path_for(Path::new("export")),
            PathBuf::from("export_output.csv")
        );
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("formatter.toml");
        fs::write(&path, "output_suffix = \"_state.csv\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_suffix, "_state.csv");
        assert_eq!(config.separated_suffix, "_separated.csv");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(&temp.path().join("nope.toml"));

        match result.unwrap_err() {
            FormatterError::Config(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("formatter.toml");
        fs::write(&path, "suffix = \"_x.csv\"\n").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(FormatterError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn test_load_rejects_path_in_suffix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("formatter.toml");
        fs::write(&path, "output_suffix = \"/tmp/out.csv\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(FormatterError::Config(_))));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
