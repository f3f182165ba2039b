//! Front-end configuration.
//!
//! Everything here only locates files and picks the quiz mode; the shuffle
//! preferences live in the settings record, not in this file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use testx_core::QuizMode;

/// How a quiz run treats early exits and empty answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    /// Report partial statistics on quit and offer a retry of wrong answers.
    #[default]
    Retry,
    /// Print the running score on quit; an empty answer selects nothing.
    Minimal,
}

impl From<ModeSetting> for QuizMode {
    fn from(mode: ModeSetting) -> Self {
        match mode {
            ModeSetting::Retry => QuizMode::Retry,
            ModeSetting::Minimal => QuizMode::Minimal,
        }
    }
}

/// Top-level testx configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestxConfig {
    /// Directory scanned for `*.txt` question files.
    #[serde(default = "default_texts_dir")]
    pub texts_dir: PathBuf,
    /// Where the shuffle preferences are persisted.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    #[serde(default)]
    pub mode: ModeSetting,
}

fn default_texts_dir() -> PathBuf {
    PathBuf::from("Texts")
}
fn default_settings_path() -> PathBuf {
    PathBuf::from("settings.json")
}

impl Default for TestxConfig {
    fn default() -> Self {
        Self {
            texts_dir: default_texts_dir(),
            settings_path: default_settings_path(),
            mode: ModeSetting::default(),
        }
    }
}

impl TestxConfig {
    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        texts_dir: Option<PathBuf>,
        settings_path: Option<PathBuf>,
        mode: Option<ModeSetting>,
    ) -> Self {
        if let Some(dir) = texts_dir {
            self.texts_dir = dir;
        }
        if let Some(path) = settings_path {
            self.settings_path = path;
        }
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self
    }
}

/// Load config from an explicit path, or from `testx.toml` in the current
/// directory when it exists.
pub fn load_config_from(path: Option<&Path>) -> Result<TestxConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => Some(PathBuf::from("testx.toml")).filter(|local| local.exists()),
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<TestxConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(?config, "config loaded from {}", path.display());
            Ok(config)
        }
        None => Ok(TestxConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TestxConfig::default();
        assert_eq!(config.texts_dir, PathBuf::from("Texts"));
        assert_eq!(config.settings_path, PathBuf::from("settings.json"));
        assert_eq!(config.mode, ModeSetting::Retry);
    }

    #[test]
    fn parse_partial_config() {
        let config: TestxConfig = toml::from_str(r#"mode = "minimal""#).unwrap();
        assert_eq!(config.mode, ModeSetting::Minimal);
        assert_eq!(config.texts_dir, PathBuf::from("Texts"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("testx.toml");
        std::fs::write(
            &path,
            "texts_dir = \"quizzes\"\nsettings_path = \"prefs.json\"\n",
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.texts_dir, PathBuf::from("quizzes"));
        assert_eq!(config.settings_path, PathBuf::from("prefs.json"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("testx.toml");
        std::fs::write(&path, "mode = \"sometimes\"").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }

    #[test]
    fn overrides_win() {
        let config = TestxConfig::default().with_overrides(
            Some(PathBuf::from("elsewhere")),
            None,
            Some(ModeSetting::Minimal),
        );
        assert_eq!(config.texts_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.settings_path, PathBuf::from("settings.json"));
        assert_eq!(config.mode, ModeSetting::Minimal);
    }
}
