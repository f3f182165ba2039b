//! Persisted quiz preferences.
//!
//! The record is a small JSON document:
//!
//! ```json
//! {
//!     "shuffle_questions": true,
//!     "shuffle_answers": false
//! }
//! ```
//!
//! Loading never fails the caller and saving is best-effort; problems are
//! logged and the in-memory settings stay authoritative.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::SettingsError;

/// The two shuffle preferences. Missing keys default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shuffle_questions: bool,
    pub shuffle_answers: bool,
}

/// Read the settings record, reporting any failure to the caller.
///
/// A missing file is not an error and yields the defaults.
pub fn try_load(path: &Path) -> Result<Settings, SettingsError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&content)?)
}

/// Read the settings record, falling back to defaults on any failure.
pub fn load(path: &Path) -> Settings {
    match try_load(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("using default settings, {}: {e}", path.display());
            Settings::default()
        }
    }
}

/// Write the settings record with four-space indentation.
pub fn try_save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    settings.serialize(&mut ser)?;
    buf.push(b'\n');
    std::fs::write(path, buf)?;
    Ok(())
}

/// Write the settings record, logging instead of returning failures.
pub fn save(path: &Path, settings: &Settings) {
    if let Err(e) = try_save(path, settings) {
        tracing::error!("failed to save settings to {}: {e}", path.display());
    }
}

/// Owns the current settings and the file they persist to.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from `path` once; later reads come from memory.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = load(&path);
        tracing::debug!(?settings, "settings loaded from {}", path.display());
        Self { path, settings }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Flip question shuffling, persist, and return the new value.
    pub fn toggle_shuffle_questions(&mut self) -> bool {
        self.settings.shuffle_questions = !self.settings.shuffle_questions;
        self.save();
        self.settings.shuffle_questions
    }

    /// Flip answer shuffling, persist, and return the new value.
    pub fn toggle_shuffle_answers(&mut self) -> bool {
        self.settings.shuffle_answers = !self.settings.shuffle_answers;
        self.save();
        self.settings.shuffle_answers
    }

    pub fn save(&self) {
        save(&self.path, &self.settings);
    }
}
