//! Persisted user preferences for Sentineye consumers.
//!
//! TOML file + environment layering for the two cross-session settings
//! the dashboard core expects its host to keep: the chosen language
//! code and the theme. The core treats both as opaque; this crate only
//! stores and retrieves them.

use std::fmt;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to serialize preferences: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("preferences loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Theme ───────────────────────────────────────────────────────────

/// Appearance preference. Opaque to the core; the presentation layer
/// applies it as a styling side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Preferences ─────────────────────────────────────────────────────

/// The persisted preference set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// BCP-47-ish language code handed to the locale loader.
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: default_language(),
            theme: Theme::default(),
        }
    }
}

fn default_language() -> String {
    "en".into()
}

impl Preferences {
    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }
}

// ── Preferences file path ───────────────────────────────────────────

/// Resolve the preferences file path via XDG / platform conventions.
pub fn preferences_path() -> PathBuf {
    ProjectDirs::from("com", "sentineye", "sentineye").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("preferences.toml");
            p
        },
        |dirs| dirs.config_dir().join("preferences.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("sentineye");
    p
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load preferences from the canonical path + environment.
pub fn load_preferences() -> Result<Preferences, ConfigError> {
    load_preferences_from(&preferences_path())
}

/// Load preferences from `path`, layered under `SENTINEYE_*` env vars.
pub fn load_preferences_from(path: &Path) -> Result<Preferences, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Preferences::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SENTINEYE_"));

    let prefs: Preferences = figment.extract()?;
    Ok(prefs)
}

/// Load preferences, returning defaults if nothing is stored yet.
pub fn load_preferences_or_default() -> Preferences {
    load_preferences().unwrap_or_default()
}

// ── Saving ──────────────────────────────────────────────────────────

/// Serialize preferences to TOML and write to the canonical path.
pub fn save_preferences(prefs: &Preferences) -> Result<(), ConfigError> {
    save_preferences_to(&preferences_path(), prefs)
}

/// Serialize preferences to TOML and write to `path`.
pub fn save_preferences_to(path: &Path, prefs: &Preferences) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(prefs)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
