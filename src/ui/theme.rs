use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use log::warn;
use serde::{ Serialize, Deserialize };

/// Key the preference is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug)]
pub struct ParseThemeError(String);

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown theme '{}'", self.0)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Small string-keyed preference storage behind the theme controller.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), std::io::Error>;
}

/// Preferences as a flat JSON object in one file. Reads tolerate a missing
/// or unparseable file; writes go through read-modify-write so unrelated
/// keys survive.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn read_map(&self) -> HashMap<String, String> {
        fs
            ::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), std::io::Error> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        let serialized = serde_json
            ::to_string_pretty(&map)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, serialized)
    }
}

/// Light/dark toggle over a preference store. A missing or unreadable
/// preference falls back to Light, and the resolved theme is written back,
/// the way the page persists its initial state.
pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    current: Theme,
}

impl ThemeController {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let current: Theme = store
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        if let Err(e) = store.set(THEME_KEY, &current.to_string()) {
            warn!("Could not persist theme preference: {}", e);
        }

        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme, persists it, and returns the new value. A storage
    /// failure is logged; the in-memory theme still flips.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.set(THEME_KEY, &self.current.to_string()) {
            warn!("Could not persist theme preference: {}", e);
        }
        self.current
    }
}
