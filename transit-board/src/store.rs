//! Preferences persistence.
//!
//! A JSON file holding the TfL credential and the favorite stations, read
//! and rewritten whole on every operation. Arrival data never lands here;
//! only station preferences persist.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::Station;

/// Errors from the preferences store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the preferences file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The preferences file exists but is not valid JSON
    #[error("preferences file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No usable preferences directory on this platform
    #[error("no preferences directory available")]
    NoConfigDir,
}

/// On-disk shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    stations: Vec<Station>,
}

/// File-backed preferences store.
///
/// Callers treat its contents as given, synchronous data; the storage
/// medium is this module's business alone.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Open the store at the platform default location.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::config_dir()
            .ok_or(StoreError::NoConfigDir)?
            .join("transit-board");
        Ok(Self::at_path(dir.join("preferences.json")))
    }

    /// Open the store at an explicit path (for testing).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The stored credential, if onboarding has happened.
    pub fn api_key(&self) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.api_key)
    }

    /// Store the credential.
    pub fn set_api_key(&self, key: &str) -> Result<(), StoreError> {
        let mut prefs = self.load()?;
        prefs.api_key = Some(key.to_string());
        self.save(&prefs)
    }

    /// Forget the credential.
    pub fn clear_api_key(&self) -> Result<(), StoreError> {
        let mut prefs = self.load()?;
        prefs.api_key = None;
        self.save(&prefs)
    }

    /// All favorite stations, in the order they were added.
    pub fn stations(&self) -> Result<Vec<Station>, StoreError> {
        Ok(self.load()?.stations)
    }

    /// Add a station and return the new list. Adding an id that is already
    /// present is a no-op.
    pub fn add_station(&self, station: Station) -> Result<Vec<Station>, StoreError> {
        let mut prefs = self.load()?;
        if !prefs.stations.iter().any(|s| s.id == station.id) {
            prefs.stations.push(station);
            self.save(&prefs)?;
        }
        Ok(prefs.stations)
    }

    /// Remove a station by id and return the new list.
    pub fn remove_station(&self, station_id: &str) -> Result<Vec<Station>, StoreError> {
        let mut prefs = self.load()?;
        prefs.stations.retain(|s| s.id != station_id);
        self.save(&prefs)?;
        Ok(prefs.stations)
    }

    /// Remove every favorite station.
    pub fn clear_stations(&self) -> Result<(), StoreError> {
        let mut prefs = self.load()?;
        prefs.stations.clear();
        self.save(&prefs)
    }

    fn load(&self) -> Result<Preferences, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(prefs)?)?;
        Ok(())
    }
}
