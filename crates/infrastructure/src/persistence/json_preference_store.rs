//! Unit preference stored in a small JSON file
//!
//! File layout: `{ "units": "metric" }` or `{ "units": "imperial" }`.

use std::path::{Path, PathBuf};

use application::{ApplicationError, PreferenceStore};
use async_trait::async_trait;
use domain::UnitPreference;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::{map_io_error, map_json_error};

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    units: UnitPreference,
}

/// `PreferenceStore` backed by a JSON file on local disk
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// Create a store for the given file; nothing is touched until used
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PreferenceStore for JsonPreferenceStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Option<UnitPreference>, ApplicationError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No stored preference");
                return Ok(None);
            },
            Err(e) => return Err(map_io_error("reading preferences", &e)),
        };

        let stored: StoredPreferences = serde_json::from_str(&contents)
            .map_err(|e| map_json_error("reading preferences", &e))?;
        Ok(Some(stored.units))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn save(&self, units: UnitPreference) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io_error("creating preference directory", &e))?;
        }

        let json = serde_json::to_string_pretty(&StoredPreferences { units })
            .map_err(|e| map_json_error("writing preferences", &e))?;

        // Write then rename so a crash never leaves a truncated file
        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| map_io_error("writing preferences", &e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| map_io_error("writing preferences", &e))?;

        debug!(%units, "Stored unit preference");
        Ok(())
    }
}
